//! From-scratch independence checks for the solutions produced in the integration tests.
#![allow(
    dead_code,
    reason = "is used in integration tests but unable to find a way to silence these warnings"
)]

use fnv::FnvHashSet;
use matroid_core::ApproximationSolution;

/// The bipartite instance on which greedy matching gets stuck after the first edge.
pub(crate) fn greedy_trap() -> Vec<Vec<usize>> {
    vec![vec![0, 0], vec![0, 1], vec![1, 0]]
}

/// Returns whether no vertex on any side of the hypergraph is used twice by `solution`.
pub(crate) fn is_matching(edges: &[Vec<usize>], solution: &ApproximationSolution) -> bool {
    let mut used = FnvHashSet::default();
    solution.indices().into_iter().all(|edge| {
        edges[edge]
            .iter()
            .enumerate()
            .all(|(side, &vertex)| used.insert((side, vertex)))
    })
}

/// Returns whether `solution` forms vertex-disjoint directed paths in the graph.
pub(crate) fn is_path_forest(
    vertex_count: usize,
    edges: &[(usize, usize)],
    solution: &ApproximationSolution,
) -> bool {
    let mut next = vec![None; vertex_count];
    let mut has_predecessor = vec![false; vertex_count];

    for edge in solution.indices() {
        let (tail, head) = edges[edge];
        if next[tail].is_some() || has_predecessor[head] {
            return false;
        }
        next[tail] = Some(head);
        has_predecessor[head] = true;
    }

    // With in- and out-degree at most one, every component is a path or a cycle; a path has a
    // vertex without predecessor.
    let mut visited = vec![false; vertex_count];
    for start in (0..vertex_count).filter(|&vertex| !has_predecessor[vertex]) {
        let mut current = Some(start);
        while let Some(vertex) = current {
            visited[vertex] = true;
            current = next[vertex];
        }
    }
    visited.into_iter().all(|reached| reached)
}

/// Returns whether the indices of `solution` are strictly increasing and inside the ground set.
pub(crate) fn is_well_formed(ground_set_size: usize, solution: &ApproximationSolution) -> bool {
    let indices = solution.indices();
    indices.windows(2).all(|pair| pair[0] < pair[1])
        && indices.iter().all(|&index| index < ground_set_size)
}
