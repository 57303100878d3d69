//! Checks solutions against the instance from scratch, without going through any oracle.

use fnv::FnvHashSet;
use matroid_solver::core::problem::InstanceStructure;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub(crate) enum ValidationError {
    #[error("edge {edge} uses vertex {vertex}, but there are only {vertex_count} vertices")]
    EdgeOutOfBounds {
        edge: usize,
        vertex: usize,
        vertex_count: usize,
    },
    #[error("edge {edge} has {actual} endpoints, expected {expected}")]
    WrongRank {
        edge: usize,
        expected: usize,
        actual: usize,
    },
    #[error("element {element} is not one of the {ground_set_size} edges")]
    ElementOutOfRange {
        element: usize,
        ground_set_size: usize,
    },
    #[error("element {element} occurs more than once")]
    DuplicateElement { element: usize },
    #[error("vertex {vertex} on side {side} is covered twice")]
    VertexUsedTwice { side: usize, vertex: usize },
    #[error("vertex {vertex} has multiple incoming edges")]
    MultipleIncoming { vertex: usize },
    #[error("vertex {vertex} has multiple outgoing edges")]
    MultipleOutgoing { vertex: usize },
    #[error("the solution contains a cycle through vertex {vertex}")]
    Cycle { vertex: usize },
}

/// Validates `solution` against the instance it was computed for.
pub(crate) fn validate(
    structure: &InstanceStructure,
    solution: &[usize],
) -> Result<(), ValidationError> {
    match structure {
        InstanceStructure::Matching {
            rank,
            vertices_per_part,
            edges,
        } => validate_matching(*rank, *vertices_per_part, edges, solution),
        InstanceStructure::DirectedGraph {
            vertex_count,
            edges,
        } => validate_hamiltonian_path(*vertex_count, edges, solution),
        InstanceStructure::Unstructured => Ok(()),
    }
}

/// A solution of a k-dimensional matching problem covers every vertex on every side at most once.
pub(crate) fn validate_matching(
    rank: usize,
    vertices_per_part: usize,
    edges: &[Vec<usize>],
    solution: &[usize],
) -> Result<(), ValidationError> {
    for (edge, endpoints) in edges.iter().enumerate() {
        if endpoints.len() != rank {
            return Err(ValidationError::WrongRank {
                edge,
                expected: rank,
                actual: endpoints.len(),
            });
        }
        check_vertices(edge, endpoints.iter().copied(), vertices_per_part)?;
    }
    check_solution_set(edges.len(), solution)?;

    let mut used = vec![vec![false; vertices_per_part]; rank];
    for &edge in solution {
        for (side, &vertex) in edges[edge].iter().enumerate() {
            if used[side][vertex] {
                return Err(ValidationError::VertexUsedTwice { side, vertex });
            }
            used[side][vertex] = true;
        }
    }

    Ok(())
}

/// A solution of the Hamiltonian-path relaxation is a set of vertex-disjoint directed paths.
pub(crate) fn validate_hamiltonian_path(
    vertex_count: usize,
    edges: &[(usize, usize)],
    solution: &[usize],
) -> Result<(), ValidationError> {
    for (edge, &(tail, head)) in edges.iter().enumerate() {
        check_vertices(edge, [tail, head].into_iter(), vertex_count)?;
    }
    check_solution_set(edges.len(), solution)?;

    let mut incoming = vec![false; vertex_count];
    let mut outgoing = vec![None; vertex_count];
    for &edge in solution {
        let (tail, head) = edges[edge];
        if incoming[head] {
            return Err(ValidationError::MultipleIncoming { vertex: head });
        }
        incoming[head] = true;

        if outgoing[tail].is_some() {
            return Err(ValidationError::MultipleOutgoing { vertex: tail });
        }
        outgoing[tail] = Some(head);
    }

    // Every walk is labelled with the vertex it started from; meeting the own label again means
    // the walk went around a cycle.
    let mut walk_of = vec![None; vertex_count];
    for start in 0..vertex_count {
        if walk_of[start].is_some() {
            continue;
        }
        walk_of[start] = Some(start);

        let mut current = start;
        while let Some(next) = outgoing[current] {
            match walk_of[next] {
                Some(walk) if walk == start => return Err(ValidationError::Cycle { vertex: next }),
                Some(_) => break,
                None => walk_of[next] = Some(start),
            }
            current = next;
        }
    }

    Ok(())
}

fn check_vertices(
    edge: usize,
    mut vertices: impl Iterator<Item = usize>,
    vertex_count: usize,
) -> Result<(), ValidationError> {
    match vertices.find(|&vertex| vertex >= vertex_count) {
        Some(vertex) => Err(ValidationError::EdgeOutOfBounds {
            edge,
            vertex,
            vertex_count,
        }),
        None => Ok(()),
    }
}

fn check_solution_set(ground_set_size: usize, solution: &[usize]) -> Result<(), ValidationError> {
    let mut seen = FnvHashSet::default();
    for &element in solution {
        if element >= ground_set_size {
            return Err(ValidationError::ElementOutOfRange {
                element,
                ground_set_size,
            });
        }
        if !seen.insert(element) {
            return Err(ValidationError::DuplicateElement { element });
        }
    }
    Ok(())
}
