use fnv::FnvHashSet;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::Rng;
use rand::SeedableRng;

/// Generates random instances; the same seed always produces the same instances.
#[derive(Debug)]
pub(crate) struct InstanceGenerator {
    rng: SmallRng,
}

impl InstanceGenerator {
    pub(crate) fn new(seed: u64) -> InstanceGenerator {
        InstanceGenerator {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// An Erdős–Rényi bipartite graph with `n` vertices on each side, where every edge `(left,
    /// right)` is present with probability `p`.
    pub(crate) fn bipartite(&mut self, n: usize, p: f64) -> Vec<Vec<usize>> {
        let mut edges = vec![];
        for left in 0..n {
            for right in 0..n {
                if self.rng.gen::<f64>() < p {
                    edges.push(vec![left, right]);
                }
            }
        }
        edges
    }

    /// A 3-uniform tripartite hypergraph with `n` vertices in each part, where every hyperedge
    /// `(a, b, c)` is present with probability `p`.
    pub(crate) fn three_dimensional(&mut self, n: usize, p: f64) -> Vec<Vec<usize>> {
        let mut edges = vec![];
        for a in 0..n {
            for b in 0..n {
                for c in 0..n {
                    if self.rng.gen::<f64>() < p {
                        edges.push(vec![a, b, c]);
                    }
                }
            }
        }
        edges
    }

    /// A directed graph on `n` vertices without self loops, where every edge is present with
    /// probability `p`.
    ///
    /// In addition, a path through `min_path_length` randomly chosen vertices is planted, so the
    /// graph has a path of at least `min_path_length - 1` edges. The edges are returned in random
    /// order.
    pub(crate) fn directed_graph(
        &mut self,
        n: usize,
        p: f64,
        min_path_length: usize,
    ) -> Vec<(usize, usize)> {
        let mut edges = vec![];
        for tail in 0..n {
            for head in (0..n).filter(|&head| head != tail) {
                if self.rng.gen::<f64>() < p {
                    edges.push((tail, head));
                }
            }
        }

        let mut vertices = (0..n).collect::<Vec<_>>();
        vertices.shuffle(&mut self.rng);
        vertices.truncate(min_path_length);

        let mut present = edges.iter().copied().collect::<FnvHashSet<_>>();
        for pair in vertices.windows(2) {
            let edge = (pair[0], pair[1]);
            if present.insert(edge) {
                edges.push(edge);
            }
        }

        edges.shuffle(&mut self.rng);
        edges
    }
}

#[cfg(test)]
mod tests {
    use fnv::FnvHashSet;

    use super::InstanceGenerator;

    #[test]
    fn same_seed_gives_same_instances() {
        let first = InstanceGenerator::new(7).directed_graph(10, 0.3, 5);
        let second = InstanceGenerator::new(7).directed_graph(10, 0.3, 5);

        assert_eq!(first, second);
    }

    #[test]
    fn probability_one_gives_complete_graphs() {
        let mut generator = InstanceGenerator::new(42);

        assert_eq!(generator.bipartite(3, 1.0).len(), 9);
        assert_eq!(generator.three_dimensional(3, 1.0).len(), 27);
        assert_eq!(generator.directed_graph(4, 1.0, 4).len(), 12);
    }

    #[test]
    fn probability_zero_gives_only_the_planted_path() {
        let mut generator = InstanceGenerator::new(42);

        assert!(generator.bipartite(5, 0.0).is_empty());

        let edges = generator.directed_graph(6, 0.0, 6);
        assert_eq!(edges.len(), 5);

        let tails = edges.iter().map(|&(tail, _)| tail).collect::<FnvHashSet<_>>();
        let heads = edges.iter().map(|&(_, head)| head).collect::<FnvHashSet<_>>();
        assert_eq!(tails.len(), 5);
        assert_eq!(heads.len(), 5);
    }

    #[test]
    fn directed_graphs_have_no_self_loops_or_duplicates() {
        let edges = InstanceGenerator::new(3).directed_graph(8, 0.5, 8);

        assert!(edges.iter().all(|(tail, head)| tail != head));
        let unique = edges.iter().collect::<FnvHashSet<_>>();
        assert_eq!(unique.len(), edges.len());
    }

    #[test]
    fn hyperedges_stay_within_their_parts() {
        let edges = InstanceGenerator::new(11).three_dimensional(4, 0.5);

        assert!(edges
            .iter()
            .all(|edge| edge.len() == 3 && edge.iter().all(|&vertex| vertex < 4)));
    }
}
