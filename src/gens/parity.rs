use itertools::Itertools;
use rand::seq::IteratorRandom;
use tracing::debug;

use super::*;

/// Target degree structure for [`GeneratorParity::fix_parity`]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EulerianParity {
    /// Every vertex has even degree (Eulerian circuit)
    Circuit,
    /// Exactly two vertices have odd degree (Eulerian path that is not a circuit).
    /// Graphs with fewer than two vertices keep all degrees even.
    Path,
}

/// Adds edges to a graph until its degree parities admit an Eulerian circuit or path.
///
/// Edges are only ever added, so a connected graph stays connected and thus becomes Eulerian.
pub trait GeneratorParity {
    /// Pairs up the odd-degree vertices in ascending order and joins each pair `(a, b)`:
    /// preferably by a detour `a - w - b` through a random vertex `w` adjacent to neither,
    /// otherwise by a direct (possibly parallel) edge.
    ///
    /// With [`EulerianParity::Path`] the last pair is left odd. If the graph has no odd vertex,
    /// one edge between two distinct random vertices is added instead.
    ///
    /// Returns the number of edges added.
    fn fix_parity<R: Rng>(&mut self, rng: &mut R, parity: EulerianParity) -> NumEdges;
}

impl<G> GeneratorParity for G
where
    G: AdjacencyList + AdjacencyTest + GraphEdgeEditing,
{
    fn fix_parity<R: Rng>(&mut self, rng: &mut R, parity: EulerianParity) -> NumEdges {
        let odd = self.odd_degree_vertices().collect_vec();
        debug_assert!(odd.len() % 2 == 0);

        let mut added = 0;
        let to_join = match parity {
            EulerianParity::Circuit => &odd[..],
            EulerianParity::Path if odd.len() >= 2 => &odd[..odd.len() - 2],
            EulerianParity::Path => {
                let n = self.number_of_nodes();
                if n >= 2 {
                    let a = rng.random_range(0..n);
                    let b = (a + rng.random_range(1..n)) % n;
                    self.add_edge(a, b);
                    added += 1;
                }
                &[][..]
            }
        };

        for (a, b) in to_join.iter().copied().tuples() {
            let detour = self
                .vertices_range()
                .filter(|&w| w != a && w != b && !self.has_edge(a, w) && !self.has_edge(w, b))
                .choose(rng);

            match detour {
                Some(w) => {
                    self.add_edge(a, w);
                    self.add_edge(w, b);
                    added += 2;
                }
                None => {
                    self.add_edge(a, b);
                    added += 1;
                }
            }
        }

        debug!(odd = odd.len(), added, ?parity, "fixed degree parity");
        added
    }
}

#[cfg(test)]
mod test {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn circuit_makes_all_degrees_even() {
        let rng = &mut Pcg64Mcg::seed_from_u64(2);

        let mut graph = AdjList::new(8);
        graph.connect_path(0..8);
        graph.add_edge(2, 6);

        let added = graph.fix_parity(rng, EulerianParity::Circuit);
        assert!(added >= 2);
        assert_eq!(graph.odd_degree_vertices().count(), 0);
    }

    #[test]
    fn path_keeps_last_pair() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        let mut graph = AdjList::from_edges(6, [(0, 2), (2, 1), (2, 3), (3, 4), (4, 5), (2, 4)]);
        assert_eq!(graph.odd_degree_vertices().collect_vec(), vec![0, 1, 4, 5]);

        // (0, 1) is joined through one of 3, 4, 5
        assert_eq!(graph.fix_parity(rng, EulerianParity::Path), 2);
        assert_eq!(graph.odd_degree_vertices().collect_vec(), vec![4, 5]);
        assert!(!graph.has_edge(0, 1));
    }

    #[test]
    fn path_from_even_graph() {
        let rng = &mut Pcg64Mcg::seed_from_u64(4);

        let mut graph = AdjList::new(5);
        graph.connect_cycle(0..5);
        assert_eq!(graph.fix_parity(rng, EulerianParity::Path), 1);
        assert_eq!(graph.odd_degree_vertices().count(), 2);

        let mut single = AdjList::new(1);
        assert_eq!(single.fix_parity(rng, EulerianParity::Path), 0);
    }

    #[test]
    fn falls_back_to_direct_edge() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);

        let mut graph = AdjList::from_edges(2, [(0, 1)]);
        assert_eq!(graph.fix_parity(rng, EulerianParity::Circuit), 1);
        assert_eq!(graph.edge_multiplicity(0, 1), 2);

        // The only third vertex is adjacent to both endpoints
        let mut graph = AdjList::from_edges(3, [(0, 2), (2, 1), (2, 1), (2, 1)]);
        assert_eq!(graph.odd_degree_vertices().collect_vec(), vec![0, 1]);
        assert_eq!(graph.fix_parity(rng, EulerianParity::Circuit), 1);
        assert!(graph.has_edge(0, 1));
    }
}
