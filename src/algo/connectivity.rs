use std::iter::FusedIterator;

use itertools::Itertools;

use super::*;

/// Connectivity queries on undirected graphs
pub trait Connectivity: Traversal {
    /// Returns *true* if every vertex is reachable from vertex `0` using the current edges.
    ///
    /// Isolated vertices count: a graph with at least one edge and one isolated vertex is
    /// **not** connected. The graph without vertices is considered connected.
    fn is_connected(&self) -> bool {
        if self.is_empty() {
            return true;
        }

        let mut dfs = self.dfs(0);
        dfs.by_ref().for_each(drop);
        dfs.visited_all()
    }

    /// Returns *true* if all vertices with at least one edge belong to the same component.
    /// In contrast to [`Connectivity::is_connected`], isolated vertices are ignored.
    fn edges_are_connected(&self) -> bool {
        let Some(start) = self.vertices_with_neighbors().next() else {
            return true;
        };

        let mut dfs = self.dfs(start);
        dfs.by_ref().for_each(drop);
        self.vertices_with_neighbors().all(|u| dfs.did_visit_node(u))
    }

    /// Returns an iterator over the connected components of the graph.
    /// Isolated vertices form components of size one.
    fn connected_components(&self) -> ConnectedComponents<'_, Self> {
        ConnectedComponents::new(self)
    }

    /// Returns the number of connected components (including isolated vertices)
    fn number_of_connected_components(&self) -> NumNodes {
        self.connected_components().count() as NumNodes
    }
}

impl<G: AdjacencyList> Connectivity for G {}

/// Iterator over the connected components of a graph, each returned as a sorted `Vec<Node>`.
/// Components are emitted in order of their smallest vertex.
pub struct ConnectedComponents<'a, G>
where
    G: AdjacencyList,
{
    dfs: Option<Dfs<'a, G>>,
}

impl<'a, G> ConnectedComponents<'a, G>
where
    G: AdjacencyList,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            dfs: (!graph.is_empty()).then(|| graph.dfs(0)),
        }
    }
}

impl<'a, G> Iterator for ConnectedComponents<'a, G>
where
    G: AdjacencyList,
{
    type Item = Vec<Node>;

    fn next(&mut self) -> Option<Self::Item> {
        let dfs = self.dfs.as_mut()?;

        let cc = dfs.by_ref().sorted_unstable().collect_vec();
        if !cc.is_empty() {
            return Some(cc);
        }

        if dfs.try_restart_at_unvisited() {
            Some(dfs.by_ref().sorted_unstable().collect_vec())
        } else {
            self.dfs = None;
            None
        }
    }
}

impl<'a, G> FusedIterator for ConnectedComponents<'a, G> where G: AdjacencyList {}

#[cfg(test)]
mod test {
    use super::*;
    use crate::gens::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn connected_basics() {
        assert!(AdjList::new(0).is_connected());
        assert!(AdjList::new(1).is_connected());
        assert!(!AdjList::new(2).is_connected());

        let mut graph = AdjList::new(4);
        graph.connect_path([0, 1, 2, 3]);
        assert!(graph.is_connected());

        graph.remove_edge(1, 2);
        assert!(!graph.is_connected());
        assert_eq!(
            graph.connected_components().collect_vec(),
            vec![vec![0, 1], vec![2, 3]]
        );
    }

    #[test]
    fn isolated_vertex_breaks_connectivity() {
        let mut graph = AdjList::new(5);
        graph.connect_cycle([0, 1, 2, 3]);

        assert!(!graph.is_connected());
        assert!(graph.edges_are_connected());
        assert_eq!(graph.number_of_connected_components(), 2);
    }

    #[test]
    fn edges_connected_ignores_vertex_zero() {
        let mut graph = AdjList::new(5);
        graph.connect_path([2, 3, 4]);
        assert!(graph.edges_are_connected());

        graph.add_edge(0, 1);
        assert!(!graph.edges_are_connected());
        assert!(AdjList::new(3).edges_are_connected());
    }

    #[test]
    fn components_partition_vertices() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);

        for n in [1 as NumNodes, 10, 50, 100] {
            for p in [0.01, 0.05, 0.2] {
                let graph = AdjList::gnp(rng, n, p);
                let components = graph.connected_components().collect_vec();

                let mut all = components.iter().flatten().copied().collect_vec();
                all.sort();
                assert_eq!(all, (0..n).collect_vec());

                assert_eq!(graph.is_connected(), components.len() == 1);
                for Edge(u, v) in graph.edges(true) {
                    assert!(components.iter().any(|cc| cc.contains(&u) && cc.contains(&v)));
                }
            }
        }
    }
}
