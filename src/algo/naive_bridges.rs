use std::ops::Deref;

use itertools::Itertools;
use tracing::debug;

use super::*;

/// Quadratic bridge search that removes every edge in turn and checks whether the graph stays
/// connected. Runs in `O(m * (n + m))` and mainly serves as a correctness oracle and baseline for
/// [`TarjanBridges`].
///
/// Candidates are all adjacency entries `(u, v)` with `u < v`, **including** repeated entries of
/// parallel edges. Each check removes a single occurrence, so a pair of vertices joined by several
/// parallel edges stays connected and none of these edges is reported. Self-loops are never
/// candidates.
///
/// Connectivity is decided by [`Connectivity::is_connected`], for which isolated vertices make a
/// graph disconnected. On a graph with an isolated vertex every candidate is thus reported.
///
/// Each removed edge is re-inserted at its original adjacency positions before the next
/// candidate is checked, so the graph is returned unchanged.
///
/// ```
/// use ubridges::{prelude::*, algo::*};
///
/// let mut graph = AdjList::from_edges(4, [(0, 1), (1, 2), (2, 0), (2, 3)]);
/// assert_eq!(NaiveBridges::new().find_bridges(&mut graph), vec![Edge(2, 3)]);
/// ```
#[derive(Debug, Copy, Clone, Default)]
pub struct NaiveBridges;

impl NaiveBridges {
    pub fn new() -> Self {
        Self
    }
}

impl BridgeFinder for NaiveBridges {
    fn find_bridges<G>(&self, graph: &mut G) -> BridgeSet
    where
        G: AdjacencyList + NeighborsSlice + GraphEdgeEditing,
    {
        let candidates = graph.edges(false).filter(|e| e.0 < e.1).collect_vec();
        debug!(candidates = candidates.len(), "naive bridge search");

        let mut bridges = Vec::new();
        for Edge(u, v) in candidates {
            let Some(detached) = DetachedEdge::new(graph, u, v) else {
                continue;
            };

            if !detached.is_connected() {
                bridges.push(Edge(u, v));
            }
        }

        bridges
    }
}

/// Removes one occurrence of an edge for as long as it is alive and puts it back at its
/// original adjacency positions when dropped.
struct DetachedEdge<'a, G>
where
    G: GraphEdgeEditing,
{
    graph: &'a mut G,
    edge: Edge,
    slots: EdgeSlots,
}

impl<'a, G> DetachedEdge<'a, G>
where
    G: GraphEdgeEditing,
{
    fn new(graph: &'a mut G, u: Node, v: Node) -> Option<Self> {
        let slots = graph.detach_edge(u, v)?;
        Some(Self {
            graph,
            edge: Edge(u, v),
            slots,
        })
    }
}

impl<'a, G> Deref for DetachedEdge<'a, G>
where
    G: GraphEdgeEditing,
{
    type Target = G;

    fn deref(&self) -> &Self::Target {
        self.graph
    }
}

impl<'a, G> Drop for DetachedEdge<'a, G>
where
    G: GraphEdgeEditing,
{
    fn drop(&mut self) {
        let Edge(u, v) = self.edge;
        self.graph.reattach_edge(u, v, self.slots);
    }
}
