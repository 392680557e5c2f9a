use itertools::Itertools;
use tracing::trace;

use super::*;

/// Ordered sequence of bridges as produced by a single [`BridgeFinder`] invocation.
/// It reflects the graph at call time only and must be recomputed after any edit.
pub type BridgeSet = Vec<Edge>;

/// Normalizes all bridges and sorts them, so that results of different finders
/// can be compared as sets of unordered pairs.
pub fn normalized_bridges(bridges: impl IntoIterator<Item = Edge>) -> BridgeSet {
    bridges
        .into_iter()
        .map(|e| e.normalized())
        .sorted_unstable()
        .collect_vec()
}

/// Returns *true* if the undirected edge `{u, v}` is contained in `bridges`
pub fn is_listed_bridge(bridges: &[Edge], u: Node, v: Node) -> bool {
    bridges.iter().any(|e| e.connects(u, v))
}

/// Capability of computing all bridges of a graph.
///
/// Both finders are meant for connected graphs and differ on other inputs. [`TarjanBridges`]
/// only searches the component of its root (vertex `0` by default). [`NaiveBridges`] checks every
/// edge of every component against [`Connectivity::is_connected`], so on a graph with an
/// isolated vertex it reports all edges.
///
/// The graph is taken mutably because finders may edit it temporarily. Every implementation must
/// return the graph exactly as it received it, including the order of each neighborhood.
pub trait BridgeFinder {
    /// Computes the bridges of the current state of `graph`
    fn find_bridges<G>(&self, graph: &mut G) -> BridgeSet
    where
        G: AdjacencyList + NeighborsSlice + GraphEdgeEditing;
}

/// Linear-time bridge search using Tarjan's low-link values.
///
/// The depth-first search keeps an explicit stack of frames, so arbitrarily deep (path-shaped)
/// graphs are supported. Exactly one occurrence of the tree edge leading into a vertex is ignored
/// when scanning its neighbors: any further parallel edge to the parent counts as back-edge, so
/// vertices joined by two or more parallel edges are never separated by a bridge.
///
/// Bridges are reported as `Edge(parent, child)` in the order their child finishes.
///
/// ```
/// use ubridges::{prelude::*, algo::*};
///
/// let graph = AdjList::from_edges(4, [(0, 1), (1, 2), (2, 0), (2, 3)]);
/// assert_eq!(TarjanBridges::new().find_bridges_in(&graph), vec![Edge(2, 3)]);
/// ```
#[derive(Debug, Copy, Clone, Default)]
pub struct TarjanBridges {
    root: Node,
}

impl TarjanBridges {
    /// Creates a new bridge search rooted at vertex `0`
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new bridge search rooted at `root`
    pub fn from_root(root: Node) -> Self {
        Self { root }
    }

    /// Computes the bridges within the component of the root vertex without editing the graph.
    /// Returns an empty set if the graph has no vertices.
    /// ** Panics if `root >= n` for a non-empty graph **
    pub fn find_bridges_in<G>(&self, graph: &G) -> BridgeSet
    where
        G: AdjacencyList + NeighborsSlice,
    {
        if graph.is_empty() {
            return Vec::new();
        }

        assert!(
            self.root < graph.number_of_nodes(),
            "Root {} out of range",
            self.root
        );

        BridgeSearch::new(graph).compute(self.root)
    }
}

impl BridgeFinder for TarjanBridges {
    fn find_bridges<G>(&self, graph: &mut G) -> BridgeSet
    where
        G: AdjacencyList + NeighborsSlice + GraphEdgeEditing,
    {
        self.find_bridges_in(graph)
    }
}

/// Bridge queries exposed directly on graphs
pub trait Bridges: AdjacencyList + NeighborsSlice {
    /// Computes all bridges reachable from vertex `0` with [`TarjanBridges`]
    fn compute_bridges(&self) -> BridgeSet {
        TarjanBridges::new().find_bridges_in(self)
    }

    /// Computes all bridges with the quadratic [`NaiveBridges`] baseline
    fn compute_bridges_naive(&mut self) -> BridgeSet
    where
        Self: GraphEdgeEditing,
    {
        NaiveBridges::new().find_bridges(self)
    }
}

impl<G: AdjacencyList + NeighborsSlice> Bridges for G {}

/// Per-invocation state of Tarjan's search
struct BridgeSearch<'a, G>
where
    G: AdjacencyList + NeighborsSlice,
{
    graph: &'a G,
    visited: NodeBitSet,
    nodes_info: Vec<NodeInfo>,
    time: Node,
    bridges: BridgeSet,
}

/// DFS frame: the vertex, the vertex it was entered from and the next neighbor index to scan
struct Frame {
    node: Node,
    parent: Node,
    next: usize,
    parent_skipped: bool,
}

impl Frame {
    fn new(node: Node, parent: Option<Node>) -> Self {
        Self {
            node,
            parent: parent.unwrap_or(INVALID_NODE),
            next: 0,
            parent_skipped: parent.is_none(),
        }
    }
}

impl<'a, G> BridgeSearch<'a, G>
where
    G: AdjacencyList + NeighborsSlice,
{
    fn new(graph: &'a G) -> Self {
        Self {
            graph,
            visited: graph.vertex_bitset_unset(),
            nodes_info: vec![NodeInfo::default(); graph.len()],
            time: 0,
            bridges: Vec::new(),
        }
    }

    fn discover(&mut self, u: Node) {
        self.visited.set(u as usize, true);
        self.nodes_info[u as usize] = NodeInfo {
            discovery: self.time,
            low: self.time,
        };
        self.time += 1;
    }

    fn compute(mut self, root: Node) -> BridgeSet {
        let graph = self.graph;

        self.discover(root);
        let mut stack = vec![Frame::new(root, None)];

        while let Some(frame) = stack.last_mut() {
            let v = frame.node;
            let parent = frame.parent;

            if let Some(&u) = graph.as_neighbors_slice(v).get(frame.next) {
                frame.next += 1;

                if u == parent && !frame.parent_skipped {
                    frame.parent_skipped = true;
                    continue;
                }

                if self.visited[u as usize] {
                    let disc_u = self.nodes_info[u as usize].discovery;
                    self.nodes_info[v as usize].update_low(disc_u);
                } else {
                    self.discover(u);
                    stack.push(Frame::new(u, Some(v)));
                }
            } else {
                stack.pop();

                if parent != INVALID_NODE {
                    let low_v = self.nodes_info[v as usize].low;
                    self.nodes_info[parent as usize].update_low(low_v);

                    if low_v > self.nodes_info[parent as usize].discovery {
                        self.bridges.push(Edge(parent, v));
                    }
                }
            }
        }

        trace!(
            root,
            visited = self.time,
            bridges = self.bridges.len(),
            "tarjan bridge search finished"
        );

        self.bridges
    }
}

#[derive(Clone, Copy, Default)]
struct NodeInfo {
    discovery: Node,
    low: Node,
}

impl NodeInfo {
    fn update_low(&mut self, value: Node) {
        self.low = self.low.min(value);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{gens::*, testing::*};
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    fn both_finders(graph: &mut AdjList) -> (BridgeSet, BridgeSet) {
        let tarjan = normalized_bridges(TarjanBridges::new().find_bridges(graph));
        let naive = normalized_bridges(NaiveBridges::new().find_bridges(graph));
        (tarjan, naive)
    }

    #[test]
    fn bridges_in_path() {
        for n in [1, 2, 5, 10, 15] {
            let mut graph = AdjList::new(n);
            graph.connect_path(0..n);

            let (tarjan, naive) = both_finders(&mut graph);
            assert_eq!(tarjan, graph.ordered_edges(true));
            assert_eq!(naive, graph.ordered_edges(true));
        }
    }

    #[test]
    fn bridge_in_example() {
        let graph = AdjList::from_edges(
            6,
            [(0, 1), (0, 2), (2, 1), (1, 3), (3, 4), (4, 5), (5, 3)],
        );

        assert_eq!(graph.compute_bridges(), vec![Edge(1, 3)]);
    }

    #[test]
    fn cycle_with_pendant() {
        let mut cycle = AdjList::new(5);
        cycle.connect_cycle([0, 1, 2, 3, 4]);
        let (tarjan, naive) = both_finders(&mut cycle);
        assert!(tarjan.is_empty());
        assert!(naive.is_empty());

        let mut graph = AdjList::new(6);
        graph.connect_cycle([0, 1, 2, 3, 4]);
        graph.add_edge(4, 5);
        let (tarjan, naive) = both_finders(&mut graph);
        assert_eq!(tarjan, vec![Edge(4, 5)]);
        assert_eq!(naive, vec![Edge(4, 5)]);
    }

    #[test]
    fn triangles_sharing_vertex_with_chord() {
        let mut graph = AdjList::new(5);
        graph.connect_cycle([0, 1, 2]);
        graph.connect_cycle([2, 3, 4]);
        graph.add_edge(1, 3);

        let (tarjan, naive) = both_finders(&mut graph);
        assert!(tarjan.is_empty());
        assert!(naive.is_empty());

        // Without the chord, the two triangles are still 2-edge-connected through vertex 2
        graph.remove_edge(1, 3);
        let (tarjan, naive) = both_finders(&mut graph);
        assert!(tarjan.is_empty());
        assert!(naive.is_empty());

        // Cutting one triangle open turns its remaining edges into bridges
        graph.remove_edge(3, 4);
        let (tarjan, naive) = both_finders(&mut graph);
        assert_eq!(tarjan, vec![Edge(2, 3), Edge(2, 4)]);
        assert_eq!(naive, tarjan);
    }

    #[test]
    fn parallel_edges_are_never_bridges() {
        let mut graph = AdjList::new(6);
        graph.connect_path([0, 1, 2, 3, 4, 5]);
        graph.add_edge(2, 3);

        let (tarjan, naive) = both_finders(&mut graph);
        let expected = vec![Edge(0, 1), Edge(1, 2), Edge(3, 4), Edge(4, 5)];
        assert_eq!(tarjan, expected);
        assert_eq!(naive, expected);

        let mut pair = AdjList::from_edges(2, [(0, 1), (1, 0)]);
        let (tarjan, naive) = both_finders(&mut pair);
        assert!(tarjan.is_empty());
        assert!(naive.is_empty());
    }

    #[test]
    fn reported_as_parent_child() {
        let graph = AdjList::from_edges(3, [(2, 1), (1, 0)]);
        assert_eq!(graph.compute_bridges(), vec![Edge(1, 2), Edge(0, 1)]);
    }

    #[test]
    fn unreachable_component_is_ignored() {
        let mut graph = AdjList::new(6);
        graph.connect_cycle([0, 1, 2]);
        graph.connect_path([3, 4, 5]);

        assert!(graph.compute_bridges().is_empty());
        assert_eq!(
            normalized_bridges(TarjanBridges::from_root(4).find_bridges_in(&graph)),
            vec![Edge(3, 4), Edge(4, 5)]
        );
    }

    #[test]
    fn empty_and_edgeless_graphs() {
        assert!(AdjList::new(0).compute_bridges().is_empty());
        assert!(AdjList::new(1).compute_bridges().is_empty());
        assert!(AdjList::new(4).compute_bridges_naive().is_empty());
    }

    #[test]
    fn deep_path_does_not_overflow() {
        let n = 100_000;
        let mut graph = AdjList::new(n);
        graph.connect_path(0..n);

        assert_eq!(graph.compute_bridges().len(), (n - 1) as usize);

        graph.add_edge(n - 1, 0);
        assert!(graph.compute_bridges().is_empty());
    }

    #[test]
    fn repeated_queries_are_identical() {
        let rng = &mut Pcg64Mcg::seed_from_u64(11);

        for n in [10 as NumNodes, 40] {
            let mut graph = AdjList::connected_gnp(rng, n, 0.05);
            let original = graph.clone();

            assert_eq!(graph.compute_bridges(), graph.compute_bridges());

            let first = graph.compute_bridges_naive();
            let second = graph.compute_bridges_naive();
            assert_eq!(first, second);
            assert_eq!(graph, original);
        }
    }

    #[test]
    fn finders_agree_on_random_graphs() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for n in [5 as NumNodes, 20, 60] {
            for p in [0.0, 0.02, 0.08, 0.3] {
                for _ in 0..5 {
                    let mut graph = AdjList::connected_gnp(rng, n, p);
                    let (tarjan, naive) = both_finders(&mut graph);

                    assert_eq!(tarjan, naive);
                    assert_eq!(tarjan, brute_force_bridges(&graph));
                }
            }
        }
    }

    #[test]
    fn bridges_match_component_definition() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);

        for n in [8 as NumNodes, 30] {
            let mut graph = AdjList::connected_gnp(rng, n, 0.1);
            let bridges = graph.compute_bridges();
            let components = graph.number_of_connected_components();

            let snapshot = graph.clone();
            for Edge(u, v) in snapshot.edges(true) {
                let slots = graph.detach_edge(u, v).unwrap();
                let split = graph.number_of_connected_components() > components;
                graph.reattach_edge(u, v, slots);

                assert_eq!(split, is_listed_bridge(&bridges, u, v), "edge ({u},{v})");
            }
        }
    }

    proptest! {
        #[test]
        fn finders_agree_on_multigraphs(
            n in 2u32..24,
            extra in proptest::collection::vec((0u32..24, 0u32..24), 0..48),
        ) {
            let mut graph = AdjList::new(n);
            graph.connect_path(0..n);
            for (u, v) in extra {
                let (u, v) = (u % n, v % n);
                if u != v {
                    graph.add_edge(u, v);
                }
            }

            let original = graph.clone();
            let (tarjan, naive) = both_finders(&mut graph);

            prop_assert_eq!(&tarjan, &naive);
            prop_assert_eq!(&tarjan, &brute_force_bridges(&graph));
            prop_assert_eq!(graph, original);
        }
    }
}
