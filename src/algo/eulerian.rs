use tracing::{debug, trace};

use super::*;

/// Classification of a graph by the degree parities of its vertices.
///
/// Only degrees are inspected; whether all edges actually lie in a single component is checked
/// separately by [`EulerianPath::has_eulerian_path_strict`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EulerianKind {
    /// All degrees are even; a closed walk may start at `start`, the lowest non-isolated vertex
    /// (or `0` if there are no edges)
    Circuit { start: Node },
    /// Exactly two vertices have odd degree; the walk runs from `start` to `end` (`start < end`)
    Path { start: Node, end: Node },
    /// More than two vertices have odd degree or the graph has no vertices
    Impossible,
}

impl EulerianKind {
    /// Returns the vertex an Eulerian walk starts at, if the degrees admit one
    pub fn start(&self) -> Option<Node> {
        match *self {
            EulerianKind::Circuit { start } | EulerianKind::Path { start, .. } => Some(start),
            EulerianKind::Impossible => None,
        }
    }

    /// Returns *true* if the degrees admit an Eulerian walk
    pub fn is_possible(&self) -> bool {
        !matches!(self, EulerianKind::Impossible)
    }
}

/// Builds an Eulerian walk with Fleury's rule: from the current vertex, never cross an edge that
/// is a bridge of the remaining graph unless no other edge is left.
///
/// Bridges are recomputed with the configured [`BridgeFinder`] after every traversed edge. The
/// walk is driven by a stack; a vertex is emitted once it has no remaining edges, so the output
/// lists the vertices of the walk in reverse traversal order.
///
/// The builder consumes the edges of the graph it runs on. Clone the graph beforehand if it is
/// still needed.
///
/// ```
/// use ubridges::{prelude::*, algo::*};
///
/// let mut graph = AdjList::from_edges(4, [(0, 1), (1, 2), (2, 0), (0, 3)]);
/// let path = EulerianPathBuilder::with_finder(NaiveBridges::new()).build(&mut graph);
///
/// assert_eq!(path.len(), 5);
/// assert_eq!(path[0], 3);
/// assert_eq!(graph.number_of_edges(), 0);
/// ```
#[derive(Debug, Copy, Clone, Default)]
pub struct EulerianPathBuilder<F = TarjanBridges> {
    finder: F,
}

impl EulerianPathBuilder<TarjanBridges> {
    /// Creates a builder that detects bridges with [`TarjanBridges`]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<F: BridgeFinder> EulerianPathBuilder<F> {
    /// Creates a builder that detects bridges with `finder`
    pub fn with_finder(finder: F) -> Self {
        Self { finder }
    }

    /// Returns the bridge finder in use
    pub fn finder(&self) -> &F {
        &self.finder
    }

    /// Computes an Eulerian walk and removes every traversed edge from `graph`.
    ///
    /// If the degree parities rule out an Eulerian walk, an empty sequence is returned and the
    /// graph is left untouched. If the edges are split across several components, only the
    /// component of the start vertex is walked (and consumed).
    pub fn build<G>(&self, graph: &mut G) -> Vec<Node>
    where
        G: AdjacencyList + NeighborsSlice + GraphEdgeEditing + GraphEdgeOrder,
    {
        let kind = graph.eulerian_kind();
        let Some(start) = kind.start() else {
            debug!("degrees rule out an eulerian walk");
            return Vec::new();
        };
        debug!(?kind, edges = graph.number_of_edges(), "building eulerian walk");

        let mut path = Vec::with_capacity(graph.number_of_edges() as usize + 1);
        let mut stack = vec![start];
        let mut bridge_queries = 0usize;

        while let Some(&u) = stack.last() {
            if graph.degree_of(u) == 0 {
                path.push(u);
                stack.pop();
                continue;
            }

            let bridges = self.finder.find_bridges(graph);
            bridge_queries += 1;

            let nbs = graph.as_neighbors_slice(u);
            let v = nbs
                .iter()
                .copied()
                .find(|&v| !is_listed_bridge(&bridges, u, v))
                .unwrap_or(nbs[0]);

            trace!(u, v, bridges = bridges.len(), "traverse edge");
            graph.remove_edge(u, v);
            stack.push(v);
        }

        debug!(length = path.len(), bridge_queries, "eulerian walk complete");
        path
    }
}

/// Eulerian queries exposed directly on graphs
pub trait EulerianPath: AdjacencyList + NeighborsSlice {
    /// Classifies the graph by the number of odd-degree vertices
    fn eulerian_kind(&self) -> EulerianKind {
        if self.is_empty() {
            return EulerianKind::Impossible;
        }

        let mut odd = self.odd_degree_vertices();
        match (odd.next(), odd.next(), odd.next()) {
            (None, _, _) => EulerianKind::Circuit {
                start: self.vertices_with_neighbors().next().unwrap_or(0),
            },
            (Some(start), Some(end), None) => EulerianKind::Path { start, end },
            _ => EulerianKind::Impossible,
        }
    }

    /// Returns whether the degree parities admit an Eulerian walk and the vertex it starts at.
    ///
    /// A graph with zero odd-degree vertices admits a circuit, one with exactly two admits a path
    /// from the smaller odd vertex. Connectivity is not checked.
    fn can_have_eulerian_path(&self) -> (bool, Option<Node>) {
        let start = self.eulerian_kind().start();
        (start.is_some(), start)
    }

    /// Returns *true* if the degrees admit an Eulerian walk **and** all edges lie in a single
    /// connected component
    fn has_eulerian_path_strict(&self) -> bool {
        self.eulerian_kind().is_possible() && self.edges_are_connected()
    }

    /// Computes an Eulerian walk using [`TarjanBridges`] and consumes the edges of the graph.
    /// See [`EulerianPathBuilder::build`].
    fn find_eulerian_path(&mut self) -> Vec<Node>
    where
        Self: GraphEdgeEditing + GraphEdgeOrder,
    {
        EulerianPathBuilder::new().build(self)
    }

    /// Computes an Eulerian walk using `finder` and consumes the edges of the graph.
    /// See [`EulerianPathBuilder::build`].
    fn find_eulerian_path_with<F>(&mut self, finder: F) -> Vec<Node>
    where
        Self: GraphEdgeEditing + GraphEdgeOrder,
        F: BridgeFinder,
    {
        EulerianPathBuilder::with_finder(finder).build(self)
    }
}

impl<G: AdjacencyList + NeighborsSlice> EulerianPath for G {}
