use std::ops::Range;

use itertools::Itertools;

use crate::{edge::*, node::*};

/// Vertex count of a graph; vertices are always `0..n`
pub trait GraphNodeOrder {
    /// Number of vertices `n`
    fn number_of_nodes(&self) -> NumNodes;

    /// `n` as `usize`, convenient for sizing per-vertex arrays
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Iterates over all vertices in ascending order
    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices_range()
    }

    /// The range `0..n`. Unlike [`GraphNodeOrder::vertices`] it holds no borrow of the graph,
    /// so the graph may be mutated while iterating
    fn vertices_range(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// A cleared [`NodeBitSet`] sized for this graph
    fn vertex_bitset_unset(&self) -> NodeBitSet {
        node_bitset_unset(self.number_of_nodes())
    }

    /// *true* for the graph without vertices
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Edge count of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph (parallel edges are counted individually)
    fn number_of_edges(&self) -> NumEdges;

    /// *true* if no vertex has a neighbor
    fn is_singleton_graph(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Read access to the ordered neighborhoods of a graph
pub trait AdjacencyList: GraphNodeOrder + Sized {
    /// Returns an iterator over the neighborhood of a given vertex in insertion order.
    /// A neighbor joined by `k` parallel edges is returned `k` times.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_;

    /// Returns the number of adjacency entries of `u` (multi-edges counted individually)
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes;

    /// Returns an iterator over the degrees of all vertices
    fn degrees(&self) -> impl Iterator<Item = NumNodes> + '_ {
        self.vertices_range().map(|u| self.degree_of(u))
    }

    /// Largest degree, `0` for graphs without vertices
    fn max_degree(&self) -> NumNodes {
        self.degrees().max().unwrap_or(0)
    }

    /// Vertices with at least one neighbor, in ascending order
    fn vertices_with_neighbors(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices_range().filter(|&u| self.degree_of(u) > 0)
    }

    /// Returns an iterator to all vertices with odd degree in ascending order
    fn odd_degree_vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices_range().filter(|&u| self.degree_of(u) % 2 == 1)
    }

    /// Adjacency entries of `u` as edges `(u, v)` in neighborhood order.
    /// With `only_normalized`, entries with `v < u` are skipped.
    /// ** Panics if `u >= n` **
    fn edges_of(&self, u: Node, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.neighbors_of(u)
            .map(move |v| Edge(u, v))
            .filter(move |e| !only_normalized || e.is_normalized())
    }

    /// All adjacency entries as edges, grouped by source vertex.
    /// With `only_normalized`, every undirected edge is reported once as `(u, v)` with `u <= v`
    /// (a self-loop, stored as two entries, is still reported twice).
    fn edges(&self, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.vertices_range()
            .flat_map(move |u| self.edges_of(u, only_normalized))
    }

    /// Returns *true* if every adjacency entry `(u, v)` is mirrored by an entry `(v, u)` with
    /// matching multiplicity
    fn is_symmetric(&self) -> bool {
        let forward = self.edges(false).sorted_unstable().collect_vec();
        let backward = forward.iter().map(Edge::reverse).sorted_unstable();

        forward.iter().copied().eq(backward)
    }

    /// [`AdjacencyList::edges`] collected and sorted
    fn ordered_edges(&self, only_normalized: bool) -> Vec<Edge> {
        self.edges(only_normalized).sorted_unstable().collect_vec()
    }
}

/// Edge lookups between two given vertices
pub trait AdjacencyTest: GraphNodeOrder {
    /// *true* if `u` and `v` are joined by at least one edge
    /// ** Panics if `u >= n || v >= n` **
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.edge_multiplicity(u, v) > 0
    }

    /// Returns the number of parallel edges between `u` and `v`.
    /// ** Panics if `u >= n || v >= n` **
    fn edge_multiplicity(&self, u: Node, v: Node) -> NumEdges;
}

/// Direct access to the stored neighborhoods
pub trait NeighborsSlice {
    /// The neighbors of `u` in insertion order, with repetitions for parallel edges
    fn as_neighbors_slice(&self, u: Node) -> &[Node];
}

/// Construction of edgeless graphs
pub trait GraphNew {
    /// Creates a graph with `n` isolated vertices
    fn new(n: NumNodes) -> Self;
}

/// Adjacency positions an edge occupied before it was detached.
/// Re-inserting at these positions restores the exact neighborhood order.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct EdgeSlots {
    /// Index of `v` in the neighborhood of `u`
    pub at_u: usize,
    /// Index of `u` in the neighborhood of `v` (taken after the removal at `u`)
    pub at_v: usize,
}

/// Insertion and removal of undirected edges
pub trait GraphEdgeEditing: GraphNew {
    /// Adds the undirected edge *(u,v)* to the graph by appending `v` to the neighborhood of `u`
    /// and `u` to the neighborhood of `v`. Parallel edges are kept.
    /// ** Panics if `u >= n || v >= n` **
    fn add_edge(&mut self, u: Node, v: Node);

    /// Appends `v` to the neighborhood of `u` only.
    /// The caller must supply the reverse entry to keep the adjacency symmetric.
    /// ** Panics if `u >= n || v >= n` **
    fn push_edge(&mut self, u: Node, v: Node);

    /// Calls [`GraphEdgeEditing::add_edge`] for every edge in order
    fn add_edges(&mut self, edges: impl IntoIterator<Item = impl Into<Edge>>) {
        for Edge(u, v) in edges.into_iter().map(|d| d.into()) {
            self.add_edge(u, v);
        }
    }

    /// Removes one occurrence of the edge *(u,v)* from both neighborhoods.
    /// Returns *true* if an edge was removed.
    /// ** Panics if `u >= n || v >= n` **
    fn try_remove_edge(&mut self, u: Node, v: Node) -> bool;

    /// Removes one occurrence of the edge *(u,v)*; does nothing if the edge is absent.
    /// ** Panics if `u >= n || v >= n` **
    fn remove_edge(&mut self, u: Node, v: Node) {
        self.try_remove_edge(u, v);
    }

    /// Removes one occurrence of *(u,v)* and returns the positions it occupied,
    /// or `None` if the edge is absent.
    /// ** Panics if `u >= n || v >= n` **
    fn detach_edge(&mut self, u: Node, v: Node) -> Option<EdgeSlots>;

    /// Re-inserts an edge previously removed by [`GraphEdgeEditing::detach_edge`].
    /// Edges must be reattached in reverse order of detaching.
    /// ** Panics if the slots are out of bounds **
    fn reattach_edge(&mut self, u: Node, v: Node, slots: EdgeSlots);
}

/// Builds a graph from `n` and a list of edges; blanket-implemented for editable graphs
pub trait GraphFromScratch {
    /// Creates a graph with `n` vertices and adds `edges` in order
    fn from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Self;
}

impl<G: GraphNew + GraphEdgeEditing> GraphFromScratch for G {
    fn from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Self {
        let mut graph = Self::new(n);
        graph.add_edges(edges);
        graph
    }
}
