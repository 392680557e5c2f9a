use std::fmt::{self, Display};

use itertools::Itertools;

use super::*;

/// An undirected multigraph stored as one ordered neighbor list per vertex.
///
/// The adjacency is mirrored: if `v` occurs `k` times in the list of `u`, then `u` occurs `k`
/// times in the list of `v`. [`GraphEdgeEditing::push_edge`] is the only operation that may
/// temporarily break this; use [`AdjacencyList::is_symmetric`] to verify it afterwards.
///
/// `Clone` produces an independent deep copy, which is what callers need before handing a graph
/// to the destructive [`crate::algo::EulerianPath::find_eulerian_path`].
///
/// ```
/// use ubridges::prelude::*;
///
/// let mut graph = AdjList::new(3);
/// graph.add_edge(0, 1);
/// graph.add_edge(0, 1);
/// graph.add_edge(1, 2);
///
/// assert_eq!(graph.number_of_edges(), 3);
/// assert_eq!(graph.degree_of(1), 3);
/// assert_eq!(graph.edge_multiplicity(1, 0), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjList {
    nbs: Vec<Vec<Node>>,
    /// Number of directed adjacency entries; twice the number of edges once symmetric
    num_entries: usize,
}

impl AdjList {
    fn assert_vertex(&self, u: Node) {
        assert!(
            (u as usize) < self.nbs.len(),
            "Vertex {u} out of range for graph with {} vertices",
            self.nbs.len()
        );
    }

    /// Position of the first occurrence of `v` in the neighborhood of `u`
    fn position_of(&self, u: Node, v: Node) -> Option<usize> {
        self.nbs[u as usize].iter().position(|&w| w == v)
    }
}

impl GraphNodeOrder for AdjList {
    fn number_of_nodes(&self) -> NumNodes {
        self.nbs.len() as NumNodes
    }
}

impl GraphEdgeOrder for AdjList {
    fn number_of_edges(&self) -> NumEdges {
        (self.num_entries / 2) as NumEdges
    }
}

impl AdjacencyList for AdjList {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.nbs[u as usize].iter().copied()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.nbs[u as usize].len() as NumNodes
    }
}

impl NeighborsSlice for AdjList {
    fn as_neighbors_slice(&self, u: Node) -> &[Node] {
        &self.nbs[u as usize]
    }
}

impl AdjacencyTest for AdjList {
    fn edge_multiplicity(&self, u: Node, v: Node) -> NumEdges {
        self.assert_vertex(v);
        self.nbs[u as usize].iter().filter(|&&w| w == v).count() as NumEdges
    }
}

impl GraphNew for AdjList {
    fn new(n: NumNodes) -> Self {
        Self {
            nbs: vec![Vec::new(); n as usize],
            num_entries: 0,
        }
    }
}

impl GraphEdgeEditing for AdjList {
    fn add_edge(&mut self, u: Node, v: Node) {
        self.push_edge(u, v);
        self.push_edge(v, u);
    }

    fn push_edge(&mut self, u: Node, v: Node) {
        self.assert_vertex(u);
        self.assert_vertex(v);

        self.nbs[u as usize].push(v);
        self.num_entries += 1;
    }

    fn try_remove_edge(&mut self, u: Node, v: Node) -> bool {
        self.detach_edge(u, v).is_some()
    }

    fn detach_edge(&mut self, u: Node, v: Node) -> Option<EdgeSlots> {
        self.assert_vertex(u);
        self.assert_vertex(v);

        let at_u = self.position_of(u, v)?;
        self.nbs[u as usize].remove(at_u);

        // A missing mirror entry means the adjacency was not symmetric; undo and report absence
        let Some(at_v) = self.position_of(v, u) else {
            self.nbs[u as usize].insert(at_u, v);
            return None;
        };
        self.nbs[v as usize].remove(at_v);

        self.num_entries -= 2;
        Some(EdgeSlots { at_u, at_v })
    }

    fn reattach_edge(&mut self, u: Node, v: Node, slots: EdgeSlots) {
        self.nbs[v as usize].insert(slots.at_v, u);
        self.nbs[u as usize].insert(slots.at_u, v);
        self.num_entries += 2;
    }
}

impl Display for AdjList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (u, nbs) in self.nbs.iter().enumerate() {
            if nbs.is_empty() {
                writeln!(f, "Vertex {u}: (no connections)")?;
            } else {
                writeln!(f, "Vertex {u}: {}", nbs.iter().join(", "))?;
            }
        }
        Ok(())
    }
}
