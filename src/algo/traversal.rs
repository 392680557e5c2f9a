/*!
Stack-based graph traversal.

Every traversal in this crate keeps its frontier in an explicit `Vec` instead of recursing, so
path-shaped graphs with hundreds of thousands of vertices are processed without exhausting the
call stack.
*/

use super::*;

/// Depth-first traversal iterator over all vertices reachable from a start vertex.
///
/// Vertices are marked as visited when they are pushed onto the stack, so each vertex is pushed
/// and yielded exactly once. The iterator can be restarted at an unvisited vertex to sweep over
/// all components of a graph.
pub struct Dfs<'a, G>
where
    G: AdjacencyList,
{
    graph: &'a G,
    visited: NodeBitSet,
    stack: Vec<Node>,
}

impl<'a, G> Dfs<'a, G>
where
    G: AdjacencyList,
{
    /// Creates a traversal starting at `start`.
    /// ** Panics if `start >= n` **
    pub fn new(graph: &'a G, start: Node) -> Self {
        assert!(
            start < graph.number_of_nodes(),
            "Start vertex {start} out of range"
        );

        let mut visited = graph.vertex_bitset_unset();
        visited.set(start as usize, true);

        Self {
            graph,
            visited,
            stack: vec![start],
        }
    }

    /// Returns the set of vertices discovered so far
    pub fn visited(&self) -> &NodeBitSet {
        &self.visited
    }

    /// Returns *true* if `u` was already discovered
    pub fn did_visit_node(&self, u: Node) -> bool {
        self.visited[u as usize]
    }

    /// Returns *true* once every vertex of the graph has been discovered
    pub fn visited_all(&self) -> bool {
        self.visited.all()
    }

    /// Continues the traversal at the smallest undiscovered vertex.
    /// Returns *false* if all vertices were already discovered.
    pub fn try_restart_at_unvisited(&mut self) -> bool {
        debug_assert!(self.stack.is_empty());
        match self.visited.first_zero() {
            Some(u) => {
                self.visited.set(u, true);
                self.stack.push(u as Node);
                true
            }
            None => false,
        }
    }
}

impl<'a, G> Iterator for Dfs<'a, G>
where
    G: AdjacencyList,
{
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.stack.pop()?;

        for v in self.graph.neighbors_of(u) {
            if !self.visited.replace(v as usize, true) {
                self.stack.push(v);
            }
        }

        Some(u)
    }
}

/// Traversal algorithms exposed directly on graphs
pub trait Traversal: AdjacencyList + Sized {
    /// Returns a depth-first traversal starting at `start`.
    /// ** Panics if `start >= n` **
    fn dfs(&self, start: Node) -> Dfs<'_, Self> {
        Dfs::new(self, start)
    }
}

impl<G: AdjacencyList> Traversal for G {}
