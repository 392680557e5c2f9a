/*!
`ubridges` finds **bridges** and **Eulerian paths** in undirected multigraphs.

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the graph.
For **edges**, we use a simple tuple-struct `Edge(Node, Node)`; as all graphs are undirected,
`Edge(u, v)` and `Edge(v, u)` denote the same edge (use [`Edge::normalized`](edge::Edge::normalized)
to compare them).

The only storage backend is [`AdjList`](crate::repr::AdjList): one ordered neighbor list per node.
Parallel edges are kept as repeated entries and the order of each list is preserved by all
non-destructive algorithms.

# Design

All algorithms/generators are provided as configurable structs that one can alter to their needs
using the *Builder* pattern before running them on a provided graph. The most commonly used
functionality is also implemented via traits on the graph itself.

- Bridges: [`TarjanBridges`](algo::TarjanBridges) (linear time, iterative DFS) and
  [`NaiveBridges`](algo::NaiveBridges) (remove each edge and test connectivity) both implement
  [`BridgeFinder`](algo::BridgeFinder).
- Eulerian paths: [`EulerianPathBuilder`](algo::EulerianPathBuilder) runs Fleury's algorithm with
  any [`BridgeFinder`](algo::BridgeFinder) as bridge oracle. It consumes the edges of the graph,
  so clone the graph first if it is still needed.

# Usage

- [`prelude`] includes definitions for nodes, edges, basic graph operations and [`AdjList`](repr::AdjList),
- [`algo`] includes traversal, connectivity, bridge and Eulerian path algorithms,
- [`gens`] includes random graph generators (`G(n,p)`, `G(n,m)`, connected and Eulerian graphs),
- [`io`] includes readers and writers for the text and binary graph formats.

```
use ubridges::{prelude::*, algo::*};

let mut graph = AdjList::new(6);
graph.add_edges([(0, 1), (1, 2), (2, 3), (3, 4), (4, 0), (4, 5)]);

assert_eq!(graph.compute_bridges(), vec![Edge(4, 5)]);
assert_eq!(graph.can_have_eulerian_path(), (true, Some(4)));

let path = graph.clone().find_eulerian_path();
assert_eq!(path.len(), 7);
```

The library emits `tracing` events (mostly at `debug` and `trace` level) and leaves installing a
subscriber to the application.
*/

pub mod algo;
pub mod edge;
pub mod gens;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
#[cfg(test)]
pub(crate) mod testing;
pub mod utils;

/// `ubridges::prelude` includes definitions for nodes and edges, all basic graph operation traits
/// as well as the graph representation.
pub mod prelude {
    pub use super::{edge::*, node::*, ops::*, repr::*};
}
