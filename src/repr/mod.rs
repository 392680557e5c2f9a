/*!
# Graph Representations

Currently a single storage backend is provided:

- [`AdjList`]: an undirected multigraph storing, for each vertex, the ordered list of its
  neighbors. Parallel edges are kept as repeated entries, which is what the bridge finders and
  the Eulerian builder in [`crate::algo`] rely on.

Every algorithm is written against the traits in [`crate::ops`] rather than this type, so other
representations can be plugged in by implementing those traits.
*/

use crate::{edge::*, node::*, ops::*};

mod adj_list;

pub use adj_list::*;
