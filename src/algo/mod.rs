/*!
# Graph Algorithms

This module provides the algorithms of this crate, built on top of the traits in [`crate::ops`].
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use ubridges::algo::*;
```
and gain access to traversal, connectivity, bridge finding and Eulerian path construction.

Most functionality is available in two flavours: as configurable structs
([`TarjanBridges`], [`NaiveBridges`], [`EulerianPathBuilder`]) and as extension traits
implemented directly on graphs (`graph.is_connected()`, `graph.compute_bridges()`,
`graph.find_eulerian_path()`).
*/

mod bridges;
mod connectivity;
mod eulerian;
mod naive_bridges;
mod traversal;

use crate::prelude::*;

pub use bridges::*;
pub use connectivity::*;
pub use eulerian::*;
pub use naive_bridges::*;
pub use traversal::*;
