/*!
# Node Representation

We choose `Node = u32` as almost all use-cases involve less than `2^32` vertices.
This saves space compared to `usize` and lets us index per-vertex arrays with a plain cast.
*/

use bitvec::vec::BitVec;

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// Node-Value that is considered invalid
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// BitSet with one bit per node, used as visited-marker in traversals
pub type NodeBitSet = BitVec;

/// Creates a [`NodeBitSet`] for `n` nodes with all bits cleared
pub fn node_bitset_unset(n: NumNodes) -> NodeBitSet {
    BitVec::repeat(false, n as usize)
}
