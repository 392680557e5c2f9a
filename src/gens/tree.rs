use itertools::Itertools;
use rand::seq::SliceRandom;

use super::*;

/// Generator for random **recursive trees**: the nodes are visited in a random order and every
/// node but the first is attached to a uniformly chosen node visited before it.
///
/// The result has exactly `n - 1` edges (none for `n <= 1`) and connects all nodes, which makes
/// it the backbone of [`RandomGraph::connected_gnp`].
///
/// ```
/// use ubridges::{prelude::*, algo::*, gens::*};
///
/// let rng = &mut rand::rng();
/// let graph = AdjList::from_edges(20, RandomTree::new().nodes(20).generate(rng));
///
/// assert_eq!(graph.number_of_edges(), 19);
/// assert!(graph.is_connected());
/// ```
#[derive(Debug, Copy, Clone, Default)]
pub struct RandomTree {
    n: NumNodes,
}

impl RandomTree {
    /// Creates a new tree generator with `n = 0`
    pub fn new() -> Self {
        Self::default()
    }
}

impl NumNodesGen for RandomTree {
    fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n;
        self
    }
}

impl GraphGenerator for RandomTree {
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = Edge>
    where
        R: Rng,
    {
        let mut order = (0..self.n).collect_vec();
        order.shuffle(rng);

        (1..order.len()).map(move |i| {
            let parent = order[rng.random_range(0..i)];
            Edge(parent, order[i]).normalized()
        })
    }
}
