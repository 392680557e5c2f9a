use fxhash::FxHashSet;
use itertools::Itertools;
use rand::seq::SliceRandom;

use super::*;

/// Generator for uniform `G(n,m)` random graphs: exactly `m` distinct unordered pairs `{u, v}`
/// of distinct nodes, each set of `m` pairs being equally likely.
///
/// Sparse instances are drawn by rejection sampling into a [`FxHashSet`]. If more than half of
/// all pairs are requested, all pairs are enumerated and a random subset is kept instead.
#[derive(Debug, Copy, Clone, Default)]
pub struct Gnm {
    n: NumNodes,
    m: NumEdges,
}

impl Gnm {
    /// Creates a new empty `G(n,m)` generator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of unordered pairs of distinct nodes
    fn number_of_pairs(&self) -> u64 {
        let n = self.n as u64;
        n * n.saturating_sub(1) / 2
    }

    fn sample<R: Rng>(&self, rng: &mut R) -> Vec<Edge> {
        let pairs = self.number_of_pairs();
        assert!(
            self.m as u64 <= pairs,
            "Cannot place {} edges among {} nodes",
            self.m,
            self.n
        );

        if 2 * self.m as u64 > pairs {
            let mut edges = (0..self.n)
                .tuple_combinations()
                .map(|(u, v)| Edge(u, v))
                .collect_vec();
            edges.shuffle(rng);
            edges.truncate(self.m as usize);
            return edges;
        }

        let mut selected = FxHashSet::default();
        let mut edges = Vec::with_capacity(self.m as usize);
        while edges.len() < self.m as usize {
            let u = rng.random_range(0..self.n);
            let v = rng.random_range(0..self.n);
            if u == v {
                continue;
            }

            let edge = Edge(u, v).normalized();
            if selected.insert(edge) {
                edges.push(edge);
            }
        }
        edges
    }
}

impl NumNodesGen for Gnm {
    fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n;
        self
    }
}

impl NumEdgesGen for Gnm {
    fn edges(mut self, m: NumEdges) -> Self {
        self.m = m;
        self
    }
}

impl GraphGenerator for Gnm {
    /// Sampling needs the full set of selected pairs, so the edges are generated upfront
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = Edge>
    where
        R: Rng,
    {
        self.sample(rng).into_iter()
    }
}
