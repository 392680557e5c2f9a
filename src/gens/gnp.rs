use crate::{gens::*, utils::*};

/// A G(n, p) graph can be defined by either a probability or the average degree which is more
/// common in practice
#[derive(Debug, Copy, Clone, Default)]
enum GnpType {
    /// No value has been set yet
    #[default]
    NotSet,
    /// Direct probability value
    Prob(f64),
    /// Expected degree of a node
    AvgDeg(f64),
}

/// `G(n,p)` graphs contain every unordered pair `{u, v}` of distinct nodes as an edge with
/// probability `p`, independently of all other pairs.
///
/// Edges are produced as `Edge(u, v)` with `u < v` in lexicographic order. Instead of tossing a
/// coin per pair, the generator jumps directly to the next selected pair, so the running time is
/// linear in `n + m` rather than `n^2`.
///
/// ```
/// use ubridges::gens::*;
///
/// let rng = &mut rand::rng();
/// let edges = Gnp::new().nodes(10).prob(1.0).generate(rng);
/// assert_eq!(edges.len(), 45);
/// assert!(edges.iter().all(|e| e.0 < e.1));
/// ```
#[derive(Debug, Copy, Clone, Default)]
pub struct Gnp {
    n: NumNodes,
    p: GnpType,
}

impl Gnp {
    /// Creates a new empty `G(n,p)` generator
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates `p` directly
    /// ** Panics if `prob` is not a valid probability **
    pub fn prob(mut self, prob: f64) -> Self {
        assert!(prob.is_valid_probility(), "Invalid probability {prob}");
        self.p = GnpType::Prob(prob);
        self
    }

    /// Resolves the configured parameter into an edge probability
    fn probability(&self) -> f64 {
        match self.p {
            GnpType::NotSet => panic!("Probability of Gnp was not set!"),
            GnpType::Prob(p) => p,
            GnpType::AvgDeg(d) => {
                if self.n < 2 {
                    return 0.0;
                }

                let p = d / (self.n - 1) as f64;
                assert!(
                    p.is_valid_probility(),
                    "The average degree is invalid for the given n!"
                );
                p
            }
        }
    }
}

impl NumNodesGen for Gnp {
    fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n;
        self
    }
}

impl AverageDegreeGen for Gnp {
    /// Sets `p = d / (n - 1)`.
    /// The conversion happens when calling `stream/generate`, so `n` may be set afterwards.
    fn avg_deg(mut self, deg: f64) -> Self {
        self.p = GnpType::AvgDeg(deg);
        self
    }
}

impl GraphGenerator for Gnp {
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = Edge>
    where
        R: Rng,
    {
        let n = self.n as u64;
        let pairs = n * n.saturating_sub(1) / 2;
        let mut decoder = PairDecoder::new(n);

        GeometricJumper::new(self.probability(), pairs)
            .iter(rng)
            .map(move |x| decoder.decode(x))
    }
}

/// Maps the rank of an unordered pair `{u, v}`, `u < v`, in lexicographic order back to the pair.
/// Ranks have to be decoded in increasing order.
#[derive(Debug, Copy, Clone)]
struct PairDecoder {
    n: u64,
    row: u64,
    row_start: u64,
}

impl PairDecoder {
    fn new(n: u64) -> Self {
        Self {
            n,
            row: 0,
            row_start: 0,
        }
    }

    fn decode(&mut self, rank: u64) -> Edge {
        // Row `u` holds the `n - 1 - u` pairs `(u, u+1), ..., (u, n-1)`
        while rank >= self.row_start + (self.n - 1 - self.row) {
            self.row_start += self.n - 1 - self.row;
            self.row += 1;
        }

        let u = self.row;
        let v = u + 1 + (rank - self.row_start);
        Edge(u as Node, v as Node)
    }
}
