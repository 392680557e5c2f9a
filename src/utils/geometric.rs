use rand::Rng;
use rand_distr::{Distribution, Geometric};

use crate::utils::Probability;

/// Enumerates the successes of independent Bernoulli trials at positions `0..stop` without
/// sampling every trial: the gap to the next success is drawn from a geometric distribution.
///
/// For `p > 1/2` the gaps between *failures* are drawn instead and all other positions are
/// reported, which keeps the number of samples proportional to `min(p, 1 - p) * stop`.
#[derive(Debug, Copy, Clone)]
pub struct GeometricJumper {
    prob: f64,
    stop: u64,
}

impl GeometricJumper {
    /// Creates a new jumper with success probability `prob` over the positions `0..stop`
    /// ** Panics if `prob` is not a valid probability **
    pub fn new(prob: f64, stop: u64) -> Self {
        assert!(prob.is_valid_probility(), "Invalid probability {prob}");
        Self { prob, stop }
    }

    /// Creates the iterator over all successful positions in ascending order
    pub fn iter<R: Rng>(self, rng: &mut R) -> GeometricJumperIter<'_, R> {
        let inverted = self.prob > 0.5;
        let gap_prob = if inverted { 1.0 - self.prob } else { self.prob };

        // Degenerate probabilities never produce a gap: either nothing or everything succeeds
        let gaps = if gap_prob > 0.0 {
            Geometric::new(gap_prob).ok()
        } else {
            None
        };

        let mut iter = GeometricJumperIter {
            rng,
            gaps,
            inverted,
            cur: 0,
            stop: self.stop,
            next_failure: u64::MAX,
        };
        if inverted {
            iter.next_failure = iter.gap_from(0);
        }
        iter
    }
}

/// Iterator created by [`GeometricJumper::iter`]
#[derive(Debug)]
pub struct GeometricJumperIter<'a, R: Rng> {
    rng: &'a mut R,
    gaps: Option<Geometric>,
    inverted: bool,
    cur: u64,
    stop: u64,
    next_failure: u64,
}

impl<R: Rng> GeometricJumperIter<'_, R> {
    /// Position of the next event at or after `from`, saturating at `u64::MAX`
    fn gap_from(&mut self, from: u64) -> u64 {
        match &self.gaps {
            Some(distr) => from.saturating_add(distr.sample(self.rng)),
            None => u64::MAX,
        }
    }
}

impl<R: Rng> Iterator for GeometricJumperIter<'_, R> {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.inverted {
            let next = self.gap_from(self.cur);
            if next >= self.stop {
                self.cur = self.stop;
                return None;
            }
            self.cur = next + 1;
            return Some(next);
        }

        while self.cur < self.stop {
            let pos = self.cur;
            self.cur += 1;

            if pos == self.next_failure {
                self.next_failure = self.gap_from(self.cur);
            } else {
                return Some(pos);
            }
        }
        None
    }
}

#[cfg(test)]
mod test {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn invalid_probability() {
        for prob in [-1.0, -0.001, 1.0001, f64::NAN] {
            assert!(std::panic::catch_unwind(|| GeometricJumper::new(prob, 10)).is_err());
        }
    }

    #[test]
    fn degenerate_probabilities() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for stop in [0, 3, 10] {
            assert_eq!(
                GeometricJumper::new(1.0, stop).iter(rng).collect::<Vec<_>>(),
                (0..stop).collect::<Vec<_>>()
            );
            assert_eq!(GeometricJumper::new(0.0, stop).iter(rng).count(), 0);
        }
    }

    #[test]
    fn positions_are_increasing_and_bounded() {
        let rng = &mut Pcg64Mcg::seed_from_u64(4);

        for prob in [0.01, 0.3, 0.5, 0.7, 0.99] {
            let positions = GeometricJumper::new(prob, 500).iter(rng).collect::<Vec<_>>();
            assert!(positions.windows(2).all(|w| w[0] < w[1]));
            assert!(positions.iter().all(|&x| x < 500));
        }
    }

    #[test]
    fn occurrences() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);

        for prob in [0.25, 0.75] {
            let stop = 100u64;
            let mut occurrences = vec![0; stop as usize];
            for _ in 0..1000 {
                for x in GeometricJumper::new(prob, stop).iter(rng) {
                    occurrences[x as usize] += 1;
                }
            }

            let expected = (prob * 1000.0) as i32;
            assert!(
                occurrences
                    .into_iter()
                    .all(|x| (expected - 100..expected + 100).contains(&x)),
                "prob {prob}"
            );
        }
    }
}
