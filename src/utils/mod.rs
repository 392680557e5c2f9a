/*!
# Utilities

Small helpers shared by the generators: the [`Probability`] check and the
[`GeometricJumper`] that drives [`G(n,p)`](crate::gens::Gnp) sampling.
*/

use num::{One, Zero};

pub mod geometric;

pub use geometric::{GeometricJumper, GeometricJumperIter};

/// Helper trait for probalities
pub trait Probability {
    /// Returns *true* if the probality is valid (ie. between `0` and `1`)
    fn is_valid_probility(&self) -> bool;
}

impl<P> Probability for P
where
    P: Zero + One + PartialOrd,
{
    fn is_valid_probility(&self) -> bool {
        Self::zero().le(self) && Self::one().ge(self)
    }
}
