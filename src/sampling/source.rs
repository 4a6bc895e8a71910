use crate::sampling::SamplingError;
use rand::{seq::SliceRandom, Rng};

/// The three random primitives the sampling algorithms draw on.
///
/// Every algorithm takes a `RandomSource` explicitly; there is no hidden
/// process-wide generator. The blanket implementation covers every
/// [`rand::Rng`], so callers pass `StdRng::seed_from_u64(..)` for a
/// reproducible sample or `rand::thread_rng()` otherwise.
pub trait RandomSource {
    /// A uniformly chosen element of `population`.
    fn choice<'a, T>(&mut self, population: &'a [T]) -> Result<&'a T, SamplingError>;

    /// A uniform draw from `[0, 1)`.
    fn uniform(&mut self) -> f64;

    /// Reorders `population` into a uniformly random permutation.
    fn shuffle<T>(&mut self, population: &mut [T]);
}

impl<R> RandomSource for R
where
    R: Rng,
{
    fn choice<'a, T>(&mut self, population: &'a [T]) -> Result<&'a T, SamplingError> {
        population.choose(self).ok_or(SamplingError::EmptyPopulation)
    }

    fn uniform(&mut self) -> f64 {
        self.gen()
    }

    fn shuffle<T>(&mut self, population: &mut [T]) {
        population.shuffle(self);
    }
}
