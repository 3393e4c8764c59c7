//! Core Generator trait and associated types.

use crate::cycle::Cycle;
use crate::iter::GeneratorValues;
use crate::take::Take;
use rand::distributions::WeightedError;

/// Errors raised when a generator is constructed with invalid parameters.
///
/// All of these are programmer errors: a generator that fails to construct
/// never produces a value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeneratorError {
    /// Lower bound is greater than the upper bound
    #[error("invalid bounds: lower bound {lower} is greater than upper bound {upper}")]
    InvalidBounds { lower: u16, upper: u16 },

    /// A generator was asked to produce values from an empty set
    #[error("generator has no values to produce")]
    NoValues,

    /// `take(0)` would produce an empty generator
    #[error("cannot take zero values from a generator")]
    ZeroTake,

    /// Weighted selection got a different number of weights than generators
    #[error("{generators} generators were given {weights} weights")]
    WeightCountMismatch { generators: usize, weights: usize },

    /// Weights could not form a distribution
    #[error("invalid weights: {0}")]
    InvalidWeights(#[from] WeightedError),
}

/// A pull-based producer of values.
///
/// A generator always holds a current value once constructed. Consumers read
/// it with [`current`](Generator::current) and move on with
/// [`advance`](Generator::advance), which reports `false` when a finite
/// generator is exhausted. After exhaustion `current` is unspecified.
pub trait Generator {
    /// The type of values produced by this generator
    type Item;

    /// The most recently produced value.
    fn current(&self) -> &Self::Item;

    /// Move to the next value, returning whether one was produced.
    fn advance(&mut self) -> bool;
}

/// A type-erased, owned generator.
pub type BoxedGenerator<T> = Box<dyn Generator<Item = T>>;

impl<G: Generator + ?Sized> Generator for Box<G> {
    type Item = G::Item;

    fn current(&self) -> &Self::Item {
        (**self).current()
    }

    fn advance(&mut self) -> bool {
        (**self).advance()
    }
}

/// Combinator methods available on every generator.
pub trait GeneratorExt: Generator + Sized {
    /// Limit this generator to its first `count` values.
    fn take(self, count: usize) -> Result<Take<Self>, GeneratorError> {
        Take::new(self, count)
    }

    /// Replay this generator's finite sequence forever.
    fn cycle(self) -> Cycle<Self>
    where
        Self: Clone,
    {
        Cycle::new(self)
    }

    /// Erase the concrete type of this generator.
    fn boxed(self) -> BoxedGenerator<Self::Item>
    where
        Self: 'static,
    {
        Box::new(self)
    }

    /// Iterate over the values this generator produces.
    fn values(self) -> GeneratorValues<Self>
    where
        Self::Item: Clone,
    {
        GeneratorValues::new(self)
    }
}

impl<G: Generator> GeneratorExt for G {}
