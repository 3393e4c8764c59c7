//! Weighted random choice among several generators.

use crate::traits::{Generator, GeneratorError};
use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Generator that, on every draw, picks one of its child generators with
/// probability proportional to the child's weight and produces that child's
/// next value.
///
/// Giving each child a weight equal to the number of distinct values it can
/// produce makes the combined distribution uniform over the union of those
/// values, instead of uniform over the children.
#[derive(Debug, Clone)]
pub struct WeightedOneOf<G> {
    generators: Vec<G>,
    weights: Vec<usize>,
    distribution: WeightedIndex<usize>,
    rng: StdRng,
    selected: usize,
}

impl<G: Generator> WeightedOneOf<G> {
    /// Create a weighted choice seeded from the operating system.
    pub fn new(generators: Vec<G>, weights: Vec<usize>) -> Result<Self, GeneratorError> {
        Self::with_rng(generators, weights, StdRng::from_entropy())
    }

    /// Create a reproducible weighted choice.
    pub fn seeded(generators: Vec<G>, weights: Vec<usize>, seed: u64) -> Result<Self, GeneratorError> {
        Self::with_rng(generators, weights, StdRng::seed_from_u64(seed))
    }

    /// Create a choice where every child is equally likely.
    pub fn uniform(generators: Vec<G>) -> Result<Self, GeneratorError> {
        let weights = vec![1; generators.len()];
        Self::new(generators, weights)
    }

    /// Create a weighted choice drawing from `rng`.
    pub fn with_rng(generators: Vec<G>, weights: Vec<usize>, mut rng: StdRng) -> Result<Self, GeneratorError> {
        if generators.is_empty() {
            return Err(GeneratorError::NoValues);
        }
        if generators.len() != weights.len() {
            return Err(GeneratorError::WeightCountMismatch {
                generators: generators.len(),
                weights: weights.len(),
            });
        }

        let distribution = WeightedIndex::new(&weights)?;
        // Children already hold a first value, so the first draw only selects.
        let selected = distribution.sample(&mut rng);

        tracing::debug!(
            children = generators.len(),
            total_weight = weights.iter().sum::<usize>(),
            "created weighted one-of generator"
        );

        Ok(Self {
            generators,
            weights,
            distribution,
            rng,
            selected,
        })
    }

    /// Index of the child that produced the current value.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Weights of the children, in order.
    pub fn weights(&self) -> &[usize] {
        &self.weights
    }

    /// The child generators, in order.
    pub fn generators(&self) -> &[G] {
        &self.generators
    }
}

impl<G: Generator> Generator for WeightedOneOf<G> {
    type Item = G::Item;

    fn current(&self) -> &G::Item {
        self.generators[self.selected].current()
    }

    fn advance(&mut self) -> bool {
        self.selected = self.distribution.sample(&mut self.rng);
        self.generators[self.selected].advance()
    }
}
