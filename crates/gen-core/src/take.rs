//! Take combinator: limits a generator to its first `n` values.

use crate::traits::{Generator, GeneratorError};

/// Generator producing at most `count` values of the wrapped generator.
///
/// This is how an infinite generator, such as a character generator, is
/// turned into a finite one.
#[derive(Debug, Clone)]
pub struct Take<G> {
    inner: G,
    count: usize,
    produced: usize,
}

impl<G: Generator> Take<G> {
    /// Wrap `inner`, keeping at most `count` of its values.
    pub fn new(inner: G, count: usize) -> Result<Self, GeneratorError> {
        if count == 0 {
            return Err(GeneratorError::ZeroTake);
        }
        Ok(Self {
            inner,
            count,
            // The wrapped generator already holds its first value.
            produced: 1,
        })
    }

    /// Maximum number of values produced.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Number of values remaining after the current one.
    pub fn remaining(&self) -> usize {
        self.count - self.produced
    }

    /// Unwrap the inner generator.
    pub fn into_inner(self) -> G {
        self.inner
    }
}

impl<G: Generator> Generator for Take<G> {
    type Item = G::Item;

    fn current(&self) -> &G::Item {
        self.inner.current()
    }

    fn advance(&mut self) -> bool {
        if self.produced >= self.count {
            return false;
        }
        if self.inner.advance() {
            self.produced += 1;
            true
        } else {
            // Exhausting the inner generator early ends the take as well.
            self.produced = self.count;
            false
        }
    }
}
