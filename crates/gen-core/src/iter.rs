//! Iterator adapter over a generator's values.

use crate::traits::Generator;

/// Iterator yielding a generator's current value followed by every value
/// produced by a successful advance.
///
/// Infinite generators produce infinite iterators; bound them with
/// [`Iterator::take`].
#[derive(Debug, Clone)]
pub struct GeneratorValues<G> {
    generator: G,
    started: bool,
    exhausted: bool,
}

impl<G> GeneratorValues<G> {
    pub(crate) fn new(generator: G) -> Self {
        Self {
            generator,
            started: false,
            exhausted: false,
        }
    }

    /// Get a reference to the underlying generator.
    pub fn generator(&self) -> &G {
        &self.generator
    }
}

impl<G> Iterator for GeneratorValues<G>
where
    G: Generator,
    G::Item: Clone,
{
    type Item = G::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(self.generator.current().clone());
        }
        if self.generator.advance() {
            Some(self.generator.current().clone())
        } else {
            self.exhausted = true;
            None
        }
    }
}
