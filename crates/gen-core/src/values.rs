//! Fixed-value generator.

use crate::traits::{Generator, GeneratorError};

/// Finite generator producing a fixed list of values in order.
#[derive(Debug, Clone)]
pub struct Values<T> {
    values: Vec<T>,
    position: usize,
}

impl<T> Values<T> {
    /// Create a generator over `values`.
    ///
    /// Fails with [`GeneratorError::NoValues`] when `values` is empty, since a
    /// generator must hold a current value from construction on.
    pub fn new(values: Vec<T>) -> Result<Self, GeneratorError> {
        if values.is_empty() {
            return Err(GeneratorError::NoValues);
        }
        Ok(Self {
            values,
            position: 0,
        })
    }

    /// Number of values this generator produces in total.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false` for a constructed generator.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<T> Generator for Values<T> {
    type Item = T;

    fn current(&self) -> &T {
        &self.values[self.position]
    }

    fn advance(&mut self) -> bool {
        if self.position + 1 < self.values.len() {
            self.position += 1;
            true
        } else {
            false
        }
    }
}
