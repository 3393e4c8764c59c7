//! Character generators over a closed range of UTF-16 code units.

use gen_core::{Generator, GeneratorError};
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single UTF-16 code unit.
///
/// Character generators work on the full 16-bit range, which includes lone
/// surrogates that are not valid `char`s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CodeUnit(u16);

impl CodeUnit {
    /// Wrap a raw code unit.
    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    /// Numeric value of the code unit.
    pub const fn value(self) -> u16 {
        self.0
    }

    /// The `char` for this code unit, or `None` for a surrogate.
    pub fn to_char(self) -> Option<char> {
        char::from_u32(u32::from(self.0))
    }
}

impl From<u8> for CodeUnit {
    fn from(ascii: u8) -> Self {
        Self(u16::from(ascii))
    }
}

impl From<u16> for CodeUnit {
    fn from(value: u16) -> Self {
        Self(value)
    }
}

impl From<CodeUnit> for u16 {
    fn from(unit: CodeUnit) -> Self {
        unit.0
    }
}

impl fmt::Display for CodeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char().unwrap_or(char::REPLACEMENT_CHARACTER))
    }
}

/// Infinite generator of code units drawn uniformly from `[lower, upper]`.
///
/// Construction draws the first value. Every advance draws a new one and
/// succeeds. With `lower == upper` the generator always yields that value.
#[derive(Debug, Clone)]
pub struct CharGenerator {
    lower: u16,
    upper: u16,
    distribution: Uniform<u16>,
    rng: StdRng,
    current: CodeUnit,
}

impl CharGenerator {
    /// Create a generator seeded from the operating system.
    pub fn new(lower: u16, upper: u16) -> Result<Self, GeneratorError> {
        Self::with_rng(lower, upper, StdRng::from_entropy())
    }

    /// Create a reproducible generator.
    pub fn seeded(lower: u16, upper: u16, seed: u64) -> Result<Self, GeneratorError> {
        Self::with_rng(lower, upper, StdRng::seed_from_u64(seed))
    }

    /// Generator over every 16-bit code unit.
    pub fn full_range() -> Self {
        Self::checked(u16::MIN, u16::MAX, StdRng::from_entropy())
    }

    /// Generator that always yields `unit`.
    pub fn literal(unit: impl Into<CodeUnit>) -> Self {
        let value = unit.into().value();
        Self::checked(value, value, StdRng::from_entropy())
    }

    fn with_rng(lower: u16, upper: u16, rng: StdRng) -> Result<Self, GeneratorError> {
        if lower > upper {
            return Err(GeneratorError::InvalidBounds { lower, upper });
        }
        Ok(Self::checked(lower, upper, rng))
    }

    /// Build from bounds already known to be ordered.
    pub(crate) fn checked(lower: u16, upper: u16, mut rng: StdRng) -> Self {
        debug_assert!(lower <= upper);
        tracing::debug!(lower, upper, "creating character generator");

        let distribution = Uniform::new_inclusive(lower, upper);
        let current = CodeUnit(distribution.sample(&mut rng));
        Self {
            lower,
            upper,
            distribution,
            rng,
            current,
        }
    }

    /// Inclusive bounds of the generated code units.
    pub fn bounds(&self) -> (u16, u16) {
        (self.lower, self.upper)
    }

    /// Number of distinct code units this generator can produce.
    pub fn cardinality(&self) -> usize {
        usize::from(self.upper - self.lower) + 1
    }
}

impl Generator for CharGenerator {
    type Item = CodeUnit;

    fn current(&self) -> &CodeUnit {
        &self.current
    }

    fn advance(&mut self) -> bool {
        self.current = CodeUnit(self.distribution.sample(&mut self.rng));
        true
    }
}
