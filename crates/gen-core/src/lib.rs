//! Core generator types for the gen-sample workspace.
//!
//! This crate provides the pull-based [`Generator`] capability and the small
//! set of combinators the character generators are composed from:
//!
//! - [`Values`] - Finite generator over a fixed list of values
//! - [`Take`] - The first `n` values of another generator
//! - [`WeightedOneOf`] - Weighted random choice among several generators
//! - [`Cycle`] - Replays a finite generator forever
//! - [`move_into_vec!`] / [`gather!`] - Collect move-only generators into a `Vec`
//!
//! # Architecture
//!
//! ```text
//! gen-core (this crate)
//!    │
//!    ├─── char-gen     (character generators and alphabets)
//!    │
//!    └─── gen-sample   (CLI sampling generators and YAML plans)
//! ```
//!
//! # Example
//!
//! ```rust
//! use gen_core::{GeneratorExt, Values};
//!
//! let abc = Values::new(vec!['a', 'b', 'c']).unwrap();
//! let repeated: String = abc.cycle().values().take(7).collect();
//! assert_eq!(repeated, "abcabca");
//! ```

pub mod collect;
pub mod cycle;
pub mod iter;
pub mod one_of;
pub mod take;
pub mod traits;
pub mod values;

// Re-exports for convenience
pub use cycle::{Cycle, CyclePhase};
pub use iter::GeneratorValues;
pub use one_of::WeightedOneOf;
pub use take::Take;
pub use traits::{BoxedGenerator, Generator, GeneratorError, GeneratorExt};
pub use values::Values;

/// Mix a parent seed with a child index into a child seed.
///
/// Composite generators use this so that every child gets its own
/// reproducible stream from a single seed.
pub fn derive_seed(seed: u64, index: u64) -> u64 {
    seed.wrapping_add(index.wrapping_add(1).wrapping_mul(0x9E3779B97F4A7C15))
}
