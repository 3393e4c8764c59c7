//! Character generators for property-based tests.
//!
//! This crate provides generators of UTF-16 code units drawn uniformly from
//! a range, the named alphabets built on top of them, and YAML sample plans
//! describing generators declaratively.
//!
//! # Architecture
//!
//! ```text
//!   CharGenerator [lower, upper]        (one uniform range)
//!          │
//!          ▼
//!   AlphabetGenerator::Union            (parts weighted by cardinality)
//!          │
//!          ▼
//!   Take / Cycle (gen-core)             (finite, then repeated forever)
//! ```
//!
//! # Example
//!
//! ```rust
//! use char_gen::alphabets::{portable_posix_filename, Alphabet};
//! use gen_core::GeneratorExt;
//!
//! let name: String = portable_posix_filename()
//!     .values()
//!     .take(12)
//!     .map(|unit| unit.to_string())
//!     .collect();
//! assert!(name.chars().all(|c| Alphabet::PortablePosixFilename.contains((c as u8).into())));
//! ```
//!
//! # Alphabets
//!
//! - `digit` - `[0-9]`
//! - `ascii_lowercase` - `[a-z]`
//! - `ascii_uppercase` - `[A-Z]`
//! - `ascii_alpha` - `[a-zA-Z]`
//! - `ascii_alphanumeric` - `[a-zA-Z0-9]`
//! - `portable_posix_filename` - `[a-zA-Z0-9._-]`

pub mod alphabets;
pub mod character;
pub mod plan;

// Re-exports for convenience
pub use alphabets::{Alphabet, AlphabetGenerator};
pub use character::{CharGenerator, CodeUnit};
pub use plan::{GeneratorConfig, PlanError, PlanGenerator, SampleDefinition, SampleOutput, SamplePlan};
