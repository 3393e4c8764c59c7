//! Sample plans: character generators described in YAML.
//!
//! A plan lists named samples, each with a generator configuration and the
//! number of characters to draw from it:
//!
//! ```yaml
//! seed: 42
//! samples:
//!   - name: file_names
//!     count: 16
//!     generator:
//!       type: alphabet
//!       alphabet: portable_posix_filename
//!   - name: abc
//!     count: 9
//!     generator:
//!       type: cycle
//!       inner:
//!         type: values
//!         values: "abc"
//! ```

use crate::alphabets::{Alphabet, AlphabetGenerator};
use crate::character::{CharGenerator, CodeUnit};
use gen_core::{derive_seed, Cycle, Generator, GeneratorError, GeneratorExt, Take, Values};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Error type for plan operations.
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    /// Error reading plan file
    #[error("Failed to read plan file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// A generator could not be built from its configuration
    #[error("Invalid generator in sample '{sample}': {source}")]
    Generator {
        sample: String,
        #[source]
        source: GeneratorError,
    },

    /// Sample not found in plan
    #[error("Sample not found: {0}")]
    SampleNotFound(String),
}

/// Generator configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GeneratorConfig {
    /// Uniform characters from a named alphabet
    Alphabet { alphabet: Alphabet },

    /// Uniform code units in an inclusive range
    Range {
        /// Lowest code unit (inclusive)
        lower: u16,
        /// Highest code unit (inclusive)
        upper: u16,
    },

    /// The characters of a string, in order, once
    Values { values: String },

    /// The first `count` values of another generator
    Take {
        count: usize,
        inner: Box<GeneratorConfig>,
    },

    /// Another finite generator, repeated forever
    Cycle { inner: Box<GeneratorConfig> },
}

/// A named sample in a plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleDefinition {
    /// Sample name
    pub name: String,

    /// Maximum number of characters to draw
    pub count: usize,

    /// Generator configuration
    pub generator: GeneratorConfig,
}

/// A set of samples loaded from YAML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SamplePlan {
    /// Base seed; samples are random per run when absent
    #[serde(default)]
    pub seed: Option<u64>,

    /// Sample definitions
    pub samples: Vec<SampleDefinition>,
}

/// Characters drawn for one sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleOutput {
    /// Sample name
    pub name: String,

    /// Drawn characters; lone surrogates are replaced with U+FFFD
    pub text: String,

    /// Number of code units drawn
    pub produced: usize,
}

impl SamplePlan {
    /// Load a plan from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, PlanError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse a plan from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, PlanError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Get a sample definition by name.
    pub fn get_sample(&self, name: &str) -> Option<&SampleDefinition> {
        self.samples.iter().find(|s| s.name == name)
    }

    /// Seed for the sample at `index`, if the plan is seeded.
    fn sample_seed(&self, index: usize) -> Option<u64> {
        self.seed.map(|seed| derive_seed(seed, index as u64))
    }

    /// Draw every sample in the plan.
    pub fn run(&self) -> Result<Vec<SampleOutput>, PlanError> {
        self.samples
            .iter()
            .enumerate()
            .map(|(index, sample)| run_sample(sample, self.sample_seed(index)))
            .collect()
    }

    /// Draw a single sample by name.
    pub fn run_one(&self, name: &str) -> Result<SampleOutput, PlanError> {
        let index = self
            .samples
            .iter()
            .position(|s| s.name == name)
            .ok_or_else(|| PlanError::SampleNotFound(name.to_string()))?;
        run_sample(&self.samples[index], self.sample_seed(index))
    }
}

fn run_sample(sample: &SampleDefinition, seed: Option<u64>) -> Result<SampleOutput, PlanError> {
    let generator = build(&sample.generator, seed).map_err(|source| PlanError::Generator {
        sample: sample.name.clone(),
        source,
    })?;
    let units: Vec<u16> = generator
        .values()
        .take(sample.count)
        .map(CodeUnit::value)
        .collect();

    tracing::debug!(sample = %sample.name, produced = units.len(), "drew sample");

    Ok(SampleOutput {
        name: sample.name.clone(),
        text: String::from_utf16_lossy(&units),
        produced: units.len(),
    })
}

/// Generator built from a [`GeneratorConfig`].
#[derive(Debug, Clone)]
pub enum PlanGenerator {
    Alphabet(AlphabetGenerator),
    Values(Values<CodeUnit>),
    Take(Box<Take<PlanGenerator>>),
    Cycle(Box<Cycle<PlanGenerator>>),
}

/// Build the generator described by `config`.
///
/// With a seed the generator is reproducible; without one it draws from the
/// operating system's entropy.
pub fn build(config: &GeneratorConfig, seed: Option<u64>) -> Result<PlanGenerator, GeneratorError> {
    let generator = match config {
        GeneratorConfig::Alphabet { alphabet } => PlanGenerator::Alphabet(match seed {
            Some(seed) => alphabet.seeded_generator(seed),
            None => alphabet.generator(),
        }),
        GeneratorConfig::Range { lower, upper } => {
            let generator = match seed {
                Some(seed) => CharGenerator::seeded(*lower, *upper, seed)?,
                None => CharGenerator::new(*lower, *upper)?,
            };
            PlanGenerator::Alphabet(generator.into())
        }
        GeneratorConfig::Values { values } => {
            PlanGenerator::Values(Values::new(values.encode_utf16().map(CodeUnit::new).collect())?)
        }
        GeneratorConfig::Take { count, inner } => {
            PlanGenerator::Take(Box::new(build(inner, seed)?.take(*count)?))
        }
        GeneratorConfig::Cycle { inner } => PlanGenerator::Cycle(Box::new(build(inner, seed)?.cycle())),
    };
    Ok(generator)
}

impl Generator for PlanGenerator {
    type Item = CodeUnit;

    fn current(&self) -> &CodeUnit {
        match self {
            PlanGenerator::Alphabet(generator) => generator.current(),
            PlanGenerator::Values(generator) => generator.current(),
            PlanGenerator::Take(generator) => generator.current(),
            PlanGenerator::Cycle(generator) => generator.current(),
        }
    }

    fn advance(&mut self) -> bool {
        match self {
            PlanGenerator::Alphabet(generator) => generator.advance(),
            PlanGenerator::Values(generator) => generator.advance(),
            PlanGenerator::Take(generator) => generator.advance(),
            PlanGenerator::Cycle(generator) => generator.advance(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn test_plan() -> SamplePlan {
        let yaml = r#"
seed: 42
samples:
  - name: file_names
    count: 64
    generator:
      type: alphabet
      alphabet: portable_posix_filename

  - name: abc
    count: 9
    generator:
      type: cycle
      inner:
        type: values
        values: "abc"

  - name: two_digits
    count: 10
    generator:
      type: take
      count: 2
      inner:
        type: range
        lower: 48
        upper: 57

  - name: repeated_digits
    count: 12
    generator:
      type: cycle
      inner:
        type: take
        count: 4
        inner:
          type: alphabet
          alphabet: digit
"#;
        SamplePlan::from_yaml(yaml).unwrap()
    }

    #[test]
    fn test_parse_plan() {
        let plan = test_plan();
        assert_eq!(plan.seed, Some(42));
        assert_eq!(plan.samples.len(), 4);
        assert_eq!(
            plan.get_sample("file_names").unwrap().generator,
            GeneratorConfig::Alphabet {
                alphabet: Alphabet::PortablePosixFilename
            }
        );
        assert!(plan.get_sample("missing").is_none());
    }

    #[test]
    fn test_run_plan() {
        let outputs = test_plan().run().unwrap();
        assert_eq!(outputs.len(), 4);

        let file_names = &outputs[0];
        assert_eq!(file_names.produced, 64);
        assert!(file_names
            .text
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_')));

        assert_eq!(outputs[1].text, "abcabcabc");

        // Take stops after two values even though ten were requested.
        assert_eq!(outputs[2].produced, 2);
        assert!(outputs[2].text.chars().all(|c| c.is_ascii_digit()));

        let repeated = &outputs[3].text;
        assert_eq!(repeated.len(), 12);
        assert_eq!(&repeated[0..4], &repeated[4..8]);
        assert_eq!(&repeated[4..8], &repeated[8..12]);
    }

    #[test]
    fn test_seeded_plan_is_reproducible() {
        let plan = test_plan();
        assert_eq!(plan.run().unwrap(), plan.run().unwrap());
    }

    #[test]
    fn test_run_one() {
        let plan = test_plan();
        assert_eq!(plan.run_one("abc").unwrap().text, "abcabcabc");
        assert!(matches!(
            plan.run_one("missing"),
            Err(PlanError::SampleNotFound(name)) if name == "missing"
        ));
    }

    #[test]
    fn test_invalid_range_reported_with_sample_name() {
        let yaml = r#"
samples:
  - name: backwards
    count: 1
    generator:
      type: range
      lower: 90
      upper: 65
"#;
        let err = SamplePlan::from_yaml(yaml).unwrap().run().unwrap_err();
        assert!(matches!(
            err,
            PlanError::Generator {
                ref sample,
                source: GeneratorError::InvalidBounds { lower: 90, upper: 65 },
            } if sample == "backwards"
        ));
    }

    #[test]
    fn test_empty_values_rejected() {
        let config = GeneratorConfig::Values {
            values: String::new(),
        };
        assert!(matches!(build(&config, None), Err(GeneratorError::NoValues)));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "samples:\n  - name: digits\n    count: 5\n    generator:\n      type: alphabet\n      alphabet: digit"
        )
        .unwrap();

        let plan = SamplePlan::from_file(file.path()).unwrap();
        let output = plan.run_one("digits").unwrap();
        assert_eq!(output.produced, 5);
        assert!(output.text.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_unknown_generator_type() {
        let yaml = r#"
samples:
  - name: broken
    count: 1
    generator:
      type: emoji
"#;
        assert!(matches!(SamplePlan::from_yaml(yaml), Err(PlanError::YamlError(_))));
    }
}
