//! gen-sample Library
//!
//! Sampling helpers behind the `gen-sample` command-line tool, which prints
//! values drawn from the character generators used in property-based tests.
//!
//! # Features
//!
//! - Alphabets: digits, ASCII letters, alphanumerics, POSIX portable filenames
//! - Ranges: any inclusive range of UTF-16 code units
//! - Cycles: a fixed string repeated forever
//! - Plans: several named samples described in a YAML file
//!
//! # CLI Usage
//!
//! ```bash
//! # Twenty POSIX-portable filename characters, reproducibly
//! gen-sample alphabet portable-posix-filename --count 20 --seed 42
//!
//! # Uppercase letters from an explicit range
//! gen-sample range --lower 65 --upper 90
//!
//! # Repeat a fixed sequence
//! gen-sample cycle --values abc --count 9
//!
//! # Run every sample of a plan, one JSON line each
//! gen-sample plan --file samples.yaml
//! ```

use char_gen::{Alphabet, CharGenerator, CodeUnit};
use clap::{Parser, ValueEnum};
use gen_core::{Generator, GeneratorExt, Values};

/// Options shared by every sampling command.
#[derive(Parser, Clone, Debug)]
pub struct SampleOpts {
    /// Number of characters to draw
    #[arg(long, default_value = "32")]
    pub count: usize,

    /// Seed for reproducible output (random when omitted)
    #[arg(long, env = "GEN_SAMPLE_SEED")]
    pub seed: Option<u64>,
}

/// Alphabet names accepted on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum AlphabetArg {
    /// Characters 0-9
    Digit,
    /// Characters a-z
    AsciiLowercase,
    /// Characters A-Z
    AsciiUppercase,
    /// Characters a-z and A-Z
    AsciiAlpha,
    /// Characters a-z, A-Z and 0-9
    AsciiAlphanumeric,
    /// Characters a-z, A-Z, 0-9, '.', '-' and '_'
    PortablePosixFilename,
}

// CLI type → generator library type conversions
impl From<AlphabetArg> for Alphabet {
    fn from(arg: AlphabetArg) -> Self {
        match arg {
            AlphabetArg::Digit => Alphabet::Digit,
            AlphabetArg::AsciiLowercase => Alphabet::AsciiLowercase,
            AlphabetArg::AsciiUppercase => Alphabet::AsciiUppercase,
            AlphabetArg::AsciiAlpha => Alphabet::AsciiAlpha,
            AlphabetArg::AsciiAlphanumeric => Alphabet::AsciiAlphanumeric,
            AlphabetArg::PortablePosixFilename => Alphabet::PortablePosixFilename,
        }
    }
}

/// Draw up to `count` code units from `generator` as a string.
///
/// Lone surrogates are replaced with U+FFFD.
pub fn draw<G>(generator: G, count: usize) -> String
where
    G: Generator<Item = CodeUnit>,
{
    let units: Vec<u16> = generator.values().take(count).map(CodeUnit::value).collect();
    String::from_utf16_lossy(&units)
}

/// Sample characters from a named alphabet.
pub fn sample_alphabet(alphabet: Alphabet, opts: &SampleOpts) -> String {
    tracing::info!("Sampling {} characters from {}", opts.count, alphabet);
    let generator = match opts.seed {
        Some(seed) => alphabet.seeded_generator(seed),
        None => alphabet.generator(),
    };
    draw(generator, opts.count)
}

/// Sample characters from an inclusive code-unit range.
pub fn sample_range(lower: u16, upper: u16, opts: &SampleOpts) -> anyhow::Result<String> {
    tracing::info!("Sampling {} characters from [{lower}, {upper}]", opts.count);
    let generator = match opts.seed {
        Some(seed) => CharGenerator::seeded(lower, upper, seed)?,
        None => CharGenerator::new(lower, upper)?,
    };
    Ok(draw(generator, opts.count))
}

/// Repeat the characters of `values` until `count` characters are drawn.
pub fn sample_cycle(values: &str, opts: &SampleOpts) -> anyhow::Result<String> {
    tracing::info!("Cycling {values:?} for {} characters", opts.count);
    let units = values.encode_utf16().map(CodeUnit::new).collect();
    let generator = Values::new(units)
        .map_err(|e| anyhow::anyhow!("Cannot cycle {values:?}: {e}"))?
        .cycle();
    Ok(draw(generator, opts.count))
}
