//! Named alphabets and their generators.
//!
//! Simple alphabets are a single [`CharGenerator`] over an ASCII range.
//! Composite alphabets are unions of simpler ones: each draw picks a part
//! with probability proportional to the number of characters in that part,
//! so every character of the union is equally likely.

use crate::character::{CharGenerator, CodeUnit};
use gen_core::{derive_seed, move_into_vec, Generator, GeneratorError, WeightedOneOf};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

const DIGIT: RangeInclusive<u16> = b'0' as u16..=b'9' as u16;
const LOWERCASE: RangeInclusive<u16> = b'a' as u16..=b'z' as u16;
const UPPERCASE: RangeInclusive<u16> = b'A' as u16..=b'Z' as u16;
const DOT: RangeInclusive<u16> = b'.' as u16..=b'.' as u16;
const HYPHEN: RangeInclusive<u16> = b'-' as u16..=b'-' as u16;
const UNDERSCORE: RangeInclusive<u16> = b'_' as u16..=b'_' as u16;

/// The named alphabets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alphabet {
    /// `[0-9]`
    Digit,
    /// `[a-z]`
    AsciiLowercase,
    /// `[A-Z]`
    AsciiUppercase,
    /// `[a-zA-Z]`
    AsciiAlpha,
    /// `[a-zA-Z0-9]`
    AsciiAlphanumeric,
    /// `[a-zA-Z0-9._-]`, the POSIX portable filename character set
    PortablePosixFilename,
}

impl Alphabet {
    /// Every alphabet, simplest first.
    pub const ALL: [Alphabet; 6] = [
        Alphabet::Digit,
        Alphabet::AsciiLowercase,
        Alphabet::AsciiUppercase,
        Alphabet::AsciiAlpha,
        Alphabet::AsciiAlphanumeric,
        Alphabet::PortablePosixFilename,
    ];

    /// Disjoint code-unit ranges making up this alphabet.
    pub fn ranges(self) -> &'static [RangeInclusive<u16>] {
        const DIGITS: &[RangeInclusive<u16>] = &[DIGIT];
        const LOWER: &[RangeInclusive<u16>] = &[LOWERCASE];
        const UPPER: &[RangeInclusive<u16>] = &[UPPERCASE];
        const ALPHA: &[RangeInclusive<u16>] = &[LOWERCASE, UPPERCASE];
        const ALPHANUMERIC: &[RangeInclusive<u16>] = &[LOWERCASE, UPPERCASE, DIGIT];
        const POSIX_FILENAME: &[RangeInclusive<u16>] =
            &[LOWERCASE, UPPERCASE, DIGIT, DOT, HYPHEN, UNDERSCORE];

        match self {
            Alphabet::Digit => DIGITS,
            Alphabet::AsciiLowercase => LOWER,
            Alphabet::AsciiUppercase => UPPER,
            Alphabet::AsciiAlpha => ALPHA,
            Alphabet::AsciiAlphanumeric => ALPHANUMERIC,
            Alphabet::PortablePosixFilename => POSIX_FILENAME,
        }
    }

    /// Number of characters in this alphabet.
    pub fn cardinality(self) -> usize {
        self.ranges()
            .iter()
            .map(|range| usize::from(range.end() - range.start()) + 1)
            .sum()
    }

    /// Whether `unit` belongs to this alphabet.
    pub fn contains(self, unit: CodeUnit) -> bool {
        self.ranges().iter().any(|range| range.contains(&unit.value()))
    }

    /// Snake-case name, as used in plan files and on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Alphabet::Digit => "digit",
            Alphabet::AsciiLowercase => "ascii_lowercase",
            Alphabet::AsciiUppercase => "ascii_uppercase",
            Alphabet::AsciiAlpha => "ascii_alpha",
            Alphabet::AsciiAlphanumeric => "ascii_alphanumeric",
            Alphabet::PortablePosixFilename => "portable_posix_filename",
        }
    }

    /// A generator for this alphabet seeded from the operating system.
    pub fn generator(self) -> AlphabetGenerator {
        self.build(&mut Seeds::Entropy)
    }

    /// A reproducible generator for this alphabet.
    pub fn seeded_generator(self, seed: u64) -> AlphabetGenerator {
        self.build(&mut Seeds::Derived { seed, next: 0 })
    }

    fn build(self, seeds: &mut Seeds) -> AlphabetGenerator {
        match self {
            Alphabet::Digit => range(DIGIT, seeds),
            Alphabet::AsciiLowercase => range(LOWERCASE, seeds),
            Alphabet::AsciiUppercase => range(UPPERCASE, seeds),
            Alphabet::AsciiAlpha => union(
                move_into_vec![
                    Alphabet::AsciiLowercase.build(seeds),
                    Alphabet::AsciiUppercase.build(seeds),
                ],
                seeds,
            ),
            Alphabet::AsciiAlphanumeric => union(
                move_into_vec![Alphabet::AsciiAlpha.build(seeds), Alphabet::Digit.build(seeds)],
                seeds,
            ),
            Alphabet::PortablePosixFilename => union(
                move_into_vec![
                    Alphabet::AsciiAlphanumeric.build(seeds),
                    range(DOT, seeds),
                    range(HYPHEN, seeds),
                    range(UNDERSCORE, seeds),
                ],
                seeds,
            ),
        }
    }
}

impl std::fmt::Display for Alphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Where the random sources of an alphabet's parts come from.
enum Seeds {
    Entropy,
    Derived { seed: u64, next: u64 },
}

impl Seeds {
    fn rng(&mut self) -> StdRng {
        match self {
            Seeds::Entropy => StdRng::from_entropy(),
            Seeds::Derived { seed, next } => {
                let rng = StdRng::seed_from_u64(derive_seed(*seed, *next));
                *next += 1;
                rng
            }
        }
    }
}

fn range(bounds: RangeInclusive<u16>, seeds: &mut Seeds) -> AlphabetGenerator {
    AlphabetGenerator::Range(CharGenerator::checked(*bounds.start(), *bounds.end(), seeds.rng()))
}

fn union(parts: Vec<AlphabetGenerator>, seeds: &mut Seeds) -> AlphabetGenerator {
    let weights = parts.iter().map(AlphabetGenerator::cardinality).collect();
    match WeightedOneOf::with_rng(parts, weights, seeds.rng()) {
        Ok(one_of) => AlphabetGenerator::Union(one_of),
        // Parts are never empty and every part has a non-zero cardinality.
        Err(e) => unreachable!("alphabet union rejected its parts: {e}"),
    }
}

/// Generator over an alphabet: a single range, or a cardinality-weighted
/// union of other alphabet generators.
#[derive(Debug, Clone)]
pub enum AlphabetGenerator {
    Range(CharGenerator),
    Union(WeightedOneOf<AlphabetGenerator>),
}

impl AlphabetGenerator {
    /// Union of `parts`, each weighted by its cardinality.
    ///
    /// Parts are expected to be disjoint; overlapping parts make the shared
    /// characters more likely.
    pub fn union(parts: Vec<AlphabetGenerator>) -> Result<Self, GeneratorError> {
        let weights = parts.iter().map(AlphabetGenerator::cardinality).collect();
        Ok(AlphabetGenerator::Union(WeightedOneOf::new(parts, weights)?))
    }

    /// Number of distinct characters this generator can produce.
    pub fn cardinality(&self) -> usize {
        match self {
            AlphabetGenerator::Range(generator) => generator.cardinality(),
            AlphabetGenerator::Union(one_of) => {
                one_of.generators().iter().map(AlphabetGenerator::cardinality).sum()
            }
        }
    }
}

impl From<CharGenerator> for AlphabetGenerator {
    fn from(generator: CharGenerator) -> Self {
        AlphabetGenerator::Range(generator)
    }
}

impl Generator for AlphabetGenerator {
    type Item = CodeUnit;

    fn current(&self) -> &CodeUnit {
        match self {
            AlphabetGenerator::Range(generator) => generator.current(),
            AlphabetGenerator::Union(one_of) => one_of.current(),
        }
    }

    fn advance(&mut self) -> bool {
        match self {
            AlphabetGenerator::Range(generator) => generator.advance(),
            AlphabetGenerator::Union(one_of) => one_of.advance(),
        }
    }
}

/// Characters `'0'` to `'9'`.
pub fn digit() -> CharGenerator {
    CharGenerator::checked(*DIGIT.start(), *DIGIT.end(), StdRng::from_entropy())
}

/// Characters `'a'` to `'z'`.
pub fn ascii_lowercase() -> CharGenerator {
    CharGenerator::checked(*LOWERCASE.start(), *LOWERCASE.end(), StdRng::from_entropy())
}

/// Characters `'A'` to `'Z'`.
pub fn ascii_uppercase() -> CharGenerator {
    CharGenerator::checked(*UPPERCASE.start(), *UPPERCASE.end(), StdRng::from_entropy())
}

/// Characters `[a-zA-Z]`, uniformly.
pub fn ascii_alpha() -> AlphabetGenerator {
    Alphabet::AsciiAlpha.generator()
}

/// Characters `[a-zA-Z0-9]`, uniformly.
pub fn ascii_alphanumeric() -> AlphabetGenerator {
    Alphabet::AsciiAlphanumeric.generator()
}

/// Characters `[a-zA-Z0-9._-]`, uniformly.
pub fn portable_posix_filename() -> AlphabetGenerator {
    Alphabet::PortablePosixFilename.generator()
}

#[cfg(test)]
mod tests {
    use super::*;
    use gen_core::GeneratorExt;
    use std::collections::HashMap;

    fn is_lower(c: char) -> bool {
        c.is_ascii_lowercase()
    }

    fn is_upper(c: char) -> bool {
        c.is_ascii_uppercase()
    }

    fn is_digit(c: char) -> bool {
        c.is_ascii_digit()
    }

    fn chars<G>(generator: G, count: usize) -> Vec<char>
    where
        G: Generator<Item = CodeUnit>,
    {
        generator
            .values()
            .take(count)
            .map(|unit| unit.to_char().unwrap())
            .collect()
    }

    #[test]
    fn test_digit() {
        assert!(chars(digit(), 100).into_iter().all(is_digit));
    }

    #[test]
    fn test_ascii_lowercase() {
        assert!(chars(ascii_lowercase(), 100).into_iter().all(is_lower));
    }

    #[test]
    fn test_ascii_uppercase() {
        assert!(chars(ascii_uppercase(), 100).into_iter().all(is_upper));
    }

    #[test]
    fn test_ascii_alpha() {
        for c in chars(ascii_alpha(), 100) {
            assert!(is_lower(c) || is_upper(c), "unexpected {c:?}");
        }
    }

    #[test]
    fn test_ascii_alphanumeric() {
        for c in chars(ascii_alphanumeric(), 100) {
            assert!(is_lower(c) || is_upper(c) || is_digit(c), "unexpected {c:?}");
        }
    }

    #[test]
    fn test_portable_posix_filename() {
        for c in chars(portable_posix_filename(), 1000) {
            assert!(
                is_lower(c) || is_upper(c) || is_digit(c) || matches!(c, '.' | '-' | '_'),
                "unexpected {c:?}"
            );
        }
    }

    #[test]
    fn test_cardinalities() {
        let expected = [
            (Alphabet::Digit, 10),
            (Alphabet::AsciiLowercase, 26),
            (Alphabet::AsciiUppercase, 26),
            (Alphabet::AsciiAlpha, 52),
            (Alphabet::AsciiAlphanumeric, 62),
            (Alphabet::PortablePosixFilename, 65),
        ];
        for (alphabet, cardinality) in expected {
            assert_eq!(alphabet.cardinality(), cardinality, "{alphabet}");
            assert_eq!(alphabet.generator().cardinality(), cardinality, "{alphabet}");
        }
    }

    #[test]
    fn test_union_weights_follow_cardinality() {
        match Alphabet::PortablePosixFilename.generator() {
            AlphabetGenerator::Union(one_of) => assert_eq!(one_of.weights(), &[62, 1, 1, 1]),
            AlphabetGenerator::Range(_) => panic!("Expected a union"),
        }
        match Alphabet::AsciiAlphanumeric.generator() {
            AlphabetGenerator::Union(one_of) => assert_eq!(one_of.weights(), &[52, 10]),
            AlphabetGenerator::Range(_) => panic!("Expected a union"),
        }
    }

    #[test]
    fn test_every_alphabet_stays_in_its_ranges() {
        for alphabet in Alphabet::ALL {
            for unit in alphabet.seeded_generator(42).values().take(500) {
                assert!(alphabet.contains(unit), "{alphabet} produced {unit}");
            }
        }
    }

    #[test]
    fn test_alphanumeric_is_uniform_over_characters() {
        // Digits are 10 of 62 characters, so about 16% of draws.
        let generated = chars(Alphabet::AsciiAlphanumeric.seeded_generator(3), 62_000);
        let digits = generated.iter().filter(|c| c.is_ascii_digit()).count();
        assert!((9_000..=11_000).contains(&digits), "digits = {digits}");

        let mut counts: HashMap<char, usize> = HashMap::new();
        for c in generated {
            *counts.entry(c).or_default() += 1;
        }
        assert_eq!(counts.len(), 62);
    }

    #[test]
    fn test_seeded_alphabet_is_reproducible() {
        let first = chars(Alphabet::PortablePosixFilename.seeded_generator(11), 200);
        let second = chars(Alphabet::PortablePosixFilename.seeded_generator(11), 200);
        assert_eq!(first, second);
    }

    #[test]
    fn test_cycle_replays_finite_alphabet_sample() {
        let sample = ascii_alpha().take(5).unwrap();
        let original = chars(sample.clone(), 5);
        let replayed = chars(sample.cycle(), 15);
        for chunk in replayed.chunks(5) {
            assert_eq!(chunk, original.as_slice());
        }
    }

    #[test]
    fn test_custom_union() {
        let vowels = AlphabetGenerator::union(vec![
            CharGenerator::literal(b'a').into(),
            CharGenerator::literal(b'e').into(),
        ])
        .unwrap();
        assert_eq!(vowels.cardinality(), 2);
        assert!(chars(vowels, 50).into_iter().all(|c| c == 'a' || c == 'e'));
    }

    #[test]
    fn test_alphabet_serde_names() {
        let alphabet: Alphabet = serde_yaml::from_str("portable_posix_filename").unwrap();
        assert_eq!(alphabet, Alphabet::PortablePosixFilename);
        assert_eq!(alphabet.to_string(), "portable_posix_filename");
    }
}
