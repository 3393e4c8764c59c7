//! Cycle combinator: replays a finite generator forever.

use crate::traits::Generator;

/// How a [`Cycle`] reached its current value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CyclePhase {
    /// The wrapped generator advanced normally
    Forward,
    /// The wrapped generator was exhausted and restored to its first value
    Restarting,
}

/// Generator that replays the finite sequence of a wrapped generator
/// indefinitely.
///
/// A snapshot of the wrapped generator is taken at construction. Whenever the
/// wrapped generator reports exhaustion it is replaced by a fresh copy of
/// that snapshot, so the replay reproduces the original sequence exactly,
/// including the random state of generators that draw their values.
///
/// For a wrapped generator yielding `v1..vn`, the kth value (1-indexed) is
/// `v[((k - 1) mod n) + 1]`. Wrapping an infinite generator is allowed and
/// behaves as a passthrough.
#[derive(Debug, Clone)]
pub struct Cycle<G> {
    snapshot: G,
    active: G,
    phase: CyclePhase,
    passes: u64,
}

impl<G: Generator + Clone> Cycle<G> {
    /// Take ownership of `generator` and cycle it.
    pub fn new(generator: G) -> Self {
        Self {
            snapshot: generator.clone(),
            active: generator,
            phase: CyclePhase::Forward,
            passes: 0,
        }
    }

    /// Number of times the wrapped generator has been restarted.
    pub fn passes(&self) -> u64 {
        self.passes
    }

    /// Current phase.
    pub fn phase(&self) -> CyclePhase {
        self.phase
    }

    fn restart(&mut self) {
        self.active = self.snapshot.clone();
        self.phase = CyclePhase::Restarting;
        self.passes += 1;
        tracing::trace!(passes = self.passes, "cycle restarted wrapped generator");
    }
}

impl<G: Generator + Clone> Generator for Cycle<G> {
    type Item = G::Item;

    fn current(&self) -> &G::Item {
        self.active.current()
    }

    fn advance(&mut self) -> bool {
        if self.active.advance() {
            self.phase = CyclePhase::Forward;
        } else {
            self.restart();
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GeneratorExt, Values, WeightedOneOf};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const ALPHABET: [char; 10] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j'];

    #[test]
    fn test_repeats_abc() {
        let generated: String = Values::new(vec!['a', 'b', 'c'])
            .unwrap()
            .cycle()
            .values()
            .take(9)
            .collect();
        assert_eq!(generated, "abcabcabc");
    }

    #[test]
    fn test_seventh_value_is_first() {
        let seventh = Values::new(vec!['a', 'b', 'c']).unwrap().cycle().values().nth(6);
        assert_eq!(seventh, Some('a'));
    }

    #[test]
    fn test_one_exhaustion_matches_original() {
        let original: Vec<char> = Values::new(vec!['a', 'b', 'c']).unwrap().values().collect();
        let repeating: Vec<char> = Values::new(vec!['a', 'b', 'c'])
            .unwrap()
            .cycle()
            .values()
            .take(original.len())
            .collect();
        assert_eq!(repeating, original);
    }

    #[test]
    fn test_every_pass_matches_original() {
        let mut rng = StdRng::seed_from_u64(42);
        let original: Vec<char> = Values::new(vec!['a', 'b', 'c']).unwrap().values().collect();

        for _ in 0..10 {
            let passes = rng.gen_range(2..=10);
            let repeating: Vec<char> = Values::new(vec!['a', 'b', 'c'])
                .unwrap()
                .cycle()
                .values()
                .take(passes * original.len())
                .collect();
            for chunk in repeating.chunks(original.len()) {
                assert_eq!(chunk, original.as_slice());
            }
        }
    }

    #[test]
    fn test_xn_plus_m_element() {
        let n = ALPHABET.len();
        let original: Vec<char> = Values::new(ALPHABET.to_vec()).unwrap().values().collect();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..100 {
            let x = rng.gen_range(0..=20);
            let m = rng.gen_range(1..=n);
            let element = Values::new(ALPHABET.to_vec())
                .unwrap()
                .cycle()
                .values()
                .nth(x * n + m - 1);
            assert_eq!(element, Some(original[m - 1]));
        }
    }

    #[test]
    fn test_counts_passes() {
        let mut cycle = Values::new(vec![1, 2]).unwrap().cycle();
        assert_eq!(cycle.passes(), 0);
        assert!(cycle.advance());
        assert!(cycle.advance());
        assert_eq!(*cycle.current(), 1);
        assert_eq!(cycle.phase(), CyclePhase::Restarting);
        for _ in 0..3 {
            assert!(cycle.advance());
        }
        // Values: 1 2 | 1 2 | 1 2
        assert_eq!(*cycle.current(), 2);
        assert_eq!(cycle.passes(), 2);
        assert_eq!(cycle.phase(), CyclePhase::Forward);
    }

    #[test]
    fn test_replays_random_generation_exactly() {
        let constants = vec![
            Values::new(vec!['x']).unwrap().cycle(),
            Values::new(vec!['y']).unwrap().cycle(),
            Values::new(vec!['z']).unwrap().cycle(),
        ];
        let random = WeightedOneOf::seeded(constants, vec![1, 1, 1], 99)
            .unwrap()
            .take(8)
            .unwrap();
        let original: Vec<char> = random.clone().values().collect();

        let replayed: Vec<char> = random.cycle().values().take(original.len() * 4).collect();
        for chunk in replayed.chunks(original.len()) {
            assert_eq!(chunk, original.as_slice());
        }
    }

    #[test]
    fn test_infinite_generator_passthrough() {
        let mut cycle = Values::new(vec![5]).unwrap().cycle().cycle();
        for _ in 0..10 {
            assert!(cycle.advance());
            assert_eq!(*cycle.current(), 5);
        }
        assert_eq!(cycle.passes(), 0);
    }
}
