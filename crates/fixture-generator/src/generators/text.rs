//! Lorem and person-name text generators.

use fake::faker::lorem::en::{Sentence, Word};
use fake::faker::name::en::Name;
use fake::Fake;
use rand::Rng;
use std::ops::RangeInclusive;

/// Word count range for [`sentence`].
pub const SENTENCE_WORDS: RangeInclusive<usize> = 3..=10;

/// A single lorem word.
pub fn word<R: Rng + ?Sized>(rng: &mut R) -> String {
    Word().fake_with_rng(rng)
}

/// A lorem sentence of 3 to 10 words.
pub fn sentence<R: Rng + ?Sized>(rng: &mut R) -> String {
    Sentence(*SENTENCE_WORDS.start()..*SENTENCE_WORDS.end() + 1).fake_with_rng(rng)
}

/// Between `count.start()` and `count.end()` lorem words joined by `separator`.
pub fn joined_words<R: Rng + ?Sized>(
    rng: &mut R,
    count: &RangeInclusive<usize>,
    separator: &str,
) -> String {
    let n = rng.gen_range(*count.start()..=*count.end());
    (0..n)
        .map(|_| word(rng))
        .collect::<Vec<_>>()
        .join(separator)
}

/// A "First Last" style person name.
pub fn full_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    Name().fake_with_rng(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_word_is_single_token() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..50 {
            let w = word(&mut rng);
            assert!(!w.is_empty());
            assert!(!w.contains(' '));
        }
    }

    #[test]
    fn test_sentence_word_count() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..50 {
            let s = sentence(&mut rng);
            let words = s.split_whitespace().count();
            assert!(SENTENCE_WORDS.contains(&words), "{s:?} has {words} words");
        }
    }

    #[test]
    fn test_joined_words() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..50 {
            let genres = joined_words(&mut rng, &(1..=3), ", ");
            let parts: Vec<&str> = genres.split(", ").collect();
            assert!((1..=3).contains(&parts.len()));
            assert!(parts.iter().all(|p| !p.is_empty()));
        }
    }

    #[test]
    fn test_full_name_has_two_parts() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..50 {
            let name = full_name(&mut rng);
            assert!(name.split_whitespace().count() >= 2, "{name:?}");
        }
    }

    #[test]
    fn test_deterministic_text() {
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);

        assert_eq!(sentence(&mut rng1), sentence(&mut rng2));
        assert_eq!(full_name(&mut rng1), full_name(&mut rng2));
    }
}
