//! Numeric value generators.

use rand::distributions::uniform::SampleUniform;
use rand::Rng;
use std::ops::RangeInclusive;

/// Generate a random integer in the given range (inclusive).
pub fn int_in_range<T, R>(rng: &mut R, range: &RangeInclusive<T>) -> T
where
    T: SampleUniform + PartialOrd + Copy,
    R: Rng + ?Sized,
{
    rng.gen_range(*range.start()..=*range.end())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_int_in_range() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let value = int_in_range(&mut rng, &(60u32..=180));
            assert!((60..=180).contains(&value));
        }
    }

    #[test]
    fn test_int_in_range_single_value() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(int_in_range(&mut rng, &(1900i32..=1900)), 1900);
    }

    #[test]
    fn test_int_in_range_hits_both_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let values: Vec<u64> = (0..500).map(|_| int_in_range(&mut rng, &(0u64..=3))).collect();

        assert!(values.contains(&0));
        assert!(values.contains(&3));
    }
}
