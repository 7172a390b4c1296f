//! Values that are blank part of the time.

use super::numeric::int_in_range;
use rand::Rng;
use std::ops::RangeInclusive;

/// Return `""` with probability `blank_probability`, otherwise a decimal
/// integer drawn from `range`.
pub fn blank_or_int<R: Rng + ?Sized>(
    rng: &mut R,
    blank_probability: f64,
    range: &RangeInclusive<u32>,
) -> String {
    if rng.gen_bool(blank_probability) {
        String::new()
    } else {
        int_in_range(rng, range).to_string()
    }
}
