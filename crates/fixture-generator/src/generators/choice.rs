//! Uniform selection from a fixed domain.

use rand::seq::SliceRandom;
use rand::Rng;

/// Pick one value uniformly from `domain`.
///
/// An empty domain yields an empty string.
pub fn pick_one<R: Rng + ?Sized>(rng: &mut R, domain: &'static [&'static str]) -> &'static str {
    domain.choose(rng).copied().unwrap_or_default()
}
