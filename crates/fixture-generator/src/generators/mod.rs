//! Individual field value generators.
//!
//! Every generator is a plain function over a caller-supplied RNG. None of
//! them can fail; the only side effect is consuming entropy.

pub mod choice;
pub mod numeric;
pub mod optional;
pub mod text;

pub use choice::pick_one;
pub use numeric::int_in_range;
pub use optional::blank_or_int;
pub use text::{full_name, joined_words, sentence, word};
