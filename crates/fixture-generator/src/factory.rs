//! Record factories: one generator per field, built once and reused for every
//! record in a batch.

use crate::generators::{
    blank_or_int, full_name, int_in_range, joined_words, pick_one, sentence, word,
};
use chrono::Datelike;
use fixture_core::domains::{AGE_CERTIFICATIONS, COUNTRY_CODES, ROLES};
use fixture_core::{Credit, FixtureRecord, Title};
use rand::Rng;
use std::ops::RangeInclusive;

/// Builds one record from an RNG and its batch index.
pub trait RecordFactory {
    /// The record type this factory produces.
    type Record: FixtureRecord;

    /// Build the record at `index`.
    fn make<R: Rng + ?Sized>(&self, rng: &mut R, index: u64) -> Self::Record;
}

/// Earliest release year a title can have.
pub const FIRST_RELEASE_YEAR: i32 = 1900;

/// Field rules for [`Title`].
#[derive(Debug, Clone)]
pub struct TitleFactory {
    pub release_year: RangeInclusive<i32>,
    pub runtime: RangeInclusive<u32>,
    pub genre_count: RangeInclusive<usize>,
    pub genre_separator: &'static str,
    pub seasons: RangeInclusive<u32>,
    /// Probability that `seasons` is left blank.
    pub seasons_blank_probability: f64,
    pub age_certifications: &'static [&'static str],
    pub countries: &'static [&'static str],
}

impl TitleFactory {
    /// Rules with the release year capped at the current local year.
    pub fn new() -> Self {
        Self::with_current_year(chrono::Local::now().year())
    }

    /// Rules with the release year capped at `current_year`.
    pub fn with_current_year(current_year: i32) -> Self {
        Self {
            release_year: FIRST_RELEASE_YEAR..=current_year,
            runtime: 60..=180,
            genre_count: 1..=3,
            genre_separator: ", ",
            seasons: 1..=10,
            seasons_blank_probability: 0.5,
            age_certifications: AGE_CERTIFICATIONS,
            countries: COUNTRY_CODES,
        }
    }
}

impl Default for TitleFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordFactory for TitleFactory {
    type Record = Title;

    fn make<R: Rng + ?Sized>(&self, rng: &mut R, index: u64) -> Title {
        Title {
            id: index,
            name: word(rng),
            description: sentence(rng),
            release_year: int_in_range(rng, &self.release_year),
            age_certification: pick_one(rng, self.age_certifications).to_string(),
            runtime: int_in_range(rng, &self.runtime),
            genres: joined_words(rng, &self.genre_count, self.genre_separator),
            production_country: pick_one(rng, self.countries).to_string(),
            seasons: blank_or_int(rng, self.seasons_blank_probability, &self.seasons),
        }
    }
}

/// Field rules for [`Credit`].
#[derive(Debug, Clone)]
pub struct CreditFactory {
    /// Range `title_id` is drawn from. Not tied to any generated titles.
    pub title_id: RangeInclusive<u64>,
    pub roles: &'static [&'static str],
}

impl CreditFactory {
    pub fn new() -> Self {
        Self {
            title_id: 0..=99,
            roles: ROLES,
        }
    }
}

impl Default for CreditFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordFactory for CreditFactory {
    type Record = Credit;

    fn make<R: Rng + ?Sized>(&self, rng: &mut R, index: u64) -> Credit {
        Credit {
            id: index,
            title_id: int_in_range(rng, &self.title_id),
            real_name: full_name(rng),
            character_name: word(rng),
            role: pick_one(rng, self.roles).to_string(),
        }
    }
}
