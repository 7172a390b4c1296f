//! Title and credit record shapes.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A flat record that can be written as one CSV row.
///
/// `HEADERS` must list the serialized field names in declaration order, so a
/// header row can be written even when there are no records to serialize.
pub trait FixtureRecord: Serialize + DeserializeOwned {
    /// Short name used in logs and default file names (`titles`, `credits`).
    const KIND: &'static str;

    /// Column names in declaration order.
    const HEADERS: &'static [&'static str];

    /// Zero-based position of this record in its batch.
    fn id(&self) -> u64;
}

/// A film or show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Title {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub release_year: i32,
    pub age_certification: String,
    pub runtime: u32,
    /// One to three words joined with `", "`.
    pub genres: String,
    pub production_country: String,
    /// Empty for films, otherwise a season count.
    pub seasons: String,
}

impl FixtureRecord for Title {
    const KIND: &'static str = "titles";
    const HEADERS: &'static [&'static str] = &[
        "Id",
        "Name",
        "Description",
        "ReleaseYear",
        "AgeCertification",
        "Runtime",
        "Genres",
        "ProductionCountry",
        "Seasons",
    ];

    fn id(&self) -> u64 {
        self.id
    }
}

/// A person credited on a title.
///
/// `title_id` is drawn independently and may not match any generated title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Credit {
    pub id: u64,
    pub title_id: u64,
    pub real_name: String,
    pub character_name: String,
    pub role: String,
}

impl FixtureRecord for Credit {
    const KIND: &'static str = "credits";
    const HEADERS: &'static [&'static str] = &["Id", "TitleId", "RealName", "CharacterName", "Role"];

    fn id(&self) -> u64 {
        self.id
    }
}
