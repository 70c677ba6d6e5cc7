//! Searchable entities and their wire representation.
//!
//! The data endpoint serves a JSON array of [`EntityRecord`]s. Each record is
//! turned into an [`Entity`] once, at load time, so filtering and rendering
//! never deal with missing or ill-typed fields.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Age shown for a record with no `age` and no usable `birthdate`.
pub const UNKNOWN_AGE: &str = "âge inconnu";

/// A JSON scalar that may arrive either as a string or as a number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Text(String),
    Number(serde_json::Number),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Number(number) => write!(f, "{}", number),
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<u64> for Scalar {
    fn from(value: u64) -> Self {
        Self::Number(value.into())
    }
}

/// One element of the endpoint's response body.
///
/// Unknown fields (the endpoint also sends `status`) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRecord {
    pub id: Scalar,
    pub name: String,
    #[serde(default)]
    pub age: Option<Scalar>,
    /// ISO date (`YYYY-MM-DD`), used when `age` is absent.
    #[serde(default)]
    pub birthdate: Option<String>,
    #[serde(default)]
    pub photo: Option<String>,
}

impl EntityRecord {
    /// Converts the record, deriving the age label from `birthdate` when the
    /// endpoint did not send one.
    ///
    /// Never fails: without an age or a parsable birthdate the entity gets
    /// [`UNKNOWN_AGE`].
    pub fn into_entity(self, today: NaiveDate) -> Entity {
        let id = self.id.to_string();

        let age = match (self.age, self.birthdate) {
            (Some(age), _) => age.to_string(),
            (None, Some(raw)) => match NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d") {
                Ok(born) => age_label(born, today),
                Err(e) => {
                    tracing::warn!("Entity {} has an invalid birthdate '{}': {}", id, raw, e);
                    UNKNOWN_AGE.to_string()
                }
            },
            (None, None) => {
                tracing::debug!("Entity {} has no age or birthdate", id);
                UNKNOWN_AGE.to_string()
            }
        };

        Entity::new(id, self.name, age, self.photo)
    }
}

/// A validated, displayable entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    id: String,
    name: String,
    /// `name` lowercased once so keystrokes don't re-fold every entry.
    folded_name: String,
    age: String,
    photo: Option<String>,
}

impl Entity {
    /// Build an entity directly. An empty `photo` counts as no photo.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        age: impl Into<String>,
        photo: Option<String>,
    ) -> Self {
        let name = name.into();
        Self {
            id: id.into(),
            folded_name: name.to_lowercase(),
            name,
            age: age.into(),
            photo: photo.filter(|p| !p.trim().is_empty()),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> &str {
        &self.age
    }

    pub fn photo(&self) -> Option<&str> {
        self.photo.as_deref()
    }

    /// Case-insensitive substring match against the name only.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn name_contains(&self, needle: &str) -> bool {
        self.folded_name.contains(needle)
    }
}

/// French age label for an animal born on `born`, as of `today`.
#[allow(clippy::cast_possible_wrap)]
pub fn age_label(born: NaiveDate, today: NaiveDate) -> String {
    let mut months = (today.year() - born.year()) * 12 + today.month() as i32 - born.month() as i32;
    if today.day() < born.day() {
        months -= 1;
    }

    match months {
        m if m >= 24 => format!("{} ans", m / 12),
        12..=23 => "1 an".to_string(),
        m if m >= 1 => format!("{} mois", m),
        _ => "moins d'un mois".to_string(),
    }
}
