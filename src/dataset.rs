//! The in-memory dataset and the query used to filter it.

use crate::entity::{Entity, EntityRecord};
use chrono::NaiveDate;
use std::sync::Arc;

/// The current normalized contents of the search input.
///
/// Only lowercased. The query is never trimmed or tokenized, so `"lu "`
/// matches "Lu Xun" but not "Luna".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query(String);

impl Query {
    pub fn new(raw: &str) -> Self {
        Self(raw.to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether `entity` belongs in the results for this query.
    pub fn matches(&self, entity: &Entity) -> bool {
        self.is_empty() || entity.name_contains(&self.0)
    }
}

/// An ordered sequence of entities, replaced wholesale on every load.
///
/// Cloning is cheap; clones share the same entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    entities: Arc<[Entity]>,
}

impl Dataset {
    pub fn new(entities: Vec<Entity>) -> Self {
        Self {
            entities: entities.into(),
        }
    }

    /// Converts every record, keeping the endpoint's order.
    pub fn from_records(records: Vec<EntityRecord>, today: NaiveDate) -> Self {
        Self::new(records.into_iter().map(|r| r.into_entity(today)).collect())
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Entities whose lowercased name contains the query, in dataset order.
    ///
    /// An empty query yields the whole dataset.
    pub fn filter(&self, query: &Query) -> Vec<&Entity> {
        self.entities.iter().filter(|e| query.matches(e)).collect()
    }
}
