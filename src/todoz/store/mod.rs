//! # Storage Layer
//!
//! The persistence adapter is the [`DataStore`] trait: load the whole
//! collection, save the whole collection. There is no per-item API because the
//! coordinator only ever replaces the collection wholesale.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: JSON document on disk (`todos.json`)
//! - [`memory::InMemoryStore`]: for tests, with failure injection
//!
//! ## Stored Form
//!
//! ```json
//! {
//!   "todos": [
//!     {
//!       "id": "m5z…",
//!       "title": "買い物に行く",
//!       "completed": false,
//!       "createdAt": "2025-01-28T10:00:00.000Z",
//!       "updatedAt": "2025-01-28T10:00:00.000Z"
//!     }
//!   ],
//!   "lastUpdated": "2025-01-28T10:00:00.000Z"
//! }
//! ```
//!
//! Timestamps are kept as text in the stored form and converted explicitly on
//! load ([`StoredItem`] → [`Item`]). The conversion re-checks everything an
//! in-memory item guarantees: a valid title, parseable timestamps,
//! `updatedAt >= createdAt`, and unique ids. Anything else is reported as
//! [`TodozError::CorruptData`] instead of being let through.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, TodozError};
use crate::model::{Collection, Item};
use crate::validation::validate_title;

pub mod fs;
pub mod memory;

pub trait DataStore {
    /// Read the stored collection. A store with nothing in it yields an
    /// empty collection, not an error.
    fn load(&self) -> Result<Collection>;

    /// Replace the stored collection.
    fn save(&mut self, collection: &Collection) -> Result<()>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredItem {
    pub id: String,
    pub title: String,
    pub completed: bool,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredDocument {
    pub todos: Vec<StoredItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
}

impl StoredDocument {
    pub fn from_collection(collection: &Collection, saved_at: DateTime<Utc>) -> Self {
        Self {
            todos: collection.iter().map(StoredItem::from).collect(),
            last_updated: Some(format_stored_timestamp(&saved_at)),
        }
    }

    pub fn into_collection(self) -> Result<Collection> {
        let items = self
            .todos
            .into_iter()
            .map(Item::try_from)
            .collect::<Result<Vec<_>>>()?;
        Collection::try_from_items(items)
    }
}

impl From<&Item> for StoredItem {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id.clone(),
            title: item.title.clone(),
            completed: item.completed,
            created_at: format_stored_timestamp(&item.created_at),
            updated_at: format_stored_timestamp(&item.updated_at),
        }
    }
}

impl TryFrom<StoredItem> for Item {
    type Error = TodozError;

    fn try_from(stored: StoredItem) -> Result<Self> {
        if stored.id.trim().is_empty() {
            return Err(TodozError::CorruptData {
                field: "id",
                reason: "empty id".to_string(),
            });
        }
        if let Some(err) = validate_title(&stored.title).error() {
            return Err(TodozError::CorruptData {
                field: "title",
                reason: format!("{} ({})", err, stored.id),
            });
        }
        let created_at = parse_stored_timestamp("createdAt", &stored.created_at)?;
        let updated_at = parse_stored_timestamp("updatedAt", &stored.updated_at)?;
        if updated_at < created_at {
            return Err(TodozError::CorruptData {
                field: "updatedAt",
                reason: format!("precedes createdAt ({})", stored.id),
            });
        }

        Ok(Item {
            id: stored.id,
            title: stored.title,
            completed: stored.completed,
            created_at,
            updated_at,
        })
    }
}

/// RFC 3339 in UTC with milliseconds, e.g. `2025-01-28T10:00:00.000Z`.
pub fn format_stored_timestamp(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn parse_stored_timestamp(field: &'static str, raw: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| TodozError::CorruptData {
            field,
            reason: format!("{:?}: {}", raw, e),
        })
}
