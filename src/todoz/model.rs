use std::collections::HashSet;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::error::{Result, TodozError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: String,
    pub title: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Ordered set of items. Insertion order is display and export order.
///
/// A collection is never edited in place: every mutation in
/// [`crate::lifecycle`] builds a successor. Items are held behind `Arc`, so a
/// successor shares every item it did not touch with its predecessor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collection {
    items: Vec<Arc<Item>>,
}

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a collection, rejecting duplicate ids.
    pub fn try_from_items(items: Vec<Item>) -> Result<Self> {
        Self::try_from_shared(items.into_iter().map(Arc::new).collect())
    }

    pub(crate) fn try_from_shared(items: Vec<Arc<Item>>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id.as_str()) {
                return Err(TodozError::DuplicateId(item.id.clone()));
            }
        }
        Ok(Self { items })
    }

    /// Caller guarantees id uniqueness.
    pub(crate) fn from_shared(items: Vec<Arc<Item>>) -> Self {
        Self { items }
    }

    pub(crate) fn shared(&self) -> impl Iterator<Item = &Arc<Item>> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter().map(|item| item.as_ref())
    }

    pub fn get(&self, id: &str) -> Option<&Item> {
        self.entry(id).map(|item| item.as_ref())
    }

    /// The shared handle for an item; lets callers check structural sharing.
    pub fn entry(&self, id: &str) -> Option<&Arc<Item>> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entry(id).is_some()
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    /// Item at a zero-based position.
    pub fn at(&self, position: usize) -> Option<&Item> {
        self.items.get(position).map(|item| item.as_ref())
    }

    pub fn stats(&self) -> Stats {
        let total = self.items.len();
        let completed = self.items.iter().filter(|item| item.completed).count();
        Stats {
            total,
            active: total - completed,
            completed,
        }
    }
}

/// Which items a listing shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ItemFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl ItemFilter {
    pub fn matches(&self, item: &Item) -> bool {
        match self {
            ItemFilter::All => true,
            ItemFilter::Active => !item.completed,
            ItemFilter::Completed => item.completed,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
}
