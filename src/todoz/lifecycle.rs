//! Item lifecycle: create, update, remove.
//!
//! These are pure transforms. None of them touch their input collection or
//! input item; each returns a successor value. Unchanged items are carried
//! over by `Arc`, so `Arc::ptr_eq` holds between predecessor and successor
//! for everything the call did not modify.
//!
//! Title rules are NOT enforced here. Callers run
//! [`crate::validation::validate_title`] first.

use std::sync::Arc;

use crate::clock::{Clock, SystemClock};
use crate::error::{Result, TodozError};
use crate::id::generate_id;
use crate::model::{Collection, Item};
use crate::validation::trim_title;

/// Fields an update may change. `None` leaves the field as it is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemPatch {
    pub title: Option<String>,
    pub completed: Option<bool>,
}

impl ItemPatch {
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn completed(completed: bool) -> Self {
        Self {
            completed: Some(completed),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.completed.is_none()
    }
}

pub fn create(title: &str) -> Item {
    create_with(title, &SystemClock)
}

pub fn create_with(title: &str, clock: &dyn Clock) -> Item {
    let now = clock.now();
    Item {
        id: generate_id(),
        title: trim_title(title).to_string(),
        completed: false,
        created_at: now,
        updated_at: now,
    }
}

/// Successor with `item` appended at the end.
pub fn append(collection: &Collection, item: Item) -> Result<Collection> {
    if collection.contains(&item.id) {
        return Err(TodozError::DuplicateId(item.id));
    }
    let mut items: Vec<Arc<Item>> = collection.shared().cloned().collect();
    items.push(Arc::new(item));
    Ok(Collection::from_shared(items))
}

pub fn update(collection: &Collection, id: &str, patch: &ItemPatch) -> Collection {
    update_with(collection, id, patch, &SystemClock)
}

/// Apply `patch` to the item with `id` and refresh its `updated_at`.
///
/// The refresh happens even for an empty patch. An unknown id yields a
/// content-equal successor. `updated_at` never goes below `created_at`, even
/// if the clock has stepped backwards since creation.
pub fn update_with(
    collection: &Collection,
    id: &str,
    patch: &ItemPatch,
    clock: &dyn Clock,
) -> Collection {
    let items = collection
        .shared()
        .map(|item| {
            if item.id != id {
                return Arc::clone(item);
            }
            let mut next = Item::clone(item);
            if let Some(title) = &patch.title {
                next.title = title.clone();
            }
            if let Some(completed) = patch.completed {
                next.completed = completed;
            }
            next.updated_at = clock.now().max(next.created_at);
            Arc::new(next)
        })
        .collect();
    Collection::from_shared(items)
}

pub fn remove(collection: &Collection, id: &str) -> Collection {
    let items = collection
        .shared()
        .filter(|item| item.id != id)
        .cloned()
        .collect();
    Collection::from_shared(items)
}
