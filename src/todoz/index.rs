//! # Display Indexes
//!
//! Item ids are opaque strings that nobody wants to type. Listings number
//! items `1, 2, 3…` by their position in the collection, and commands accept
//! either that number or a full id.
//!
//! Indexes come from the position in the *whole* collection, not in the
//! filtered view, so `todoz list --active` and `todoz list` agree on what `3`
//! means.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, TodozError};
use crate::model::{Collection, Item, ItemFilter};

/// A user input naming one item.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ItemSelector {
    /// 1-based display index.
    Index(usize),
    Id(String),
}

impl fmt::Display for ItemSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemSelector::Index(i) => write!(f, "{}", i),
            ItemSelector::Id(id) => write!(f, "{}", id),
        }
    }
}

impl FromStr for ItemSelector {
    type Err = TodozError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(TodozError::Api("Empty selector".to_string()));
        }
        match s.parse::<usize>() {
            Ok(0) => Err(TodozError::Api(
                "Indexes start at 1, got 0".to_string(),
            )),
            Ok(n) => Ok(ItemSelector::Index(n)),
            Err(_) => Ok(ItemSelector::Id(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    pub item: Item,
    pub index: usize,
}

/// Number the items of `collection` and keep those `filter` lets through.
pub fn index_items(collection: &Collection, filter: ItemFilter) -> Vec<DisplayItem> {
    collection
        .iter()
        .enumerate()
        .filter(|(_, item)| filter.matches(item))
        .map(|(pos, item)| DisplayItem {
            item: item.clone(),
            index: pos + 1,
        })
        .collect()
}

/// Find the item a selector names.
pub fn resolve(collection: &Collection, selector: &ItemSelector) -> Result<DisplayItem> {
    let found = match selector {
        ItemSelector::Index(n) => n
            .checked_sub(1)
            .and_then(|pos| collection.at(pos))
            .map(|item| (item, *n)),
        ItemSelector::Id(id) => collection
            .position(id)
            .and_then(|pos| collection.at(pos).map(|item| (item, pos + 1))),
    };
    found
        .map(|(item, index)| DisplayItem {
            item: item.clone(),
            index,
        })
        .ok_or_else(|| TodozError::ItemNotFound(selector.to_string()))
}

/// Resolve several selectors, dropping repeats of the same item.
pub fn resolve_all(
    collection: &Collection,
    selectors: &[ItemSelector],
) -> Result<Vec<DisplayItem>> {
    let mut resolved: Vec<DisplayItem> = Vec::with_capacity(selectors.len());
    for selector in selectors {
        let dp = resolve(collection, selector)?;
        if !resolved.iter().any(|r| r.item.id == dp.item.id) {
            resolved.push(dp);
        }
    }
    Ok(resolved)
}

pub fn parse_selectors<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<ItemSelector>> {
    inputs.iter().map(|s| s.as_ref().parse()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::{self, ItemPatch};

    fn collection() -> Collection {
        let mut c = Collection::new();
        for title in ["a", "b", "c"] {
            c = lifecycle::append(&c, lifecycle::create(title)).unwrap();
        }
        let b = c.at(1).unwrap().id.clone();
        lifecycle::update(&c, &b, &ItemPatch::completed(true))
    }

    #[test]
    fn parses_indexes_and_ids() {
        assert_eq!("3".parse::<ItemSelector>().unwrap(), ItemSelector::Index(3));
        assert_eq!(
            "m5zq1a".parse::<ItemSelector>().unwrap(),
            ItemSelector::Id("m5zq1a".into())
        );
        assert!("0".parse::<ItemSelector>().is_err());
        assert!("  ".parse::<ItemSelector>().is_err());
    }

    #[test]
    fn filtered_listing_keeps_global_indexes() {
        let c = collection();
        let active: Vec<_> = index_items(&c, ItemFilter::Active)
            .into_iter()
            .map(|d| (d.index, d.item.title))
            .collect();
        assert_eq!(active, vec![(1, "a".to_string()), (3, "c".to_string())]);

        let done = index_items(&c, ItemFilter::Completed);
        assert_eq!(done.len(), 1);
        assert_eq!(done[0].index, 2);
    }

    #[test]
    fn resolves_by_index_and_id() {
        let c = collection();
        let by_index = resolve(&c, &ItemSelector::Index(2)).unwrap();
        assert_eq!(by_index.item.title, "b");

        let id = c.at(2).unwrap().id.clone();
        let by_id = resolve(&c, &ItemSelector::Id(id)).unwrap();
        assert_eq!(by_id.index, 3);
        assert_eq!(by_id.item.title, "c");
    }

    #[test]
    fn unknown_selector_is_not_found() {
        let c = collection();
        assert!(matches!(
            resolve(&c, &ItemSelector::Index(9)),
            Err(TodozError::ItemNotFound(s)) if s == "9"
        ));
        assert!(matches!(
            resolve(&c, &ItemSelector::Id("zzz".into())),
            Err(TodozError::ItemNotFound(_))
        ));
    }

    #[test]
    fn resolve_all_dedupes() {
        let c = collection();
        let id = c.at(0).unwrap().id.clone();
        let got = resolve_all(&c, &[ItemSelector::Index(1), ItemSelector::Id(id)]).unwrap();
        assert_eq!(got.len(), 1);
    }
}
