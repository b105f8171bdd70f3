use super::DataStore;
use crate::error::{Result, TodozError};
use crate::model::Collection;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    saved: Collection,
    saves: usize,
    fail_load: bool,
    fail_save: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_collection(collection: Collection) -> Self {
        Self {
            saved: collection,
            ..Self::default()
        }
    }

    pub fn saved(&self) -> &Collection {
        &self.saved
    }

    /// Number of successful saves so far.
    pub fn saves(&self) -> usize {
        self.saves
    }

    pub fn fail_load(&mut self, fail: bool) {
        self.fail_load = fail;
    }

    pub fn fail_save(&mut self, fail: bool) {
        self.fail_save = fail;
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<Collection> {
        if self.fail_load {
            return Err(TodozError::Store("Storage load failed".to_string()));
        }
        Ok(self.saved.clone())
    }

    fn save(&mut self, collection: &Collection) -> Result<()> {
        if self.fail_save {
            return Err(TodozError::Store("Storage save failed".to_string()));
        }
        self.saved = collection.clone();
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::lifecycle::{self, ItemPatch};

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_todos(mut self, count: usize) -> Self {
            for i in 0..count {
                let item = lifecycle::create(&format!("Test todo {}", i + 1));
                self.push(item);
            }
            self
        }

        pub fn with_active(mut self, title: &str) -> Self {
            self.push(lifecycle::create(title));
            self
        }

        pub fn with_completed(mut self, title: &str) -> Self {
            let item = lifecycle::create(title);
            let id = item.id.clone();
            self.push(item);
            self.store.saved =
                lifecycle::update(&self.store.saved, &id, &ItemPatch::completed(true));
            self
        }

        fn push(&mut self, item: crate::model::Item) {
            self.store.saved = lifecycle::append(&self.store.saved, item)
                .expect("fixture ids are fresh");
        }
    }
}
