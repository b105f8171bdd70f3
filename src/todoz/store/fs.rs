use super::{DataStore, StoredDocument};
use crate::error::Result;
use crate::model::Collection;
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DATA_FILENAME: &str = "todos.json";

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn data_file(&self) -> PathBuf {
        self.root.join(DATA_FILENAME)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root)?;
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<Collection> {
        let path = self.data_file();
        if !path.exists() {
            debug!(path = %path.display(), "no data file, starting empty");
            return Ok(Collection::new());
        }
        let content = fs::read_to_string(&path)?;
        let doc: StoredDocument = serde_json::from_str(&content)?;
        let collection = doc.into_collection()?;
        debug!(path = %path.display(), items = collection.len(), "loaded todos");
        Ok(collection)
    }

    fn save(&mut self, collection: &Collection) -> Result<()> {
        self.ensure_dir()?;
        let doc = StoredDocument::from_collection(collection, Utc::now());
        let content = serde_json::to_string_pretty(&doc)?;
        fs::write(self.data_file(), content)?;
        debug!(items = collection.len(), "saved todos");
        Ok(())
    }
}
