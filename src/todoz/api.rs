//! # API Facade
//!
//! [`TodozApi`] is the state coordinator. It owns the current [`Collection`],
//! turns user intents into command calls, swaps in the successor collection,
//! and pushes it to the [`DataStore`].
//!
//! ## Persistence Errors
//!
//! Storage trouble is never fatal here:
//! - A failed load leaves the API running on an empty collection and sets
//!   [`TodozApi::error`] to [`LOAD_FAILED`]. The stored data is left alone.
//! - A failed save keeps the new in-memory collection, sets the flag to
//!   [`SAVE_FAILED`], and adds an error message to the command result.
//! - The next successful save clears the flag.
//!
//! Validation errors and unknown selectors, on the other hand, come back as
//! `Err` and leave the collection exactly as it was.
//!
//! ## Generic Over DataStore and Clock
//!
//! - Production: `TodozApi<FileStore>`
//! - Testing: `TodozApi<InMemoryStore, FixedClock>`

use tracing::{debug, info, warn};

use crate::clock::{Clock, SystemClock};
use crate::commands::{self, Transition};
use crate::error::Result;
use crate::export::{DownloadSink, ExportOptions, ExportState, Exporter};
use crate::index::{parse_selectors, ItemSelector};
use crate::model::{Collection, ItemFilter};
use crate::store::DataStore;

pub const LOAD_FAILED: &str = "Failed to load todos";
pub const SAVE_FAILED: &str = "Failed to save todos";

pub struct TodozApi<S: DataStore, C: Clock = SystemClock> {
    store: S,
    clock: C,
    todos: Collection,
    error: Option<&'static str>,
    exporter: Exporter,
}

impl<S: DataStore> TodozApi<S> {
    pub fn new(store: S) -> Self {
        Self::with_clock(store, SystemClock)
    }
}

impl<S: DataStore, C: Clock> TodozApi<S, C> {
    pub fn with_clock(store: S, clock: C) -> Self {
        let (todos, error) = match store.load() {
            Ok(todos) => {
                debug!(items = todos.len(), "todos loaded");
                (todos, None)
            }
            Err(e) => {
                warn!(error = %e, "loading todos failed");
                (Collection::new(), Some(LOAD_FAILED))
            }
        };
        Self {
            store,
            clock,
            todos,
            error,
            exporter: Exporter::new(),
        }
    }

    pub fn todos(&self) -> &Collection {
        &self.todos
    }

    /// The standing persistence error, if any.
    pub fn error(&self) -> Option<&'static str> {
        self.error
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn export_state(&self) -> &ExportState {
        self.exporter.state()
    }

    pub fn add_todo(&mut self, title: &str) -> Result<CmdResult> {
        let transition = commands::add::run(&self.todos, title, &self.clock)?;
        Ok(self.commit(transition))
    }

    pub fn toggle_todos<I: AsRef<str>>(&mut self, selectors: &[I]) -> Result<CmdResult> {
        let selectors = parse_selectors(selectors)?;
        let transition = commands::toggle::run(&self.todos, &selectors, &self.clock)?;
        Ok(self.commit(transition))
    }

    pub fn update_todo(&mut self, selector: &str, title: &str) -> Result<CmdResult> {
        let selector: ItemSelector = selector.parse()?;
        let transition = commands::edit::run(&self.todos, &selector, title, &self.clock)?;
        Ok(self.commit(transition))
    }

    pub fn delete_todos<I: AsRef<str>>(&mut self, selectors: &[I]) -> Result<CmdResult> {
        let selectors = parse_selectors(selectors)?;
        let transition = commands::delete::run(&self.todos, &selectors)?;
        Ok(self.commit(transition))
    }

    pub fn list_todos(&self, filter: ItemFilter) -> CmdResult {
        commands::list::run(&self.todos, filter)
    }

    pub fn stats(&self) -> CmdResult {
        commands::stats::run(&self.todos)
    }

    /// Export the current collection as CSV. `on_complete` runs once, and
    /// only if the sink accepted the file.
    pub fn export_csv<D: DownloadSink + ?Sized>(
        &mut self,
        sink: &mut D,
        on_complete: Option<Box<dyn FnOnce() + '_>>,
    ) -> CmdResult {
        let options = ExportOptions {
            clock: Some(&self.clock),
            on_complete,
        };
        commands::export::run(&self.todos, &mut self.exporter, sink, options)
    }

    /// Swap in the successor and persist it. Unchanged collections are not
    /// written.
    fn commit(&mut self, transition: Transition) -> CmdResult {
        let Transition { next, mut result } = transition;
        if next == self.todos {
            return result;
        }
        self.todos = next;

        match self.store.save(&self.todos) {
            Ok(()) => {
                info!(items = self.todos.len(), "todos saved");
                self.error = None;
            }
            Err(e) => {
                warn!(error = %e, "saving todos failed");
                self.error = Some(SAVE_FAILED);
                result.add_message(CmdMessage::error(SAVE_FAILED));
            }
        }
        result
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
