//! # Command Layer
//!
//! Each user intent lives in its own submodule as a plain function over a
//! [`Collection`]. Mutating commands take the current collection and return
//! the successor alongside a [`CmdResult`]; they never save anything. Saving
//! the successor is the coordinator's job ([`crate::api::TodozApi`]).
//!
//! ## What Commands Do NOT Do
//!
//! - **Any I/O** beyond what they are handed (the export sink, the config dir)
//! - **Printing**: messages come back as [`CmdMessage`] values
//! - **Exit codes**: return `Result`, let the caller decide
//!
//! ## Command Modules
//!
//! - [`add`]: Validate a title and append a new todo
//! - [`list`]: Numbered listing, optionally filtered
//! - [`toggle`]: Flip completion
//! - [`edit`]: Validate and retitle
//! - [`delete`]: Remove todos
//! - [`stats`]: Total / active / completed counts
//! - [`export`]: CSV export through a download sink
//! - [`config`]: Show or change configuration

use crate::config::TodozConfig;
use crate::index::DisplayItem;
use crate::model::{Collection, Stats};
use std::path::PathBuf;

pub mod add;
pub mod config;
pub mod delete;
pub mod edit;
pub mod export;
pub mod list;
pub mod stats;
pub mod toggle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_items: Vec<DisplayItem>,
    pub listed_items: Vec<DisplayItem>,
    pub paths: Vec<PathBuf>,
    pub messages: Vec<CmdMessage>,
    pub stats: Option<Stats>,
    pub config: Option<TodozConfig>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_items(mut self, items: Vec<DisplayItem>) -> Self {
        self.listed_items = items;
        self
    }

    pub fn with_stats(mut self, stats: Stats) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn with_config(mut self, config: TodozConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }
}

/// What a mutating command hands back: the successor collection and the
/// report. `next` equal to the input means nothing changed.
#[derive(Debug)]
pub struct Transition {
    pub next: Collection,
    pub result: CmdResult,
}

impl Transition {
    pub fn new(next: Collection, result: CmdResult) -> Self {
        Self { next, result }
    }
}
