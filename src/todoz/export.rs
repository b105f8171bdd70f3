//! # Export Trigger
//!
//! Runs the CSV codec over a collection and hands the document to a
//! [`DownloadSink`], the boundary that actually presents a file to the user.
//!
//! Failures never escape this module as errors. Whatever goes wrong, the
//! caller gets [`ExportOutcome::Failed`] carrying [`EXPORT_FAILED_MESSAGE`],
//! and the exporter's state moves to [`ExportState::Failed`] until the next
//! attempt starts.
//!
//! ```text
//! Idle ──export──▶ Exporting ──ok──▶ Idle
//!                      └──────err──▶ Failed(msg) ──export──▶ Exporting …
//! ```
//!
//! The optional completion callback in [`ExportOptions`] runs exactly once
//! on success and never on failure. Overlapping runs are the caller's
//! problem; `&mut self` on [`Exporter::export`] already rules them out.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::clock::{Clock, SystemClock};
use crate::csv::{generate_filename_with, to_csv};
use crate::error::{Result, TodozError};
use crate::model::Collection;

pub const EXPORT_FAILED_MESSAGE: &str = "CSV出力に失敗しました。もう一度お試しください。";

/// Byte-order mark spreadsheet importers use to detect UTF-8.
pub const UTF8_BOM: &str = "\u{FEFF}";

/// Host download mechanism.
pub trait DownloadSink {
    fn deliver(&mut self, content: &str, filename: &str) -> Result<Delivery>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    pub filename: String,
    /// Where the file ended up, for sinks that have a location.
    pub location: Option<PathBuf>,
    pub bytes: usize,
}

/// Writes the document into a directory, BOM first by default.
#[derive(Debug, Clone)]
pub struct FileDownload {
    dir: PathBuf,
    write_bom: bool,
}

impl FileDownload {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            write_bom: true,
        }
    }

    pub fn with_bom(mut self, write_bom: bool) -> Self {
        self.write_bom = write_bom;
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl DownloadSink for FileDownload {
    fn deliver(&mut self, content: &str, filename: &str) -> Result<Delivery> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir)?;
        }
        let path = self.dir.join(filename);
        let mut payload = String::with_capacity(UTF8_BOM.len() + content.len());
        if self.write_bom {
            payload.push_str(UTF8_BOM);
        }
        payload.push_str(content);
        fs::write(&path, payload.as_bytes())?;

        Ok(Delivery {
            filename: filename.to_string(),
            location: Some(path),
            bytes: payload.len(),
        })
    }
}

/// Keeps deliveries in memory. Can be told to fail.
#[derive(Debug, Default)]
pub struct MemoryDownload {
    pub deliveries: Vec<(String, String)>,
    fail_with: Option<String>,
}

impl MemoryDownload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            deliveries: Vec::new(),
            fail_with: Some(reason.into()),
        }
    }

    pub fn set_failure(&mut self, reason: Option<String>) {
        self.fail_with = reason;
    }
}

impl DownloadSink for MemoryDownload {
    fn deliver(&mut self, content: &str, filename: &str) -> Result<Delivery> {
        if let Some(reason) = &self.fail_with {
            return Err(TodozError::Export(reason.clone()));
        }
        self.deliveries
            .push((filename.to_string(), content.to_string()));
        Ok(Delivery {
            filename: filename.to_string(),
            location: None,
            bytes: content.len(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ExportState {
    #[default]
    Idle,
    Exporting,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Delivered(Delivery),
    Failed {
        /// Always [`EXPORT_FAILED_MESSAGE`].
        message: &'static str,
        cause: String,
    },
}

impl ExportOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, ExportOutcome::Delivered(_))
    }
}

#[derive(Default)]
pub struct ExportOptions<'a> {
    /// Source of the date in the filename. Defaults to the wall clock.
    pub clock: Option<&'a dyn Clock>,
    /// Invoked once after a successful delivery.
    pub on_complete: Option<Box<dyn FnOnce() + 'a>>,
}

impl<'a> ExportOptions<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_clock(mut self, clock: &'a dyn Clock) -> Self {
        self.clock = Some(clock);
        self
    }

    pub fn on_complete(mut self, callback: impl FnOnce() + 'a) -> Self {
        self.on_complete = Some(Box::new(callback));
        self
    }
}

#[derive(Debug, Default)]
pub struct Exporter {
    state: ExportState,
}

impl Exporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ExportState {
        &self.state
    }

    /// The user-facing error from the last run, if it failed.
    pub fn error(&self) -> Option<&str> {
        match &self.state {
            ExportState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn export<D: DownloadSink + ?Sized>(
        &mut self,
        collection: &Collection,
        sink: &mut D,
        options: ExportOptions<'_>,
    ) -> ExportOutcome {
        self.state = ExportState::Exporting;
        let clock: &dyn Clock = match options.clock {
            Some(clock) => clock,
            None => &SystemClock,
        };

        let content = to_csv(collection);
        let filename = generate_filename_with(clock);
        debug!(
            items = collection.len(),
            bytes = content.len(),
            %filename,
            "generated csv"
        );

        match sink.deliver(&content, &filename) {
            Ok(delivery) => {
                info!(%filename, bytes = delivery.bytes, "csv export delivered");
                self.state = ExportState::Idle;
                if let Some(callback) = options.on_complete {
                    callback();
                }
                ExportOutcome::Delivered(delivery)
            }
            Err(err) => {
                warn!(error = %err, %filename, "csv export failed");
                self.state = ExportState::Failed(EXPORT_FAILED_MESSAGE.to_string());
                ExportOutcome::Failed {
                    message: EXPORT_FAILED_MESSAGE,
                    cause: err.to_string(),
                }
            }
        }
    }
}

/// One-shot export with a throwaway [`Exporter`].
pub fn export_collection<D: DownloadSink + ?Sized>(
    collection: &Collection,
    sink: &mut D,
    options: ExportOptions<'_>,
) -> ExportOutcome {
    Exporter::new().export(collection, sink, options)
}
