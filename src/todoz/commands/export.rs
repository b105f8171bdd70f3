use crate::commands::{CmdMessage, CmdResult};
use crate::export::{DownloadSink, ExportOptions, ExportOutcome, Exporter};
use crate::model::Collection;

/// Export through `exporter`, reporting the outcome as messages.
///
/// An empty list is not exported at all. Failures come back as an error
/// message, never as `Err`.
pub fn run<D: DownloadSink + ?Sized>(
    todos: &Collection,
    exporter: &mut Exporter,
    sink: &mut D,
    options: ExportOptions<'_>,
) -> CmdResult {
    let mut result = CmdResult::default();
    if todos.is_empty() {
        result.add_message(CmdMessage::info("No todos to export."));
        return result;
    }

    match exporter.export(todos, sink, options) {
        ExportOutcome::Delivered(delivery) => {
            let target = match &delivery.location {
                Some(path) => path.display().to_string(),
                None => delivery.filename.clone(),
            };
            result.add_message(CmdMessage::success(format!(
                "Exported {} todos to {}",
                todos.len(),
                target
            )));
            result.paths.extend(delivery.location);
        }
        ExportOutcome::Failed { message, .. } => {
            result.add_message(CmdMessage::error(message));
        }
    }
    result
}
