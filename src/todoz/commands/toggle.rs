use crate::clock::Clock;
use crate::commands::{CmdMessage, CmdResult, Transition};
use crate::error::Result;
use crate::index::{resolve_all, DisplayItem, ItemSelector};
use crate::lifecycle::{self, ItemPatch};
use crate::model::Collection;

/// Flip completion on every selected item.
///
/// All selectors are resolved against the input collection before anything
/// changes, so one bad selector leaves the collection untouched.
pub fn run(
    todos: &Collection,
    selectors: &[ItemSelector],
    clock: &dyn Clock,
) -> Result<Transition> {
    let targets = resolve_all(todos, selectors)?;
    let mut next = todos.clone();
    let mut result = CmdResult::default();

    for target in targets {
        let completed = !target.item.completed;
        next = lifecycle::update_with(
            &next,
            &target.item.id,
            &ItemPatch::completed(completed),
            clock,
        );

        let verb = if completed { "Completed" } else { "Reopened" };
        result.add_message(CmdMessage::success(format!(
            "{} ({}): {}",
            verb, target.index, target.item.title
        )));
        if let Some(item) = next.get(&target.item.id) {
            result.affected_items.push(DisplayItem {
                item: item.clone(),
                index: target.index,
            });
        }
    }

    Ok(Transition::new(next, result))
}
