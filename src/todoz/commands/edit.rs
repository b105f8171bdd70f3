use crate::clock::Clock;
use crate::commands::{CmdMessage, CmdResult, Transition};
use crate::error::Result;
use crate::index::{resolve, DisplayItem, ItemSelector};
use crate::lifecycle::{self, ItemPatch};
use crate::model::Collection;
use crate::validation::{trim_title, validate_title};

pub fn run(
    todos: &Collection,
    selector: &ItemSelector,
    title: &str,
    clock: &dyn Clock,
) -> Result<Transition> {
    validate_title(title).into_result()?;
    let target = resolve(todos, selector)?;
    let title = trim_title(title);

    let mut result = CmdResult::default();
    // Same title: leave the item (and its updated_at) alone
    if title == target.item.title {
        result.add_message(CmdMessage::info(format!(
            "No changes ({}): {}",
            target.index, target.item.title
        )));
        return Ok(Transition::new(todos.clone(), result));
    }

    let next = lifecycle::update_with(todos, &target.item.id, &ItemPatch::title(title), clock);
    result.add_message(CmdMessage::success(format!(
        "Todo updated ({}): {}",
        target.index, title
    )));
    if let Some(item) = next.get(&target.item.id) {
        result.affected_items.push(DisplayItem {
            item: item.clone(),
            index: target.index,
        });
    }
    Ok(Transition::new(next, result))
}
