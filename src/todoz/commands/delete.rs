use crate::commands::{CmdMessage, CmdResult, Transition};
use crate::error::Result;
use crate::index::{resolve_all, ItemSelector};
use crate::lifecycle;
use crate::model::Collection;

pub fn run(todos: &Collection, selectors: &[ItemSelector]) -> Result<Transition> {
    let targets = resolve_all(todos, selectors)?;
    let mut next = todos.clone();
    let mut result = CmdResult::default();

    for target in targets {
        next = lifecycle::remove(&next, &target.item.id);
        result.add_message(CmdMessage::success(format!(
            "Todo deleted ({}): {}",
            target.index, target.item.title
        )));
        result.affected_items.push(target);
    }

    Ok(Transition::new(next, result))
}
