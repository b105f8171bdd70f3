use crate::clock::Clock;
use crate::commands::{CmdMessage, CmdResult, Transition};
use crate::error::Result;
use crate::index::DisplayItem;
use crate::lifecycle;
use crate::model::Collection;
use crate::validation::validate_title;

pub fn run(todos: &Collection, title: &str, clock: &dyn Clock) -> Result<Transition> {
    validate_title(title).into_result()?;

    let item = lifecycle::create_with(title, clock);
    let next = lifecycle::append(todos, item.clone())?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Todo added: {}", item.title)));
    // Appended items always land last
    result.affected_items.push(DisplayItem {
        index: next.len(),
        item,
    });
    Ok(Transition::new(next, result))
}
