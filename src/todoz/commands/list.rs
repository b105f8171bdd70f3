use crate::commands::CmdResult;
use crate::index::index_items;
use crate::model::{Collection, ItemFilter};

pub fn run(todos: &Collection, filter: ItemFilter) -> CmdResult {
    CmdResult::default().with_listed_items(index_items(todos, filter))
}
