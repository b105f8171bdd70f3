use crate::commands::CmdResult;
use crate::model::Collection;

pub fn run(todos: &Collection) -> CmdResult {
    CmdResult::default().with_stats(todos.stats())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Stats;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn counts() {
        let fixture = StoreFixture::new()
            .with_active("a")
            .with_completed("b")
            .with_completed("c");
        assert_eq!(
            run(fixture.store.saved()).stats,
            Some(Stats {
                total: 3,
                active: 1,
                completed: 2
            })
        );
    }
}
