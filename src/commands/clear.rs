use crate::command::{Command, CommandResult};
use crate::context::TerminalContext;
use crate::output::TerminalLine;

pub struct ClearCommand;

impl Command for ClearCommand {
    fn execute(&self, _args: &[String], _ctx: &mut TerminalContext) -> CommandResult {
        // special marker for the host to detect and wipe the screen
        Ok(vec![TerminalLine::clear()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::ctx;
    use crate::output::{LineKind, CLEAR_SENTINEL};

    #[test]
    fn test_clear_emits_single_sentinel() {
        let mut ctx = ctx();
        let lines = ClearCommand.execute(&[], &mut ctx).unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].kind, LineKind::System);
        assert_eq!(lines[0].text, CLEAR_SENTINEL);
    }
}
