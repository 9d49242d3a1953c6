use crate::command::{Command, CommandResult};
use crate::context::TerminalContext;
use crate::output::TerminalLine;

/// Only prints. Closing the overlay is up to the host, which watches for
/// `exit` and the ESC key itself.
pub struct ExitCommand;

impl Command for ExitCommand {
    fn execute(&self, _args: &[String], _ctx: &mut TerminalContext) -> CommandResult {
        Ok(vec![
            TerminalLine::output("Terminating session..."),
            TerminalLine::output("Press ESC to return to the site."),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::ctx;

    #[test]
    fn test_exit_prints_two_lines() {
        let mut ctx = ctx();
        let lines = ExitCommand.execute(&[], &mut ctx).unwrap();
        assert_eq!(lines.len(), 2);
    }
}
