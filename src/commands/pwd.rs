use crate::command::{Command, CommandResult};
use crate::context::TerminalContext;
use crate::output::TerminalLine;

/// pwd
/// Print the full path of the current working directory.
pub struct PwdCommand;

impl Command for PwdCommand {
    fn execute(&self, _args: &[String], ctx: &mut TerminalContext) -> CommandResult {
        Ok(vec![TerminalLine::output(ctx.fs.current_path())])
    }
}
