use crate::command::{Command, CommandName, CommandResult};
use crate::context::TerminalContext;
use crate::output::TerminalLine;

/// help
/// List every built-in with its usage.
pub struct HelpCommand;

impl Command for HelpCommand {
    fn execute(&self, _args: &[String], _ctx: &mut TerminalContext) -> CommandResult {
        let mut lines = vec![
            TerminalLine::success("Available commands:"),
            TerminalLine::output(""),
        ];
        for cmd in CommandName::ALL {
            lines.push(TerminalLine::output(format!(
                "  {:<36} {}",
                cmd.usage(),
                cmd.summary()
            )));
        }
        lines.push(TerminalLine::output(""));
        lines.push(TerminalLine::output(
            "Tab completes commands and paths. Arrow keys walk the history.",
        ));
        Ok(lines)
    }
}
