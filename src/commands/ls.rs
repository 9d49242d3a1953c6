use crate::command::{Command, CommandResult};
use crate::context::TerminalContext;
use crate::error::ShellError;
use crate::output::TerminalLine;

/// ls [PATH]
/// List the entries of a directory, directories first.
pub struct LsCommand;

impl Command for LsCommand {
    fn execute(&self, args: &[String], ctx: &mut TerminalContext) -> CommandResult {
        // default to cwd if no path given
        let path = args.first().map(String::as_str).unwrap_or(".");

        let node = ctx.fs.get_node(path).ok_or_else(|| ShellError::CannotAccess {
            cmd: "ls",
            path: path.to_string(),
            reason: "No such file or directory",
        })?;
        if !node.is_directory() {
            return Err(ShellError::NotADirectory {
                cmd: "ls",
                path: path.to_string(),
            });
        }

        Ok(node
            .sorted_children()
            .into_iter()
            .map(|entry| TerminalLine::output(format!("{} {}", entry.icon(), entry.display_name())))
            .collect())
    }
}
