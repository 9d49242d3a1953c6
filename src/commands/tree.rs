use crate::command::{Command, CommandResult};
use crate::context::TerminalContext;
use crate::output::TerminalLine;

/// tree
/// Recursive listing of the current directory.
pub struct TreeCommand;

impl Command for TreeCommand {
    fn execute(&self, _args: &[String], ctx: &mut TerminalContext) -> CommandResult {
        let cwd = ctx.fs.current_path();
        let root = match cwd.rsplit('/').find(|s| !s.is_empty()) {
            Some(name) => format!("📁 {}/", name),
            None => "📁 /".to_string(),
        };

        let mut lines = vec![TerminalLine::output(root)];
        lines.extend(
            ctx.fs
                .directory_tree(".", "")
                .into_iter()
                .map(TerminalLine::output),
        );
        Ok(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::{ctx, texts};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_tree_of_projects() {
        let mut ctx = ctx();
        assert!(ctx.fs.change_directory("projects"));
        let lines = TreeCommand.execute(&[], &mut ctx).unwrap();
        assert_eq!(
            texts(&lines),
            vec![
                "📁 projects/",
                "├── 📁 ghost-protocol/",
                "│   └── 📄 README.md",
                "├── 📁 neural-link/",
                "│   ├── 📄 README.md",
                "│   └── 📄 stack.txt",
                "├── 📄 README.md",
                "└── 📄 synthwave-dashboard.md",
            ]
        );
    }

    #[test]
    fn test_tree_of_empty_directory_is_root_only() {
        let mut ctx = ctx();
        assert!(ctx.fs.change_directory("/tmp"));
        let lines = TreeCommand.execute(&[], &mut ctx).unwrap();
        assert_eq!(texts(&lines), vec!["📁 tmp/"]);
    }

    #[test]
    fn test_tree_at_root() {
        let mut ctx = ctx();
        assert!(ctx.fs.change_directory("/"));
        let lines = TreeCommand.execute(&[], &mut ctx).unwrap();
        assert_eq!(lines[0].text, "📁 /");
        assert!(lines.len() > 1);
    }
}
