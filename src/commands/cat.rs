use crate::command::{Command, CommandResult};
use crate::context::TerminalContext;
use crate::error::ShellError;
use crate::output::TerminalLine;

pub struct CatCommand;

impl Command for CatCommand {
    fn execute(&self, args: &[String], ctx: &mut TerminalContext) -> CommandResult {
        let Some(path) = args.first() else {
            return Err(ShellError::Missing {
                cmd: "cat",
                what: "file operand",
                hint: Some("Usage: cat <file>".to_string()),
            });
        };

        let node = ctx.fs.get_node(path).ok_or_else(|| ShellError::NotFound {
            cmd: "cat",
            path: path.clone(),
        })?;
        let content = node.content().ok_or_else(|| ShellError::IsADirectory {
            cmd: "cat",
            path: path.clone(),
        })?;

        // one output line per source line, trailing blank line included
        Ok(content.split('\n').map(TerminalLine::output).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::{args, ctx, texts};
    use crate::filetree;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_cat_splits_lines() {
        let mut ctx = ctx();
        let lines = CatCommand
            .execute(&args(&["projects/neural-link/stack.txt"]), &mut ctx)
            .unwrap();
        assert_eq!(texts(&lines), vec!["rust tokio arrow parquet", "clickhouse grafana"]);
    }

    #[test]
    fn test_cat_matches_static_content() {
        let mut ctx = ctx();
        for file in filetree::FILES {
            let lines = CatCommand.execute(&args(&[file.path]), &mut ctx).unwrap();
            assert_eq!(texts(&lines).join("\n"), file.content);
        }
    }

    #[test]
    fn test_cat_missing_operand() {
        let mut ctx = ctx();
        let err = CatCommand.execute(&[], &mut ctx).unwrap_err();
        assert_eq!(err.to_string(), "cat: missing file operand");
        assert_eq!(err.hint().as_deref(), Some("Usage: cat <file>"));
    }

    #[test]
    fn test_cat_directory() {
        let mut ctx = ctx();
        let err = CatCommand.execute(&args(&["projects"]), &mut ctx).unwrap_err();
        assert_eq!(err.to_string(), "cat: projects: Is a directory");
    }

    #[test]
    fn test_cat_missing_file() {
        let mut ctx = ctx();
        let err = CatCommand.execute(&args(&["nope.txt"]), &mut ctx).unwrap_err();
        assert_eq!(err.to_string(), "cat: nope.txt: No such file or directory");
    }
}
