use crate::command::{Command, CommandResult};
use crate::context::TerminalContext;
use crate::error::ShellError;

pub struct CdCommand;

impl Command for CdCommand {
    fn execute(&self, args: &[String], ctx: &mut TerminalContext) -> CommandResult {
        let Some(target) = args.first() else {
            // cd with no args goes home, classic unix behavior
            let home = ctx.fs.home().to_string();
            ctx.fs.set_current_path(home);
            return Ok(Vec::new());
        };

        if ctx.fs.change_directory(target) {
            return Ok(Vec::new()); // normal cd is silent
        }
        if ctx.fs.exists(target) {
            Err(ShellError::NotADirectory {
                cmd: "cd",
                path: target.clone(),
            })
        } else {
            Err(ShellError::NotFound {
                cmd: "cd",
                path: target.clone(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::{args, ctx};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_cd_relative_path() {
        let mut ctx = ctx();
        let lines = CdCommand.execute(&args(&["projects"]), &mut ctx).unwrap();
        assert!(lines.is_empty());
        assert_eq!(ctx.fs.current_path(), "/home/guest/projects");
    }

    #[test]
    fn test_cd_absolute_path() {
        let mut ctx = ctx();
        CdCommand.execute(&args(&["/var/log"]), &mut ctx).unwrap();
        assert_eq!(ctx.fs.current_path(), "/var/log");
    }

    #[test]
    fn test_cd_parent_directory() {
        let mut ctx = ctx();
        CdCommand.execute(&args(&[".."]), &mut ctx).unwrap();
        assert_eq!(ctx.fs.current_path(), "/home");
        CdCommand.execute(&args(&["../.."]), &mut ctx).unwrap();
        assert_eq!(ctx.fs.current_path(), "/");
    }

    #[test]
    fn test_cd_home() {
        let mut ctx = ctx();
        CdCommand.execute(&args(&["/etc"]), &mut ctx).unwrap();
        CdCommand.execute(&[], &mut ctx).unwrap();
        assert_eq!(ctx.fs.current_path(), "/home/guest");
    }

    #[test]
    fn test_cd_tilde() {
        let mut ctx = ctx();
        CdCommand.execute(&args(&["/etc"]), &mut ctx).unwrap();
        CdCommand.execute(&args(&["~/experience"]), &mut ctx).unwrap();
        assert_eq!(ctx.fs.current_path(), "/home/guest/experience");
    }

    #[test]
    fn test_cd_nonexistent_directory() {
        let mut ctx = ctx();
        let err = CdCommand.execute(&args(&["nonexistent"]), &mut ctx).unwrap_err();
        assert_eq!(err.to_string(), "cd: nonexistent: No such file or directory");
        assert_eq!(ctx.fs.current_path(), "/home/guest");
    }

    #[test]
    fn test_cd_to_file() {
        let mut ctx = ctx();
        let err = CdCommand.execute(&args(&["about.txt"]), &mut ctx).unwrap_err();
        assert_eq!(err.to_string(), "cd: about.txt: Not a directory");
        assert_eq!(ctx.fs.current_path(), "/home/guest");
    }
}
