use crate::command::{Command, CommandResult};
use crate::context::TerminalContext;
use crate::error::ShellError;
use crate::output::TerminalLine;

const GUI_USAGE: &str = "Usage: gui --show | --hide | --toggle";

/// Echoes the requested GUI mode. No host callback is wired for it.
pub struct GuiCommand;

impl Command for GuiCommand {
    fn execute(&self, args: &[String], _ctx: &mut TerminalContext) -> CommandResult {
        let Some(flag) = args.first() else {
            return Err(ShellError::Missing {
                cmd: "gui",
                what: "argument",
                hint: Some(GUI_USAGE.to_string()),
            });
        };
        let mode = match flag.as_str() {
            "--show" => "show",
            "--hide" => "hide",
            "--toggle" => "toggle",
            _ => {
                return Err(ShellError::InvalidOption {
                    cmd: "gui",
                    value: flag.clone(),
                    hint: Some(GUI_USAGE.to_string()),
                })
            }
        };
        Ok(vec![TerminalLine::success(format!("GUI mode: {}", mode))])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::{args, ctx, texts};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_gui_modes() {
        let mut ctx = ctx();
        for (flag, mode) in [("--show", "show"), ("--hide", "hide"), ("--toggle", "toggle")] {
            let lines = GuiCommand.execute(&args(&[flag]), &mut ctx).unwrap();
            let expected = format!("GUI mode: {}", mode);
            assert_eq!(texts(&lines), vec![expected.as_str()]);
        }
    }

    #[test]
    fn test_gui_usage_errors() {
        let mut ctx = ctx();
        assert!(GuiCommand.execute(&[], &mut ctx).is_err());
        let err = GuiCommand.execute(&args(&["--blink"]), &mut ctx).unwrap_err();
        assert_eq!(err.hint().as_deref(), Some(GUI_USAGE));
    }
}
