use crate::command::{Command, CommandResult};
use crate::context::{TerminalContext, Theme};
use crate::error::ShellError;
use crate::output::TerminalLine;

const THEME_USAGE: &str = "Usage: theme --dark | --light | --cyberpunk";
const THEME_VALID: &str = "Valid options: --dark, --light, --cyberpunk";

pub struct ThemeCommand;

impl Command for ThemeCommand {
    fn execute(&self, args: &[String], ctx: &mut TerminalContext) -> CommandResult {
        let Some(flag) = args.first() else {
            return Err(ShellError::Missing {
                cmd: "theme",
                what: "argument",
                hint: Some(THEME_USAGE.to_string()),
            });
        };
        let theme = Theme::from_flag(flag).ok_or_else(|| ShellError::InvalidOption {
            cmd: "theme",
            value: flag.clone(),
            hint: Some(THEME_VALID.to_string()),
        })?;

        if let Some(hook) = ctx.hooks.on_theme_change.as_mut() {
            hook(theme);
        }
        Ok(vec![TerminalLine::success(format!("Theme set to {}", theme.as_str()))])
    }
}
