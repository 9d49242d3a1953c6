use crate::command::{Command, CommandResult};
use crate::context::TerminalContext;
use crate::error::ShellError;
use crate::output::TerminalLine;

const GLITCH_USAGE: &str = "Usage: glitch <0-100>";
const MAX_INTENSITY: u8 = 100;

pub struct GlitchCommand;

impl Command for GlitchCommand {
    fn execute(&self, args: &[String], ctx: &mut TerminalContext) -> CommandResult {
        let Some(raw) = args.first() else {
            return Err(ShellError::Missing {
                cmd: "glitch",
                what: "argument",
                hint: Some(GLITCH_USAGE.to_string()),
            });
        };
        let intensity = raw
            .parse::<u8>()
            .ok()
            .filter(|v| *v <= MAX_INTENSITY)
            .ok_or_else(|| ShellError::InvalidValue {
                cmd: "glitch",
                what: "intensity",
                value: raw.clone(),
                hint: Some(GLITCH_USAGE.to_string()),
            })?;

        if let Some(hook) = ctx.hooks.on_glitch_change.as_mut() {
            hook(intensity);
        }
        Ok(vec![TerminalLine::success(format!(
            "Glitch intensity set to {}%",
            intensity
        ))])
    }
}
