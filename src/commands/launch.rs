use crate::command::{Command, CommandResult};
use crate::context::{Program, TerminalContext};
use crate::error::ShellError;
use crate::output::TerminalLine;

/// Asks the host to open one of the overlay programs. Arguments are passed
/// through untouched.
pub struct LaunchCommand(pub Program);

impl Command for LaunchCommand {
    fn execute(&self, args: &[String], ctx: &mut TerminalContext) -> CommandResult {
        let program = self.0;
        let session = ctx.session_id();
        let Some(hook) = ctx.hooks.on_program_launch.as_mut() else {
            log::warn!("{}: launch requested without a host", program.as_str());
            return Err(ShellError::NoHost(program.as_str().to_string()));
        };

        let mut argv = Vec::with_capacity(args.len() + 1);
        argv.push(program.as_str().to_string());
        argv.extend(args.iter().cloned());
        log::info!("[session {}] launching {:?}", session, argv);
        hook(&argv);

        Ok(vec![
            TerminalLine::success(format!("Launching {}...", program.title())),
            TerminalLine::output("Press ESC to close the program and return here."),
        ])
    }
}
