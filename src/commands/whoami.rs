use crate::command::{Command, CommandResult};
use crate::context::TerminalContext;
use crate::output::TerminalLine;

const BANNER: &[&str] = &[
    r" _   _ _____ ___  _   _",
    r"| \ | | ____/ _ \| \ | |",
    r"|  \| |  _|| | | |  \| |",
    r"| |\  | |__| |_| | |\  |",
    r"|_| \_|_____\___/|_| \_|",
];

const IDENTITY: &[&str] = &[
    "",
    "guest-operator :: full-stack engineer",
    "Building fast, resilient systems from the browser down to the metal.",
    "",
    "Try 'cat about.txt', 'ls projects' or 'calendar' to get in touch.",
];

pub struct WhoamiCommand;

impl Command for WhoamiCommand {
    fn execute(&self, _args: &[String], _ctx: &mut TerminalContext) -> CommandResult {
        let mut lines: Vec<TerminalLine> = BANNER.iter().copied().map(TerminalLine::success).collect();
        lines.extend(IDENTITY.iter().copied().map(TerminalLine::output));
        Ok(lines)
    }
}
