use crate::commands::{
    cat::CatCommand, cd::CdCommand, clear::ClearCommand, exit::ExitCommand,
    glitch::GlitchCommand, gui::GuiCommand, help::HelpCommand, launch::LaunchCommand,
    ls::LsCommand, pwd::PwdCommand, theme::ThemeCommand, tree::TreeCommand,
    whoami::WhoamiCommand,
};
use crate::context::{Program, TerminalContext, Theme};
use crate::error::ShellError;
use crate::output::{ExecResult, TerminalLine};
use crate::vfs::FileSystem;

pub type CommandResult = Result<Vec<TerminalLine>, ShellError>;

pub trait Command {
    fn execute(&self, args: &[String], ctx: &mut TerminalContext) -> CommandResult;
}

/// Every built-in, in the order `help` and completion list them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandName {
    Help,
    Ls,
    Cd,
    Pwd,
    Cat,
    Tree,
    Clear,
    Whoami,
    Network,
    Scanner,
    Breach,
    Calendar,
    Book,
    Theme,
    Glitch,
    Gui,
    Exit,
}

impl CommandName {
    pub const ALL: [CommandName; 17] = [
        CommandName::Help,
        CommandName::Ls,
        CommandName::Cd,
        CommandName::Pwd,
        CommandName::Cat,
        CommandName::Tree,
        CommandName::Clear,
        CommandName::Whoami,
        CommandName::Network,
        CommandName::Scanner,
        CommandName::Breach,
        CommandName::Calendar,
        CommandName::Book,
        CommandName::Theme,
        CommandName::Glitch,
        CommandName::Gui,
        CommandName::Exit,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CommandName::Help => "help",
            CommandName::Ls => "ls",
            CommandName::Cd => "cd",
            CommandName::Pwd => "pwd",
            CommandName::Cat => "cat",
            CommandName::Tree => "tree",
            CommandName::Clear => "clear",
            CommandName::Whoami => "whoami",
            CommandName::Network => "network",
            CommandName::Scanner => "scanner",
            CommandName::Breach => "breach",
            CommandName::Calendar => "calendar",
            CommandName::Book => "book",
            CommandName::Theme => "theme",
            CommandName::Glitch => "glitch",
            CommandName::Gui => "gui",
            CommandName::Exit => "exit",
        }
    }

    /// Exact, case-sensitive lookup.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == name)
    }

    /// Commands whose arguments complete against the file tree.
    pub fn takes_path(self) -> bool {
        matches!(self, CommandName::Cd | CommandName::Ls | CommandName::Cat)
    }

    pub fn usage(self) -> &'static str {
        match self {
            CommandName::Help => "help",
            CommandName::Ls => "ls [path]",
            CommandName::Cd => "cd [path]",
            CommandName::Pwd => "pwd",
            CommandName::Cat => "cat <file>",
            CommandName::Tree => "tree",
            CommandName::Clear => "clear",
            CommandName::Whoami => "whoami",
            CommandName::Network => "network",
            CommandName::Scanner => "scanner",
            CommandName::Breach => "breach",
            CommandName::Calendar => "calendar",
            CommandName::Book => "book",
            CommandName::Theme => "theme --dark|--light|--cyberpunk",
            CommandName::Glitch => "glitch <0-100>",
            CommandName::Gui => "gui --show|--hide|--toggle",
            CommandName::Exit => "exit",
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            CommandName::Help => "show this help",
            CommandName::Ls => "list directory contents",
            CommandName::Cd => "change directory",
            CommandName::Pwd => "print working directory",
            CommandName::Cat => "print a file",
            CommandName::Tree => "show the directory tree",
            CommandName::Clear => "clear the screen",
            CommandName::Whoami => "who is behind this terminal",
            CommandName::Network => "launch the network map",
            CommandName::Scanner => "launch the radar scanner",
            CommandName::Breach => "launch the breach protocol",
            CommandName::Calendar => "book a call",
            CommandName::Book => "alias for calendar",
            CommandName::Theme => "switch the color theme",
            CommandName::Glitch => "set the glitch intensity",
            CommandName::Gui => "show or hide the GUI layer",
            CommandName::Exit => "leave the terminal",
        }
    }

    fn handler(self) -> &'static dyn Command {
        match self {
            CommandName::Help => &HelpCommand,
            CommandName::Ls => &LsCommand,
            CommandName::Cd => &CdCommand,
            CommandName::Pwd => &PwdCommand,
            CommandName::Cat => &CatCommand,
            CommandName::Tree => &TreeCommand,
            CommandName::Clear => &ClearCommand,
            CommandName::Whoami => &WhoamiCommand,
            CommandName::Network => &LaunchCommand(Program::Network),
            CommandName::Scanner => &LaunchCommand(Program::Scanner),
            CommandName::Breach => &LaunchCommand(Program::Breach),
            CommandName::Calendar | CommandName::Book => &LaunchCommand(Program::Calendar),
            CommandName::Theme => &ThemeCommand,
            CommandName::Glitch => &GlitchCommand,
            CommandName::Gui => &GuiCommand,
            CommandName::Exit => &ExitCommand,
        }
    }
}

/// Splits a line on whitespace outside quotes.
///
/// `"` and `'` both toggle quoting and are dropped; the kind of quote is not
/// tracked, so an unmatched quote swallows the rest of the line into the
/// current token. Empty tokens are never produced.
pub fn parse_command(input: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    for c in input.chars() {
        match c {
            '"' | '\'' => in_quotes = !in_quotes,
            c if c.is_whitespace() && !in_quotes => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            c => current.push(c),
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}

/// Runs input lines against one session.
pub struct CommandExecutor {
    ctx: TerminalContext,
}

impl Default for CommandExecutor {
    fn default() -> Self {
        Self::new(TerminalContext::new())
    }
}

impl CommandExecutor {
    pub fn new(ctx: TerminalContext) -> Self {
        Self { ctx }
    }

    pub fn context(&self) -> &TerminalContext {
        &self.ctx
    }

    pub fn context_mut(&mut self) -> &mut TerminalContext {
        &mut self.ctx
    }

    pub fn fs(&self) -> &FileSystem {
        &self.ctx.fs
    }

    pub fn on_program_launch(&mut self, hook: impl FnMut(&[String]) + 'static) {
        self.ctx.hooks.on_program_launch = Some(Box::new(hook));
    }

    pub fn on_theme_change(&mut self, hook: impl FnMut(Theme) + 'static) {
        self.ctx.hooks.on_theme_change = Some(Box::new(hook));
    }

    pub fn on_glitch_change(&mut self, hook: impl FnMut(u8) + 'static) {
        self.ctx.hooks.on_glitch_change = Some(Box::new(hook));
    }

    /// Runs one line. Never panics on user input; every failure comes back
    /// as an `error` line with a non-zero exit code.
    pub fn execute(&mut self, input: &str) -> ExecResult {
        let tokens = parse_command(input);
        let Some((name, args)) = tokens.split_first() else {
            return ExecResult::default();
        };
        log::debug!("[session {}] exec {} {:?}", self.ctx.session_id(), name, args);

        let outcome = match CommandName::from_name(name) {
            Some(cmd) => cmd.handler().execute(args, &mut self.ctx),
            None => match self.program_at_path(name) {
                Some(program) => LaunchCommand(program).execute(args, &mut self.ctx),
                None => Err(ShellError::CommandNotFound(name.clone())),
            },
        };

        match outcome {
            Ok(lines) => ExecResult::success(lines),
            Err(err) => {
                log::warn!("[session {}] {}", self.ctx.session_id(), err);
                let mut lines = vec![TerminalLine::error(err.to_string())];
                if let Some(hint) = err.hint() {
                    lines.push(TerminalLine::output(hint));
                }
                ExecResult::failure(lines, err.exit_code())
            }
        }
    }

    // `./apps/network` style invocation of a launchable file
    fn program_at_path(&self, token: &str) -> Option<Program> {
        if !token.contains('/') {
            return None;
        }
        let node = self.ctx.fs.get_node(token)?;
        if !node.is_executable() {
            return None;
        }
        Program::from_name(node.name())
    }

    /// Suggestions for the line being typed.
    ///
    /// With a single token, the command names starting with it in table
    /// order. After `cd`, `ls` or `cat`, the entries matching the last
    /// token, directories suffixed with `/`. Anything else gets nothing.
    pub fn autocomplete(&self, partial: &str) -> Vec<String> {
        let mut tokens: Vec<&str> = partial.split_whitespace().collect();
        if tokens.is_empty() || partial.ends_with(char::is_whitespace) {
            tokens.push("");
        }
        match tokens.as_slice() {
            [word] => CommandName::ALL
                .into_iter()
                .map(CommandName::as_str)
                .filter(|name| name.starts_with(*word))
                .map(str::to_string)
                .collect(),
            [cmd, .., last] if CommandName::from_name(cmd).is_some_and(CommandName::takes_path) => {
                self.complete_path(last)
            }
            _ => Vec::new(),
        }
    }

    fn complete_path(&self, partial: &str) -> Vec<String> {
        let (dir, prefix) = match partial.rfind('/') {
            Some(idx) => partial.split_at(idx + 1),
            None => ("", partial),
        };
        let lookup = if dir.is_empty() { "." } else { dir };
        let Some(entries) = self.ctx.fs.list_directory(lookup) else {
            return Vec::new();
        };
        entries
            .into_iter()
            .filter(|entry| entry.name().starts_with(prefix))
            .map(|entry| format!("{}{}", dir, entry.display_name()))
            .collect()
    }
}
