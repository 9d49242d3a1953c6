//! Host-side session wrapper: input line, scrollback, history and prompt
//! around one [`CommandExecutor`].

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::command::{parse_command, CommandExecutor, CommandName};
use crate::config::ShellConfig;
use crate::context::TerminalContext;
use crate::output::{ExecResult, TerminalLine};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub command: String,
    pub submitted_at: DateTime<Utc>,
}

pub struct Shell {
    config: ShellConfig,
    executor: CommandExecutor,
    input: String,
    scrollback: Vec<TerminalLine>,
    history: VecDeque<HistoryEntry>,
    // index into history while recalling with the arrow keys
    history_cursor: Option<usize>,
    closed: bool,
}

impl Default for Shell {
    fn default() -> Self {
        Self::new(ShellConfig::default())
    }
}

impl Shell {
    pub fn new(config: ShellConfig) -> Self {
        let executor = CommandExecutor::new(TerminalContext::new());
        let mut shell = Self {
            config,
            executor,
            input: String::new(),
            scrollback: Vec::new(),
            history: VecDeque::new(),
            history_cursor: None,
            closed: false,
        };
        shell.scrollback = shell.welcome();
        shell
    }

    fn welcome(&self) -> Vec<TerminalLine> {
        let mut lines: Vec<TerminalLine> = self
            .executor
            .fs()
            .read_file("/etc/motd")
            .map(|motd| motd.lines().map(TerminalLine::success).collect())
            .unwrap_or_default();
        lines.push(TerminalLine::output("Type 'help' to list the available commands."));
        lines
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    pub fn executor(&self) -> &CommandExecutor {
        &self.executor
    }

    pub fn executor_mut(&mut self) -> &mut CommandExecutor {
        &mut self.executor
    }

    /// `user@host:~/projects$`
    pub fn prompt(&self) -> String {
        let fs = self.executor.fs();
        let cwd = fs.current_path();
        let home = fs.home();
        let shown = if cwd == home {
            "~".to_string()
        } else if let Some(rest) = cwd.strip_prefix(home).filter(|r| r.starts_with('/')) {
            format!("~{}", rest)
        } else {
            cwd.to_string()
        };
        format!("{}@{}:{}$", self.config.user, self.config.hostname, shown)
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn scrollback(&self) -> &[TerminalLine] {
        &self.scrollback
    }

    pub fn history(&self) -> &VecDeque<HistoryEntry> {
        &self.history
    }

    /// Set once `exit` has been run. The host decides what closing means.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Runs whatever is in the input buffer and empties it.
    pub fn submit_input(&mut self) -> ExecResult {
        let line = std::mem::take(&mut self.input);
        self.submit(&line)
    }

    pub fn submit(&mut self, line: &str) -> ExecResult {
        self.scrollback
            .push(TerminalLine::input(format!("{} {}", self.prompt(), line)));
        self.record_history(line);
        self.history_cursor = None;

        let result = self.executor.execute(line);
        if result.requests_clear() {
            self.scrollback.clear();
        } else {
            self.scrollback.extend(result.lines.iter().cloned());
        }

        let first = parse_command(line).into_iter().next();
        if first.as_deref().and_then(CommandName::from_name) == Some(CommandName::Exit) {
            self.closed = true;
        }
        result
    }

    fn record_history(&mut self, line: &str) {
        if line.trim().is_empty() {
            return;
        }
        self.history.push_back(HistoryEntry {
            command: line.to_string(),
            submitted_at: Utc::now(),
        });
        while self.history.len() > self.config.history_limit {
            self.history.pop_front();
        }
    }

    /// Loads the previous history entry into the input. Stops at the oldest.
    pub fn history_prev(&mut self) -> Option<&str> {
        if self.history.is_empty() {
            return None;
        }
        let idx = match self.history_cursor {
            None => self.history.len() - 1,
            Some(i) => i.saturating_sub(1),
        };
        self.history_cursor = Some(idx);
        self.input = self.history[idx].command.clone();
        Some(self.input.as_str())
    }

    /// Walks back towards the newest entry; past it the input is emptied.
    pub fn history_next(&mut self) -> Option<&str> {
        let idx = self.history_cursor?;
        if idx + 1 < self.history.len() {
            self.history_cursor = Some(idx + 1);
            self.input = self.history[idx + 1].command.clone();
        } else {
            self.history_cursor = None;
            self.input.clear();
        }
        Some(self.input.as_str())
    }

    /// Applies tab completion to the input and returns the candidates.
    ///
    /// A single candidate replaces the word being typed; several extend it to
    /// their longest common prefix.
    pub fn complete(&mut self) -> Vec<String> {
        let options = self.executor.autocomplete(&self.input);
        let word_len = self
            .input
            .rsplit(char::is_whitespace)
            .next()
            .map_or(0, str::len);
        let start = self.input.len() - word_len;

        match options.as_slice() {
            [] => {}
            [only] => {
                self.input.truncate(start);
                self.input.push_str(only);
                if !only.ends_with('/') {
                    self.input.push(' ');
                }
            }
            many => {
                let common = common_prefix(many);
                if common.len() > word_len {
                    self.input.truncate(start);
                    self.input.push_str(&common);
                }
            }
        }
        options
    }
}

fn common_prefix(options: &[String]) -> String {
    let Some((first, rest)) = options.split_first() else {
        return String::new();
    };
    let mut len = first.len();
    for other in rest {
        let shared = first
            .char_indices()
            .zip(other.chars())
            .take_while(|((_, a), b)| a == b)
            .last()
            .map_or(0, |((i, a), _)| i + a.len_utf8());
        len = len.min(shared);
    }
    first[..len].to_string()
}
