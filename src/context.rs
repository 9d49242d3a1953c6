use std::fmt;

use uuid::Uuid;

use crate::vfs::FileSystem;

/// Overlay programs the host knows how to display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Program {
    Network,
    Scanner,
    Breach,
    Calendar,
}

impl Program {
    pub const ALL: [Program; 4] = [
        Program::Network,
        Program::Scanner,
        Program::Breach,
        Program::Calendar,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Program::Network => "network",
            Program::Scanner => "scanner",
            Program::Breach => "breach",
            Program::Calendar => "calendar",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == name)
    }

    /// Human readable name used in launch messages.
    pub fn title(self) -> &'static str {
        match self {
            Program::Network => "network map",
            Program::Scanner => "radar scanner",
            Program::Breach => "breach protocol",
            Program::Calendar => "booking calendar",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Theme {
    Dark,
    Light,
    Cyberpunk,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Dark, Theme::Light, Theme::Cyberpunk];

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
            Theme::Cyberpunk => "cyberpunk",
        }
    }

    /// Parses `--dark`, `--light` or `--cyberpunk`.
    pub fn from_flag(flag: &str) -> Option<Self> {
        let name = flag.strip_prefix("--")?;
        Self::ALL.into_iter().find(|t| t.as_str() == name)
    }
}

pub type ProgramLaunchHook = Box<dyn FnMut(&[String])>;
pub type ThemeHook = Box<dyn FnMut(Theme)>;
pub type GlitchHook = Box<dyn FnMut(u8)>;

/// Callbacks into the page hosting the terminal. All optional.
#[derive(Default)]
pub struct HostHooks {
    /// Receives `[program, args...]`.
    pub on_program_launch: Option<ProgramLaunchHook>,
    pub on_theme_change: Option<ThemeHook>,
    /// Receives an intensity in `0..=100`.
    pub on_glitch_change: Option<GlitchHook>,
}

impl fmt::Debug for HostHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostHooks")
            .field("on_program_launch", &self.on_program_launch.is_some())
            .field("on_theme_change", &self.on_theme_change.is_some())
            .field("on_glitch_change", &self.on_glitch_change.is_some())
            .finish()
    }
}

/// Per-session state handed to every command.
#[derive(Debug)]
pub struct TerminalContext {
    pub fs: FileSystem,
    pub hooks: HostHooks,
    session_id: Uuid,
}

impl Default for TerminalContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalContext {
    pub fn new() -> Self {
        Self::new_with_fs(FileSystem::new())
    }

    pub fn new_with_fs(fs: FileSystem) -> Self {
        let session_id = Uuid::new_v4();
        log::info!("[session {}] opened at {}", session_id, fs.current_path());
        Self {
            fs,
            hooks: HostHooks::default(),
            session_id,
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }
}
