// wasm terminal for the portfolio site
// read-only virtual file tree + a handful of built-ins, launched overlays
// are drawn by the page through the callbacks below
pub mod command;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod filetree;
pub mod logging;
pub mod output;
pub mod shell;
pub mod vfs;

use serde::Serialize;
use wasm_bindgen::prelude::*;

pub use command::{parse_command, CommandExecutor, CommandName};
pub use config::ShellConfig;
pub use context::{Program, TerminalContext, Theme};
pub use error::ShellError;
pub use output::{ExecResult, LineKind, TerminalLine, CLEAR_SENTINEL};
pub use shell::Shell;
pub use vfs::{FileNode, FileSystem};

#[derive(Serialize)]
struct Completion<'a> {
    input: &'a str,
    options: Vec<String>,
}

// serialize for js, null if serde chokes
fn to_js<T: Serialize + ?Sized>(value: &T) -> JsValue {
    serde_wasm_bindgen::to_value(value).unwrap_or(JsValue::NULL)
}

// main terminal struct - keeps the session between calls
#[wasm_bindgen]
pub struct Terminal {
    shell: Shell,
}

#[wasm_bindgen]
impl Terminal {
    /// `options` is an optional object with `user`, `hostname`,
    /// `historyLimit` and `logLevel`. Bad options fall back to defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue) -> Terminal {
        let parsed = if options.is_undefined() || options.is_null() {
            Ok(ShellConfig::default())
        } else {
            serde_wasm_bindgen::from_value::<ShellConfig>(options)
        };
        let config = match parsed {
            Ok(config) => {
                logging::init(config.level_filter());
                config
            }
            Err(e) => {
                let config = ShellConfig::default();
                logging::init(config.level_filter());
                log::warn!("ignoring terminal options: {}", e);
                config
            }
        };
        Terminal {
            shell: Shell::new(config),
        }
    }

    // main entry point - run a line and hand back { lines, exitCode }
    #[wasm_bindgen]
    pub fn execute_command(&mut self, input: &str) -> JsValue {
        to_js(&self.shell.submit(input))
    }

    /// Candidates for `partial`, without touching the input buffer.
    #[wasm_bindgen]
    pub fn autocomplete(&self, partial: &str) -> JsValue {
        to_js(&self.shell.executor().autocomplete(partial))
    }

    /// Tab key: completes `input` and returns `{ input, options }`.
    #[wasm_bindgen]
    pub fn complete_input(&mut self, input: &str) -> JsValue {
        self.shell.set_input(input);
        let options = self.shell.complete();
        to_js(&Completion {
            input: self.shell.input(),
            options,
        })
    }

    #[wasm_bindgen]
    pub fn prompt(&self) -> String {
        self.shell.prompt()
    }

    #[wasm_bindgen]
    pub fn get_current_directory(&self) -> String {
        self.shell.executor().fs().current_path().to_string()
    }

    #[wasm_bindgen]
    pub fn get_command_list(&self) -> JsValue {
        let names: Vec<&str> = CommandName::ALL.into_iter().map(CommandName::as_str).collect();
        to_js(&names)
    }

    /// Lines currently on screen, welcome banner included.
    #[wasm_bindgen]
    pub fn get_scrollback(&self) -> JsValue {
        to_js(self.shell.scrollback())
    }

    #[wasm_bindgen]
    pub fn get_history(&self) -> JsValue {
        to_js(self.shell.history())
    }

    // arrow up
    #[wasm_bindgen]
    pub fn history_prev(&mut self) -> Option<String> {
        self.shell.history_prev().map(str::to_string)
    }

    // arrow down
    #[wasm_bindgen]
    pub fn history_next(&mut self) -> Option<String> {
        self.shell.history_next().map(str::to_string)
    }

    #[wasm_bindgen]
    pub fn is_closed(&self) -> bool {
        self.shell.is_closed()
    }

    #[wasm_bindgen]
    pub fn session_id(&self) -> String {
        self.shell.executor().context().session_id().to_string()
    }

    /// `callback(args)` where `args[0]` is the program name.
    #[wasm_bindgen]
    pub fn set_program_launch_callback(&mut self, callback: js_sys::Function) {
        self.shell.executor_mut().on_program_launch(move |argv: &[String]| {
            let array: js_sys::Array = argv.iter().map(|a| JsValue::from_str(a)).collect();
            if let Err(e) = callback.call1(&JsValue::NULL, &array) {
                log::error!("program launch callback failed: {:?}", e);
            }
        });
    }

    /// `callback(themeName)` with `dark`, `light` or `cyberpunk`.
    #[wasm_bindgen]
    pub fn set_theme_callback(&mut self, callback: js_sys::Function) {
        self.shell.executor_mut().on_theme_change(move |theme: Theme| {
            if let Err(e) = callback.call1(&JsValue::NULL, &JsValue::from_str(theme.as_str())) {
                log::error!("theme callback failed: {:?}", e);
            }
        });
    }

    /// `callback(intensity)` with an integer in `0..=100`.
    #[wasm_bindgen]
    pub fn set_glitch_callback(&mut self, callback: js_sys::Function) {
        self.shell.executor_mut().on_glitch_change(move |intensity: u8| {
            if let Err(e) = callback.call1(&JsValue::NULL, &JsValue::from(intensity)) {
                log::error!("glitch callback failed: {:?}", e);
            }
        });
    }
}
