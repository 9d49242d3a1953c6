use serde::{Deserialize, Serialize};

/// Text the host must treat as "wipe the scrollback", never print.
pub const CLEAR_SENTINEL: &str = "__CLEAR__";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    /// Echo of what the user typed.
    Input,
    Output,
    Error,
    Success,
    /// Control record for the host.
    System,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminalLine {
    pub kind: LineKind,
    pub text: String,
}

impl TerminalLine {
    pub fn new(kind: LineKind, text: impl Into<String>) -> Self {
        Self { kind, text: text.into() }
    }

    pub fn input(text: impl Into<String>) -> Self {
        Self::new(LineKind::Input, text)
    }

    pub fn output(text: impl Into<String>) -> Self {
        Self::new(LineKind::Output, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(LineKind::Error, text)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(LineKind::Success, text)
    }

    pub fn clear() -> Self {
        Self::new(LineKind::System, CLEAR_SENTINEL)
    }

    pub fn is_clear(&self) -> bool {
        self.kind == LineKind::System && self.text == CLEAR_SENTINEL
    }
}

/// What one call to `execute` produced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecResult {
    pub lines: Vec<TerminalLine>,
    pub exit_code: i32,
}

impl ExecResult {
    pub fn success(lines: Vec<TerminalLine>) -> Self {
        Self { lines, exit_code: 0 }
    }

    pub fn failure(lines: Vec<TerminalLine>, exit_code: i32) -> Self {
        Self { lines, exit_code }
    }

    pub fn is_success(&self) -> bool {
        self.exit_code == 0
    }

    pub fn requests_clear(&self) -> bool {
        self.lines.iter().any(TerminalLine::is_clear)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_line_serializes_lowercase_kind() {
        let json = serde_json::to_string(&TerminalLine::error("boom")).unwrap();
        assert_eq!(json, r#"{"kind":"error","text":"boom"}"#);
    }

    #[test]
    fn test_result_uses_camel_case() {
        let result = ExecResult::failure(vec![], 127);
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(json, r#"{"lines":[],"exitCode":127}"#);
    }

    #[test]
    fn test_clear_sentinel() {
        let line = TerminalLine::clear();
        assert!(line.is_clear());
        assert_eq!(line.text, CLEAR_SENTINEL);
        assert!(!TerminalLine::output(CLEAR_SENTINEL).is_clear());
    }
}
