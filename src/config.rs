//! System Configuration
//!
//! Process-wide immutable constants and the terminal theme. Built once at
//! startup and owned by the shell; no global mutable state.

/// OS version string shown in the banner and `info` output.
pub const VERSION: &str = "Enterprise 1.0";

/// Default session user.
pub const DEFAULT_USER: &str = "user";

/// Default session hostname.
pub const DEFAULT_HOST: &str = "shitOS-host";

/// Terminal styling. The default theme emits ANSI escape sequences; the
/// plain theme emits nothing, so output degrades to plain text on terminals
/// without escape support.
#[derive(Debug, Clone)]
pub struct Theme {
    reset: &'static str,
    bold: &'static str,
    red: &'static str,
    green: &'static str,
    clear: &'static str,
}

impl Theme {
    /// ANSI color theme.
    pub fn ansi() -> Self {
        Self {
            reset: "\x1b[0m",
            bold: "\x1b[1m",
            red: "\x1b[31m",
            green: "\x1b[32m",
            clear: "\x1b[H\x1b[2J\x1b[3J",
        }
    }

    /// Plain-text theme with no escape sequences.
    pub fn plain() -> Self {
        Self {
            reset: "",
            bold: "",
            red: "",
            green: "",
            clear: "",
        }
    }

    /// Wrap text in bold.
    pub fn bold(&self, text: &str) -> String {
        format!("{}{}{}", self.bold, text, self.reset)
    }

    /// Wrap text in bold green (banner styling).
    pub fn banner(&self, text: &str) -> String {
        format!("{}{}{}{}", self.bold, self.green, text, self.reset)
    }

    /// Wrap text in green (success messages, calculator results).
    pub fn ok(&self, text: &str) -> String {
        format!("{}{}{}", self.green, text, self.reset)
    }

    /// Wrap text in red (error messages).
    pub fn err(&self, text: &str) -> String {
        format!("{}{}{}", self.red, text, self.reset)
    }

    /// Full-screen clear sequence (empty in the plain theme).
    pub fn clear_screen(&self) -> &'static str {
        self.clear
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::ansi()
    }
}

// ============================================================================
// Tests
// ============================================================================
