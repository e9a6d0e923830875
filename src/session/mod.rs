//! Session
//!
//! Identity (user/host) and the wall-clock session timer. Both are fixed
//! for the process lifetime; only the elapsed time is derived on demand.

use chrono::{DateTime, Local};

use crate::config::{DEFAULT_HOST, DEFAULT_USER, VERSION};

/// Who and where this session belongs to.
#[derive(Debug, Clone)]
pub struct Session {
    pub user: String,
    pub host: String,
}

impl Session {
    pub fn new(user: Option<String>, host: Option<String>) -> Self {
        Self {
            user: user.unwrap_or_else(|| DEFAULT_USER.to_string()),
            host: host.unwrap_or_else(|| DEFAULT_HOST.to_string()),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// Tracks the session start time and reports uptime.
#[derive(Debug, Clone)]
pub struct SessionClock {
    started: DateTime<Local>,
}

impl SessionClock {
    /// Start the clock now.
    pub fn start() -> Self {
        Self { started: Local::now() }
    }

    /// Elapsed time since start, formatted `"{h}h {m}m {s}s"`.
    ///
    /// Wall-clock based; a backwards clock step clamps to zero rather than
    /// reporting negative uptime.
    pub fn uptime(&self) -> String {
        let secs = Local::now()
            .signed_duration_since(self.started)
            .num_seconds()
            .max(0);
        format_uptime(secs)
    }
}

/// Format a second count as `"{h}h {m}m {s}s"`.
pub fn format_uptime(secs: i64) -> String {
    format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
}

/// OS name/version string for the `info` command, with the build target in
/// parentheses.
pub fn os_info() -> String {
    format!(
        "ShitOS {} ({}-{})",
        VERSION,
        std::env::consts::ARCH,
        std::env::consts::OS
    )
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_uptime() {
        assert_eq!(format_uptime(0), "0h 0m 0s");
        assert_eq!(format_uptime(59), "0h 0m 59s");
        assert_eq!(format_uptime(61), "0h 1m 1s");
        assert_eq!(format_uptime(3600), "1h 0m 0s");
        assert_eq!(format_uptime(3_725_999), "1034h 59m 59s");
    }

    #[test]
    fn test_fresh_clock_reads_zero() {
        let clock = SessionClock::start();
        assert_eq!(clock.uptime(), "0h 0m 0s");
    }

    #[test]
    fn test_session_defaults() {
        let session = Session::default();
        assert_eq!(session.user, "user");
        assert_eq!(session.host, "shitOS-host");
    }

    #[test]
    fn test_session_overrides() {
        let session = Session::new(Some("root".into()), Some("box".into()));
        assert_eq!(session.user, "root");
        assert_eq!(session.host, "box");
    }

    #[test]
    fn test_os_info_carries_version() {
        assert!(os_info().starts_with("ShitOS Enterprise 1.0 ("));
    }
}
