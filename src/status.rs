//! Status catalog for UptimeRobot monitor codes
//!
//! The API reports monitor state as a bare integer. This module maps every
//! code to a display label and a closed severity class so the rest of the
//! crate never branches on raw numbers.
//!
//! ## Known codes
//!
//! | Code | Label           | Severity |
//! |------|-----------------|----------|
//! | 0    | Paused          | Unknown  |
//! | 1    | Not Checked Yet | Unknown  |
//! | 2    | Up              | Ok       |
//! | 8    | Seems Down      | Degraded |
//! | 9    | Down            | Down     |
//!
//! Codes outside this table are labelled `Unknown (<code>)` and classified
//! as `Unknown`, so a new API status never breaks classification.

use std::fmt;

/// Severity class of a monitor status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Monitor is healthy
    Ok,
    /// Monitor looks unhealthy but is not confirmed down
    Degraded,
    /// Monitor is confirmed down
    Down,
    /// Paused, never checked, or an unrecognized code
    Unknown,
}

impl Severity {
    /// Get the string representation (lowercase)
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Ok => "ok",
            Severity::Degraded => "degraded",
            Severity::Down => "down",
            Severity::Unknown => "unknown",
        }
    }

    /// Whether this severity counts as a problem worth surfacing
    pub fn is_problem(&self) -> bool {
        matches!(self, Severity::Down | Severity::Degraded)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolved description of a raw status code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusDescriptor {
    /// The raw code this descriptor was derived from
    pub code: i64,

    /// Human-readable label for display
    pub label: String,

    /// Severity class for filtering and sorting
    pub severity: Severity,
}

/// Describe a raw status code
///
/// Total over all of `i64`; unrecognized codes degrade to an `Unknown (<code>)`
/// label instead of failing.
pub fn describe(code: i64) -> StatusDescriptor {
    let (label, severity) = match code {
        0 => ("Paused".to_string(), Severity::Unknown),
        1 => ("Not Checked Yet".to_string(), Severity::Unknown),
        2 => ("Up".to_string(), Severity::Ok),
        8 => ("Seems Down".to_string(), Severity::Degraded),
        9 => ("Down".to_string(), Severity::Down),
        other => (format!("Unknown ({other})"), Severity::Unknown),
    };

    StatusDescriptor {
        code,
        label,
        severity,
    }
}
