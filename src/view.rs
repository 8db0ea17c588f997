//! Pure projection of the monitor set for display
//!
//! Everything here is a pure function over a monitor slice: filtering by
//! search text and display mode, ordering for the list, summary counts,
//! and the reason to show when the visible list comes out empty. The UI
//! recomputes these on every input change instead of mutating shared
//! state.

use crate::Monitor;
use crate::status::{Severity, describe};

/// Filter monitors by search text and display mode
///
/// `query` matches case-insensitively against the monitor name. With
/// `show_all` unset only problem monitors (down or seems-down) pass.
pub fn filter(monitors: &[Monitor], query: &str, show_all: bool) -> Vec<Monitor> {
    let needle = query.to_lowercase();

    monitors
        .iter()
        .filter(|monitor| needle.is_empty() || monitor.name.to_lowercase().contains(&needle))
        .filter(|monitor| show_all || describe(monitor.status).severity.is_problem())
        .cloned()
        .collect()
}

/// Order monitors for the list
///
/// Confirmed-down monitors come first, everything else follows in name
/// order. Only hard `Down` gets the boost; "Seems Down" stays in the
/// alphabetical run.
pub fn sort_for_display(monitors: &mut [Monitor]) {
    monitors.sort_by(|a, b| {
        let a_down = describe(a.status).severity == Severity::Down;
        let b_down = describe(b.status).severity == Severity::Down;
        b_down.cmp(&a_down).then_with(|| a.name.cmp(&b.name))
    });
}

/// Filter then sort in one step
pub fn project(monitors: &[Monitor], query: &str, show_all: bool) -> Vec<Monitor> {
    let mut visible = filter(monitors, query, show_all);
    sort_for_display(&mut visible);
    visible
}

/// Counts over the unfiltered monitor set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusSummary {
    pub total: usize,

    /// Down or seems-down
    pub problems: usize,

    /// Up
    pub up: usize,

    /// Paused, not checked yet, or unrecognized
    pub other: usize,
}

/// Count monitors per severity class
pub fn summarize(monitors: &[Monitor]) -> StatusSummary {
    let mut summary = StatusSummary {
        total: monitors.len(),
        ..StatusSummary::default()
    };

    for monitor in monitors {
        match describe(monitor.status).severity {
            Severity::Down | Severity::Degraded => summary.problems += 1,
            Severity::Ok => summary.up += 1,
            Severity::Unknown => summary.other += 1,
        }
    }

    summary
}

/// Why the visible list is empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmptyReason {
    /// The last load failed
    LoadError(String),

    /// Problem view over a healthy set
    AllHealthy { total: usize },

    /// The search text matched nothing
    NoSearchMatch { query: String },

    /// No monitors at all
    NoData,
}

/// Decide what to show in place of an empty list
///
/// Precedence: a load error first, then the all-healthy state (problem
/// view over a non-empty set without problems), then an unmatched
/// search, then the no-data fallback.
pub fn empty_reason(
    monitors: &[Monitor],
    query: &str,
    show_all: bool,
    error: Option<&str>,
) -> EmptyReason {
    if let Some(detail) = error {
        return EmptyReason::LoadError(detail.to_string());
    }

    if !monitors.is_empty() {
        if !show_all && summarize(monitors).problems == 0 {
            return EmptyReason::AllHealthy {
                total: monitors.len(),
            };
        }

        if !query.is_empty() {
            return EmptyReason::NoSearchMatch {
                query: query.to_string(),
            };
        }
    }

    EmptyReason::NoData
}
