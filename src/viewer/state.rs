//! Application state management

use chrono::{DateTime, Utc};
use std::time::{Duration, Instant};

use crate::Monitor;
use crate::view::{self, EmptyReason, StatusSummary};

/// How long a transient notice stays on screen
const NOTICE_TTL: Duration = Duration::from_secs(5);

/// Kind of transient notice shown in the footer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// Transient footer message
#[derive(Debug, Clone)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
    shown_at: Instant,
}

impl Notice {
    fn new(kind: NoticeKind, text: String) -> Self {
        Self {
            kind,
            text,
            shown_at: Instant::now(),
        }
    }

    pub fn expired(&self) -> bool {
        self.shown_at.elapsed() >= NOTICE_TTL
    }
}

/// Application state
pub struct AppState {
    /// Full monitor set from the last successful load
    pub monitors: Vec<Monitor>,

    /// Filtered and sorted list currently on screen
    pub visible: Vec<Monitor>,

    /// Counts over the full set
    pub summary: StatusSummary,

    /// A fetch is in flight
    pub is_loading: bool,

    /// Last load failure, if any
    pub error: Option<String>,

    /// Search text
    pub query: String,

    /// Search input mode (`/` enters, Enter/Esc leave)
    pub searching: bool,

    /// All monitors vs problems only
    pub show_all: bool,

    /// Selected row in the visible list
    pub selected: usize,

    /// When the monitor set last changed
    pub last_refresh: Option<DateTime<Utc>>,

    /// Transient footer message
    pub notice: Option<Notice>,
}

impl AppState {
    pub fn new(show_all: bool) -> Self {
        Self {
            monitors: Vec::new(),
            visible: Vec::new(),
            summary: StatusSummary::default(),
            is_loading: false,
            error: None,
            query: String::new(),
            searching: false,
            show_all,
            selected: 0,
            last_refresh: None,
            notice: None,
        }
    }

    /// Replace the monitor set after a successful load
    pub fn set_monitors(&mut self, monitors: Vec<Monitor>) {
        self.monitors = monitors;
        self.error = None;
        self.last_refresh = Some(Utc::now());
        self.refresh_projection();
    }

    /// Record a failed load, keeping whatever set is already shown
    pub fn set_error(&mut self, message: String) {
        self.error = Some(message);
    }

    /// Recompute the visible list and summary from the current inputs
    pub fn refresh_projection(&mut self) {
        self.visible = view::project(&self.monitors, &self.query, self.show_all);
        self.summary = view::summarize(&self.monitors);

        // Clamp selection
        if self.visible.is_empty() {
            self.selected = 0;
        } else if self.selected >= self.visible.len() {
            self.selected = self.visible.len() - 1;
        }
    }

    /// Why the visible list is empty (only meaningful when it is)
    pub fn empty_reason(&self) -> EmptyReason {
        view::empty_reason(
            &self.monitors,
            &self.query,
            self.show_all,
            self.error.as_deref(),
        )
    }

    /// Switch between the problem view and the full list
    pub fn toggle_show_all(&mut self) {
        self.show_all = !self.show_all;
        self.refresh_projection();
    }

    pub fn push_query_char(&mut self, c: char) {
        self.query.push(c);
        self.refresh_projection();
    }

    pub fn pop_query_char(&mut self) {
        self.query.pop();
        self.refresh_projection();
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
        self.refresh_projection();
    }

    /// Select next item (wraps around)
    pub fn select_next(&mut self) {
        if !self.visible.is_empty() {
            self.selected = (self.selected + 1) % self.visible.len();
        }
    }

    /// Select previous item (wraps around)
    pub fn select_previous(&mut self) {
        if !self.visible.is_empty() {
            self.selected = if self.selected == 0 {
                self.visible.len() - 1
            } else {
                self.selected - 1
            };
        }
    }

    /// Get the currently selected monitor
    pub fn selected_monitor(&self) -> Option<&Monitor> {
        self.visible.get(self.selected)
    }

    /// Show a transient notice in the footer
    pub fn notify(&mut self, kind: NoticeKind, text: impl Into<String>) {
        self.notice = Some(Notice::new(kind, text.into()));
    }

    /// Drop the notice once it has been on screen long enough
    pub fn expire_notice(&mut self) {
        if let Some(notice) = &self.notice
            && notice.expired()
        {
            self.notice = None;
        }
    }

    /// Title of the current view mode
    pub fn mode_title(&self) -> &'static str {
        if self.show_all {
            "All Monitors"
        } else {
            "Problem Monitors"
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(false)
    }
}
