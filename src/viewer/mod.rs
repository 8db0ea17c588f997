//! TUI Dashboard Module
//!
//! Provides a terminal user interface for browsing UptimeRobot monitors.

mod actions;
mod app;
mod state;
mod ui;

pub use app::App;
