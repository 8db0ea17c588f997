//! UI rendering module

mod layout;
mod monitors;

pub use layout::render;
