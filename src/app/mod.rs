//! Main application modules.
//!
//! This module provides input reading, report rendering and statistics
//! printing used around the comparison core.

pub mod input;
pub mod render;
pub mod statistics;

// Re-export public API
pub use render::{render, render_json, render_text};
pub use statistics::summary_line;
