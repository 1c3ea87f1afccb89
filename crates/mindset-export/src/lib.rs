//! mindset-export
//!
//! Turns an assessment report into something a person or a chart can read:
//! the text summary (Tera templates), terminal radar bars, and JSON.

pub mod chart;
pub mod error;
pub mod render;
pub mod styles;
