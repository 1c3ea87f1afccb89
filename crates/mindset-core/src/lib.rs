//! mindset-core
//!
//! Pure domain types shared by every Mindset crate: ratings, the sparse
//! answer set, the view mode, and the report shapes handed to renderers.

pub mod error;
pub mod models;
