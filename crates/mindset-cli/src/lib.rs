//! mindset-cli library root.
//!
//! Re-exports the session controller, config layer and prompt loop so
//! integration tests can drive them without going through clap.

pub mod config;
pub mod prompt;
pub mod session;
