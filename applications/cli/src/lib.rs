//! Moodtune terminal application
//!
//! Configuration loading, input parsing and terminal rendering shared by the `moodtune`
//! binary's subcommands.

pub mod config;
pub mod error;
pub mod input;
pub mod render;

pub use config::AppConfig;
pub use error::{CliError, Result};
