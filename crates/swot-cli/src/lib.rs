//! SWOT reviewer CLI library.
//!
//! This library provides the core functionality for the `swot` command-line
//! interface, including configuration management, provider selection, input
//! loading, and output formatting.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod provider;
pub mod repl;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
pub use provider::Provider;
