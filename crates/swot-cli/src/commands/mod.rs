//! Command implementations.

pub mod analyze;
pub mod config;

pub use self::analyze::execute_analyze;
pub use self::config::execute_config;
