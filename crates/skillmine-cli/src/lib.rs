//! Skillmine CLI library.
//!
//! Argument parsing, configuration file handling, the scan command and terminal
//! output for the `skillmine` binary.

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod scan;

pub use cli::Cli;
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
pub use scan::ScanOutcome;
