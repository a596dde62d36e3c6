//! Deadball scorecard CLI
//!
//! Reads one stats or boxscore file, converts it, and writes the selected
//! renderings. The only crate in the workspace that touches the filesystem.

pub mod args;
pub mod config;
pub mod error;
pub mod run;

pub use args::Args;
pub use config::{Config, OutputFormat};
pub use error::CliError;
pub use run::run;
