use std::io;
use std::path::PathBuf;

use deadball_core::ConvertError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("no players found in {0}")]
    NoPlayers(String),

    #[error("no teams detected in {0}")]
    NoTeams(String),

    #[error("Conversion error: {0}")]
    Convert(#[from] ConvertError),

    #[error("Failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("Failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid date {0:?}, expected YYYY-MM-DD")]
    InvalidDate(String),
}

impl CliError {
    /// Attach the input name to the two empty-state conversion outcomes.
    pub fn from_convert(err: ConvertError, input: &str) -> Self {
        match err {
            ConvertError::NoPlayers => CliError::NoPlayers(input.to_string()),
            ConvertError::NoTeams => CliError::NoTeams(input.to_string()),
            other => CliError::Convert(other),
        }
    }

    pub fn is_empty_state(&self) -> bool {
        matches!(self, CliError::NoPlayers(_) | CliError::NoTeams(_))
    }
}
