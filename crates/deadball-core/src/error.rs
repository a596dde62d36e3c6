//! Conversion error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    /// The payload normalized to zero player records.
    #[error("No players found in payload")]
    NoPlayers,

    /// Players exist but none of them landed in a usable team group.
    #[error("No teams detected in payload")]
    NoTeams,

    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ConvertError {
    /// True for the two "nothing to render" outcomes callers show as an empty state.
    pub fn is_empty_state(&self) -> bool {
        matches!(self, ConvertError::NoPlayers | ConvertError::NoTeams)
    }
}
