//! The single entry point: raw payload in, normalized players and a laid-out
//! two-team scorecard out.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ConvertError;
use crate::grouping::{group, select_teams, TeamHints};
use crate::layout::{layout_game, GameInfo, GameScorecard};
use crate::normalize::{normalize, NormalizedPlayer};
use crate::payload::{RawPayload, TeamLabels};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversion {
    pub players: Vec<NormalizedPlayer>,
    pub teams: Option<TeamLabels>,
    pub scorecard: GameScorecard,
}

/// Convert one payload.
///
/// Side selection precedence: explicit `hints`, then team metadata carried
/// by the payload, then encounter order. Fails with `NoPlayers` or `NoTeams`
/// instead of returning an empty document.
pub fn convert(
    payload: &RawPayload,
    hints: &TeamHints,
    info: &GameInfo,
) -> Result<Conversion, ConvertError> {
    let raw = payload.players();
    if raw.is_empty() {
        return Err(ConvertError::NoPlayers);
    }

    let players: Vec<NormalizedPlayer> = raw.iter().map(normalize).collect();
    let groups = group(&players);

    let teams = payload.teams().cloned();
    let effective = match &teams {
        Some(labels) => hints.clone().or(labels.hints()),
        None => hints.clone(),
    };

    let matchup = select_teams(&groups, &effective)?;
    let scorecard = layout_game(&groups, &matchup, info)?;

    info!(
        "Converted {} players into {} ({} team groups)",
        players.len(),
        scorecard.away.scorebox.title,
        groups.len()
    );

    Ok(Conversion {
        players,
        teams,
        scorecard,
    })
}
