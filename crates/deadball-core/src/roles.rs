//! Role classification: hitter vs pitcher, starter vs reliever.

use serde::{Deserialize, Serialize};

use crate::normalize::NormalizedPlayer;
use crate::record::{Field, RawPlayerRecord};

/// Maximum starters per team; the starter table is fixed-size.
pub const STARTER_CAP: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerKind {
    Hitter,
    Pitcher,
}

impl PlayerKind {
    /// Value of the `Type` column in game CSV output.
    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerKind::Hitter => "Hitter",
            PlayerKind::Pitcher => "Pitcher",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PitcherRole {
    Starter,
    Reliever,
}

impl PitcherRole {
    pub fn label(&self) -> &'static str {
        match self {
            PitcherRole::Starter => "SP",
            PitcherRole::Reliever => "RP",
        }
    }
}

/// A team's pitchers after the starter cap.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PitchingStaff {
    pub starters: Vec<NormalizedPlayer>,
    pub relievers: Vec<NormalizedPlayer>,
}

/// Pitcher iff the type hint equals "pitcher" ignoring case. Anything else,
/// including a missing hint, is a hitter.
pub fn classify(raw: &RawPlayerRecord) -> PlayerKind {
    if raw.text(Field::Kind).eq_ignore_ascii_case("pitcher") {
        PlayerKind::Pitcher
    } else {
        PlayerKind::Hitter
    }
}

/// Starter predicate: designation is `SP`, or it contains `D` and `sp`
/// (case-insensitive), or the pitcher has started games.
pub fn is_starter(designation: &str, games_started: Option<i64>) -> bool {
    let upper = designation.trim().to_uppercase();
    if upper == "SP" {
        return true;
    }
    if upper.contains('D') && upper.to_lowercase().contains("sp") {
        return true;
    }
    games_started.is_some_and(|gs| gs > 0)
}

/// Uncapped role of a single pitcher.
pub fn classify_pitcher_role(player: &NormalizedPlayer) -> PitcherRole {
    if is_starter(&player.pitcher_designation, player.games_started) {
        PitcherRole::Starter
    } else {
        PitcherRole::Reliever
    }
}

/// Split in input order; starters past the cap become relievers.
pub fn split_pitchers(pitchers: &[NormalizedPlayer]) -> PitchingStaff {
    let mut staff = PitchingStaff::default();
    for pitcher in pitchers {
        let role = classify_pitcher_role(pitcher);
        if role == PitcherRole::Starter && staff.starters.len() < STARTER_CAP {
            staff.starters.push(pitcher.clone());
        } else {
            staff.relievers.push(pitcher.clone());
        }
    }
    staff
}
