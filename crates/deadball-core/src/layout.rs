//! Scorecard layout: composes ordering, roles and grouping into the fixed
//! per-team document both renderers consume.
//!
//! Table shapes here are a contract with external form consumers. The
//! inning count and both caps must not change independently of them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

pub use crate::batting_order::LINEUP_CAP;
pub use crate::roles::STARTER_CAP;

use crate::batting_order::{resolve_order, LineupEntry};
use crate::error::ConvertError;
use crate::grouping::{Matchup, TeamGroup, TeamGroups};
use crate::normalize::NormalizedPlayer;
use crate::roles::{split_pitchers, PitcherRole};

/// Blank inning columns on every lineup row.
pub const INNING_COLUMNS: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Away,
    Home,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Away => "away",
            Side::Home => "home",
        }
    }
}

/// Identifying parameters of the game being scored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameInfo {
    pub game_id: Option<String>,
    pub date: Option<NaiveDate>,
}

/// Header block shared by both team documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scorebox {
    pub away: String,
    pub home: String,
    pub title: String,
    pub game_id: Option<String>,
    pub date: Option<NaiveDate>,
    pub innings: usize,
}

impl Scorebox {
    pub fn new(away: &str, home: &str, info: &GameInfo) -> Self {
        Self {
            away: away.to_string(),
            home: home.to_string(),
            title: format!("{away} @ {home}"),
            game_id: info.game_id.clone(),
            date: info.date,
            innings: INNING_COLUMNS,
        }
    }
}

/// One lineup or bench row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattingRow {
    pub slot: Option<i64>,
    pub name: String,
    pub position: String,
    pub hand: String,
    pub batting_rate: String,
    pub on_base_rate: String,
    pub traits: String,
    pub innings: [String; INNING_COLUMNS],
}

impl BattingRow {
    fn new(slot: Option<i64>, player: &NormalizedPlayer) -> Self {
        Self {
            slot,
            name: player.name.clone(),
            position: player.positions.clone(),
            hand: first_filled(&[&player.bats, &player.hand, &player.throws]),
            batting_rate: player.batting_rate.clone(),
            on_base_rate: player.on_base_rate.clone(),
            traits: player.traits_text(),
            innings: std::array::from_fn(|_| String::new()),
        }
    }
}

/// One pitching table row. Innings pitched is left blank for the scorer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PitchingRow {
    pub role: PitcherRole,
    pub innings_pitched: String,
    pub name: String,
    pub designation: String,
    pub hand: String,
    pub batting_rate: String,
    pub on_base_rate: String,
    pub traits: String,
}

impl PitchingRow {
    fn new(role: PitcherRole, player: &NormalizedPlayer) -> Self {
        Self {
            role,
            innings_pitched: String::new(),
            name: player.name.clone(),
            designation: player.pitcher_designation.clone(),
            hand: first_filled(&[&player.throws, &player.hand, &player.bats]),
            batting_rate: player.batting_rate.clone(),
            on_base_rate: player.on_base_rate.clone(),
            traits: player.traits_text(),
        }
    }
}

fn first_filled(values: &[&String]) -> String {
    values
        .iter()
        .find(|v| !v.is_empty())
        .map(|v| v.to_string())
        .unwrap_or_default()
}

/// Laid-out scorecard for one team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScorecardDocument {
    pub team: String,
    pub side: Side,
    pub scorebox: Scorebox,
    pub lineup: Vec<LineupEntry>,
    pub bench: Vec<NormalizedPlayer>,
    pub starters: Vec<NormalizedPlayer>,
    pub relievers: Vec<NormalizedPlayer>,
}

impl ScorecardDocument {
    pub fn lineup_table(&self) -> Vec<BattingRow> {
        self.lineup
            .iter()
            .map(|e| BattingRow::new(Some(e.slot), &e.player))
            .collect()
    }

    pub fn bench_table(&self) -> Vec<BattingRow> {
        self.bench.iter().map(|p| BattingRow::new(None, p)).collect()
    }

    /// Starters first, then relievers.
    pub fn pitching_table(&self) -> Vec<PitchingRow> {
        self.starters
            .iter()
            .map(|p| PitchingRow::new(PitcherRole::Starter, p))
            .chain(
                self.relievers
                    .iter()
                    .map(|p| PitchingRow::new(PitcherRole::Reliever, p)),
            )
            .collect()
    }

    pub fn hitter_count(&self) -> usize {
        self.lineup.len() + self.bench.len()
    }

    pub fn pitcher_count(&self) -> usize {
        self.starters.len() + self.relievers.len()
    }
}

/// Both sides of one game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameScorecard {
    pub away: ScorecardDocument,
    pub home: ScorecardDocument,
}

impl GameScorecard {
    pub fn side(&self, side: Side) -> &ScorecardDocument {
        match side {
            Side::Away => &self.away,
            Side::Home => &self.home,
        }
    }
}

/// Lay out one team.
pub fn layout(side: Side, label: &str, group: &TeamGroup, scorebox: &Scorebox) -> ScorecardDocument {
    let order = resolve_order(&group.hitters);
    let staff = split_pitchers(&group.pitchers);

    ScorecardDocument {
        team: label.to_string(),
        side,
        scorebox: scorebox.clone(),
        lineup: order.starters,
        bench: order.bench,
        starters: staff.starters,
        relievers: staff.relievers,
    }
}

/// Lay out both sides. Zero players is `NoPlayers`; players with no
/// non-empty group (or a matchup naming an unknown group) is `NoTeams`.
pub fn layout_game(
    groups: &TeamGroups,
    matchup: &Matchup,
    info: &GameInfo,
) -> Result<GameScorecard, ConvertError> {
    if groups.player_count() == 0 {
        return Err(ConvertError::NoPlayers);
    }
    if groups.iter().all(TeamGroup::is_empty) {
        return Err(ConvertError::NoTeams);
    }

    let away = groups.get(&matchup.away).ok_or(ConvertError::NoTeams)?;
    let home = groups.get(&matchup.home).ok_or(ConvertError::NoTeams)?;
    let scorebox = Scorebox::new(&matchup.away, &matchup.home, info);

    let game = GameScorecard {
        away: layout(Side::Away, &matchup.away, away, &scorebox),
        home: layout(Side::Home, &matchup.home, home, &scorebox),
    };

    info!(
        "Laid out {}: away {} hitters/{} pitchers, home {} hitters/{} pitchers",
        scorebox.title,
        game.away.hitter_count(),
        game.away.pitcher_count(),
        game.home.hitter_count(),
        game.home.pitcher_count()
    );
    Ok(game)
}
