//! Deadball scorecard conversion pipeline.
//!
//! Raw stat rows (JSON records, delimited text or an MLB boxscore) are
//! normalized, grouped by team, split into lineup/bench and starters/
//! relievers, and laid out as a fixed two-team scorecard. Everything here
//! is synchronous and free of I/O.

pub mod batting_order;
pub mod boxscore;
pub mod convert;
pub mod delimited;
pub mod error;
pub mod grouping;
pub mod layout;
pub mod normalize;
pub mod payload;
pub mod record;
pub mod roles;

pub use batting_order::{resolve_order, BattingOrder, LineupEntry, LINEUP_CAP};
pub use convert::{convert, Conversion};
pub use error::ConvertError;
pub use grouping::{group, select_teams, Matchup, TeamGroup, TeamGroups, TeamHints, UNLABELED_TEAM};
pub use layout::{
    layout, layout_game, BattingRow, GameInfo, GameScorecard, PitchingRow, ScorecardDocument,
    Scorebox, Side, INNING_COLUMNS,
};
pub use normalize::{normalize, NormalizedPlayer};
pub use payload::{RawPayload, TeamLabels};
pub use record::{Field, RawPlayerRecord};
pub use roles::{classify, split_pitchers, PitcherRole, PitchingStaff, PlayerKind, STARTER_CAP};
