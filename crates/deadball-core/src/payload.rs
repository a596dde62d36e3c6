//! Raw payload decoding: structured records, boxscores or delimited text.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::boxscore;
use crate::delimited::parse_delimited;
use crate::error::ConvertError;
use crate::grouping::TeamHints;
use crate::record::{value_text, RawPlayerRecord};

/// Team metadata carried alongside player records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamLabels {
    #[serde(default, alias = "away_team", skip_serializing_if = "Option::is_none")]
    pub away: Option<String>,
    #[serde(default, alias = "home_team", skip_serializing_if = "Option::is_none")]
    pub home: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub away_abbr: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_abbr: Option<String>,
}

impl TeamLabels {
    /// Lenient read of a `teams` object. Scalars of any type become their
    /// text form; anything but an object carries no labels.
    pub fn from_value(value: &Value) -> Option<Self> {
        let map = match value {
            Value::Object(map) => map,
            Value::Null => return None,
            other => {
                debug!("Ignoring non-object team metadata: {}", other);
                return None;
            }
        };
        Some(Self {
            away: first_text(map, &["away", "away_team"]),
            home: first_text(map, &["home", "home_team"]),
            away_abbr: first_text(map, &["away_abbr"]),
            home_abbr: first_text(map, &["home_abbr"]),
        })
    }

    pub fn hints(&self) -> TeamHints {
        TeamHints::new(self.away.clone(), self.home.clone())
    }
}

/// A payload as handed to `convert`.
#[derive(Debug, Clone, PartialEq)]
pub enum RawPayload {
    Records {
        players: Vec<RawPlayerRecord>,
        teams: Option<TeamLabels>,
    },
    Delimited(String),
}

impl RawPayload {
    pub fn records(players: Vec<RawPlayerRecord>) -> Self {
        RawPayload::Records {
            players,
            teams: None,
        }
    }

    /// JSON when the text opens with `{` or `[`, delimited text otherwise.
    pub fn detect(text: &str) -> Result<Self, ConvertError> {
        let trimmed = text.trim_start_matches('\u{feff}').trim_start();
        if trimmed.starts_with('{') || trimmed.starts_with('[') {
            let value: Value = serde_json::from_str(trimmed)?;
            Self::from_json(value)
        } else {
            Ok(RawPayload::Delimited(text.to_string()))
        }
    }

    /// Accepts `{"players": [...], "teams": {...}}`, a bare array of
    /// records, or an MLB Stats API boxscore.
    pub fn from_json(value: Value) -> Result<Self, ConvertError> {
        match value {
            Value::Array(items) => Ok(RawPayload::Records {
                players: object_records(items),
                teams: None,
            }),
            Value::Object(mut map) => {
                if let Some(players) = map.remove("players").filter(Value::is_array) {
                    let teams = map.remove("teams").and_then(|t| TeamLabels::from_value(&t));
                    let items = match players {
                        Value::Array(items) => items,
                        _ => Vec::new(),
                    };
                    return Ok(RawPayload::Records {
                        players: object_records(items),
                        teams,
                    });
                }

                let value = Value::Object(map);
                if boxscore::looks_like_boxscore(&value) {
                    let (players, teams) = boxscore::flatten(&value)?;
                    return Ok(RawPayload::Records {
                        players,
                        teams: Some(teams),
                    });
                }

                Err(ConvertError::InvalidPayload(
                    "expected a players list, a record array or a boxscore".into(),
                ))
            }
            other => Err(ConvertError::InvalidPayload(format!(
                "unsupported JSON value: {other}"
            ))),
        }
    }

    /// Raw records, parsing delimited text if needed.
    pub fn players(&self) -> Vec<RawPlayerRecord> {
        match self {
            RawPayload::Records { players, .. } => players.clone(),
            RawPayload::Delimited(text) => parse_delimited(text),
        }
    }

    pub fn teams(&self) -> Option<&TeamLabels> {
        match self {
            RawPayload::Records { teams, .. } => teams.as_ref(),
            RawPayload::Delimited(_) => None,
        }
    }
}

fn first_text(map: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| map.get(*key))
        .map(value_text)
        .find(|text| !text.is_empty())
}

fn object_records(items: Vec<Value>) -> Vec<RawPlayerRecord> {
    items
        .into_iter()
        .enumerate()
        .filter_map(|(i, item)| match item {
            Value::Object(map) => Some(RawPlayerRecord::from_map(map)),
            other => {
                debug!("Skipping non-object player entry {}: {}", i, other);
                None
            }
        })
        .collect()
}
