//! Raw per-player records and the field-alias table.
//!
//! Upstream sources disagree on column names (`Hand` vs `LR`, `BatOrder` vs
//! `battingOrder`, ...). Every logical attribute is resolved through one
//! prioritized alias list, here, so the rest of the pipeline never looks at
//! source-specific keys.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One stat row exactly as received: column name -> value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawPlayerRecord(Map<String, Value>);

/// Logical attributes the pipeline reads from a raw record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Team,
    Kind,
    BattingOrder,
    Positions,
    Bats,
    Throws,
    Hand,
    BattingRate,
    OnBaseRate,
    PitcherDesignation,
    GamesStarted,
    Traits,
}

impl Field {
    /// Source column names for this attribute, highest priority first.
    pub const fn aliases(self) -> &'static [&'static str] {
        match self {
            Field::Name => &["Name", "name", "fullName", "player"],
            Field::Team => &["Team", "team", "teamName"],
            Field::Kind => &["Type", "type", "Role", "role"],
            Field::BattingOrder => &["BatOrder", "batOrder", "battingOrder", "bat_order", "BattingOrder"],
            Field::Positions => &["Pos", "Positions", "pos", "positions", "Position"],
            Field::Bats => &["LR", "Bats", "lr", "bats"],
            Field::Throws => &["Throws", "throws"],
            Field::Hand => &["Hand", "hand"],
            Field::BattingRate => &["BT", "bt"],
            Field::OnBaseRate => &["OBT", "obt"],
            Field::PitcherDesignation => &["PD", "pd"],
            Field::GamesStarted => &["GS", "gs", "gamesStarted", "games_started"],
            Field::Traits => &["Traits", "traits"],
        }
    }
}

impl RawPlayerRecord {
    pub fn new() -> Self {
        Self(Map::new())
    }

    pub fn from_map(map: Map<String, Value>) -> Self {
        Self(map)
    }

    /// Builder-style insert, handy for fixtures and the boxscore flattener.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Resolve a logical field: exact alias match in priority order, then the
    /// same aliases compared case-insensitively. Null and blank strings count
    /// as absent so a later alias can still supply the value.
    pub fn lookup(&self, field: Field) -> Option<&Value> {
        let aliases = field.aliases();

        for alias in aliases {
            if let Some(v) = self.0.get(*alias).filter(|v| is_present(v)) {
                return Some(v);
            }
        }

        for alias in aliases {
            let hit = self
                .0
                .iter()
                .find(|(k, v)| k.eq_ignore_ascii_case(alias) && is_present(v))
                .map(|(_, v)| v);
            if hit.is_some() {
                return hit;
            }
        }

        None
    }

    /// Display text of a logical field, `""` when absent.
    pub fn text(&self, field: Field) -> String {
        self.lookup(field).map(value_text).unwrap_or_default()
    }
}

fn is_present(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::String(s) => !s.trim().is_empty(),
        _ => true,
    }
}

/// Canonical text form of a raw value.
pub fn value_text(v: &Value) -> String {
    match v {
        Value::Null => String::new(),
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i.to_string()
            } else if let Some(u) = n.as_u64() {
                u.to_string()
            } else {
                n.as_f64().map(format_float).unwrap_or_default()
            }
        }
        Value::Bool(b) => b.to_string(),
        Value::Array(items) => items
            .iter()
            .map(value_text)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => v.to_string(),
    }
}

/// `28.0` -> `"28"`, `0.28` -> `"0.28"`.
pub fn format_float(f: f64) -> String {
    if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 {
        format!("{}", f as i64)
    } else {
        format!("{f}")
    }
}
