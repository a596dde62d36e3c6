//! Field normalization: raw record -> canonical `NormalizedPlayer`.
//!
//! Every helper here has a defined fallback. A bad value degrades the one
//! field it belongs to and never fails the record.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::record::{format_float, value_text, Field, RawPlayerRecord};
use crate::roles::{self, PlayerKind};

/// Canonical per-player form consumed by grouping, ordering and layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedPlayer {
    pub name: String,
    pub team: String,
    pub kind: PlayerKind,
    pub positions: String,
    pub bats: String,
    pub throws: String,
    pub hand: String,
    pub batting_rate: String,
    pub on_base_rate: String,
    pub pitcher_designation: String,
    pub games_started: Option<i64>,
    /// Batting-order text as received, used as the sort key.
    pub batting_order: Option<String>,
    pub batting_order_slot: Option<i64>,
    pub traits: Vec<String>,
    /// Display form of the traits value, exactly as `format_traits` gives it.
    pub traits_display: String,
}

impl NormalizedPlayer {
    /// The single rendered form of the traits.
    pub fn traits_text(&self) -> String {
        self.traits_display.clone()
    }
}

/// Normalize one raw record. The slot is derived from the original order
/// field and never recomputed downstream.
pub fn normalize(raw: &RawPlayerRecord) -> NormalizedPlayer {
    let order_value = raw.lookup(Field::BattingOrder);
    let batting_order = order_value.map(value_text).filter(|s| !s.is_empty());
    let batting_order_slot = leading_integer(order_value);

    if batting_order.is_some() && batting_order_slot.is_none() {
        debug!(
            "Unparseable batting order {:?} for {:?}, player goes to bench",
            batting_order,
            raw.text(Field::Name)
        );
    }

    NormalizedPlayer {
        name: raw.text(Field::Name),
        team: raw.text(Field::Team),
        kind: roles::classify(raw),
        positions: raw.text(Field::Positions),
        bats: raw.text(Field::Bats),
        throws: raw.text(Field::Throws),
        hand: raw.text(Field::Hand),
        batting_rate: format_rate(&raw.text(Field::BattingRate)),
        on_base_rate: format_rate(&raw.text(Field::OnBaseRate)),
        pitcher_designation: raw.text(Field::PitcherDesignation),
        games_started: leading_integer(raw.lookup(Field::GamesStarted)),
        batting_order,
        batting_order_slot,
        traits: split_traits(raw.lookup(Field::Traits)),
        traits_display: format_traits(raw.lookup(Field::Traits)),
    }
}

/// Integer part of a dot-delimited numeric value: `"3.5"` -> 3,
/// `"3.corrupted"` -> 3, `null`/`""`/`"abc"` -> `None`.
pub fn leading_integer(value: Option<&Value>) -> Option<i64> {
    let text = value_text(value?);
    let head = text.split('.').next()?.trim();
    if head.is_empty() {
        return None;
    }
    head.parse::<i64>().ok()
}

/// Full float parse of a batting-order text, for sorting only.
pub fn order_sort_key(order: Option<&str>) -> Option<f64> {
    order?
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|key| key.is_finite())
}

/// Display form of a rate stat: `"28.0"` -> `"28"`, `"0.280"` -> `"0.28"`.
/// Non-numeric text is kept as is.
pub fn format_rate(text: &str) -> String {
    let trimmed = text.trim();
    match trimmed.parse::<f64>() {
        Ok(f) if f.is_finite() => format_float(f),
        _ => trimmed.to_string(),
    }
}

/// How a traits value was encoded upstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraitsSource {
    /// A list: native, JSON-encoded or a bracketed repr string.
    Sequence(Vec<String>),
    /// Free text; commas act as separators.
    Delimited(String),
}

impl TraitsSource {
    pub fn decode(value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null) => TraitsSource::Delimited(String::new()),
            Some(Value::Array(items)) => TraitsSource::Sequence(sequence_items(items)),
            Some(Value::String(s)) => Self::decode_text(s),
            Some(other) => TraitsSource::Delimited(value_text(other)),
        }
    }

    /// Strip one level of wrapping quotes, then try a JSON list, a JSON
    /// object (`key:value` items) and a bracketed repr list like
    /// `['GB', 'K']` before falling back to delimited text.
    fn decode_text(raw: &str) -> Self {
        let text = strip_wrapping_quotes(raw.trim()).trim();
        if text.is_empty() {
            return TraitsSource::Delimited(String::new());
        }

        match serde_json::from_str::<Value>(text) {
            Ok(Value::Array(items)) => return TraitsSource::Sequence(sequence_items(&items)),
            Ok(Value::Object(map)) => {
                let items: Vec<Value> = map
                    .iter()
                    .map(|(k, v)| Value::String(format!("{}:{}", k, value_text(v))))
                    .collect();
                return TraitsSource::Sequence(sequence_items(&items));
            }
            _ => {}
        }

        if let Some(inner) = text.strip_prefix('[').and_then(|t| t.strip_suffix(']')) {
            let items = inner
                .split(',')
                .map(|seg| seg.trim_matches(|c| c == ' ' || c == '\'' || c == '"'))
                .filter(|seg| !seg.is_empty())
                .map(str::to_string)
                .collect();
            return TraitsSource::Sequence(items);
        }

        debug!("Traits {:?} decoded as delimited text", text);
        TraitsSource::Delimited(text.to_string())
    }
}

fn strip_wrapping_quotes(text: &str) -> &str {
    for quote in ['"', '\''] {
        if text.len() >= 2 && text.starts_with(quote) && text.ends_with(quote) {
            return &text[1..text.len() - 1];
        }
    }
    text
}

fn sequence_items(items: &[Value]) -> Vec<String> {
    items
        .iter()
        .map(|v| value_text(v).replace(',', " ").trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Single space-joined display string. Commas never survive.
pub fn format_traits(value: Option<&Value>) -> String {
    match TraitsSource::decode(value) {
        TraitsSource::Sequence(items) => items.join(" "),
        TraitsSource::Delimited(text) => text.replace(',', " ").trim().to_string(),
    }
}

/// Ordered trait tokens stored on the player.
pub fn split_traits(value: Option<&Value>) -> Vec<String> {
    match TraitsSource::decode(value) {
        TraitsSource::Sequence(items) => items,
        TraitsSource::Delimited(text) => text
            .replace(',', " ")
            .split_whitespace()
            .map(str::to_string)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_leading_integer() {
        assert_eq!(leading_integer(Some(&json!("3.5"))), Some(3));
        assert_eq!(leading_integer(Some(&json!("3.corrupted"))), Some(3));
        assert_eq!(leading_integer(Some(&json!(7))), Some(7));
        assert_eq!(leading_integer(Some(&json!(4.9))), Some(4));
        assert_eq!(leading_integer(Some(&json!(""))), None);
        assert_eq!(leading_integer(Some(&json!("abc"))), None);
        assert_eq!(leading_integer(Some(&json!(null))), None);
        assert_eq!(leading_integer(None), None);
    }

    #[test]
    fn test_order_sort_key() {
        assert_eq!(order_sort_key(Some("4.9")), Some(4.9));
        assert_eq!(order_sort_key(Some("3.corrupted")), None);
        assert_eq!(order_sort_key(Some("NaN")), None);
        assert_eq!(order_sort_key(None), None);
    }

    #[test]
    fn test_format_traits_delimited_string() {
        assert_eq!(format_traits(Some(&json!("Fast,Clutch"))), "Fast Clutch");
    }

    #[test]
    fn test_format_traits_sequence_and_encoded_list() {
        assert_eq!(format_traits(Some(&json!(["P+", "S-"]))), "P+ S-");
        assert_eq!(format_traits(Some(&json!("[\"K+\",\"CN+\"]"))), "K+ CN+");
        assert_eq!(format_traits(Some(&json!(["a,b"]))), "a b");
    }

    #[test]
    fn test_format_traits_repr_list() {
        assert_eq!(format_traits(Some(&json!("['GB', 'K']"))), "GB K");
        assert_eq!(
            TraitsSource::decode(Some(&json!("['GB', 'K']"))),
            TraitsSource::Sequence(vec!["GB".to_string(), "K".to_string()])
        );
    }

    #[test]
    fn test_format_traits_wrapping_quotes() {
        assert_eq!(format_traits(Some(&json!("\"[\"GB\", \"K\"]\""))), "GB K");
        assert_eq!(format_traits(Some(&json!("'[\"P+\", \"S-\"]'"))), "P+ S-");
        assert!(matches!(
            TraitsSource::decode(Some(&json!("'['CN+']'"))),
            TraitsSource::Sequence(items) if items == vec!["CN+".to_string()]
        ));
    }

    #[test]
    fn test_format_traits_empty() {
        assert_eq!(format_traits(None), "");
        assert_eq!(format_traits(Some(&json!(null))), "");
        assert_eq!(format_traits(Some(&json!(""))), "");
    }

    #[test]
    fn test_format_traits_idempotent() {
        let once = format_traits(Some(&json!("D+, T+,P++")));
        let twice = format_traits(Some(&Value::String(once.clone())));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_split_traits_keeps_sequence_items() {
        assert_eq!(
            split_traits(Some(&json!(["Power Hitter", "S+"]))),
            vec!["Power Hitter".to_string(), "S+".to_string()]
        );
        assert_eq!(
            split_traits(Some(&json!("Fast,Clutch"))),
            vec!["Fast".to_string(), "Clutch".to_string()]
        );
    }

    #[test]
    fn test_format_rate() {
        assert_eq!(format_rate("28.0"), "28");
        assert_eq!(format_rate("0.280"), "0.28");
        assert_eq!(format_rate("n/a"), "n/a");
        assert_eq!(format_rate(""), "");
    }

    #[test]
    fn test_normalize_slot_round_trip() {
        let raw = RawPlayerRecord::new()
            .with("Name", "Ada")
            .with("Team", "Owls")
            .with("battingOrder", "3.1");
        let player = normalize(&raw);
        assert_eq!(player.batting_order_slot, Some(3));
        assert_eq!(player.batting_order.as_deref(), Some("3.1"));

        let raw = RawPlayerRecord::new().with("Name", "Bo").with("battingOrder", Value::Null);
        let player = normalize(&raw);
        assert_eq!(player.batting_order_slot, None);
        assert_eq!(player.batting_order, None);
    }

    #[test]
    fn test_normalize_fields() {
        let raw = RawPlayerRecord::new()
            .with("name", "Cy")
            .with("team", "Owls")
            .with("Type", "Pitcher")
            .with("Pos", "P")
            .with("Throws", "R")
            .with("BT", 12.0)
            .with("OBT", "15")
            .with("PD", "d8")
            .with("GS", "4")
            .with("Traits", json!(["K+"]));
        let player = normalize(&raw);
        assert_eq!(player.kind, PlayerKind::Pitcher);
        assert_eq!(player.batting_rate, "12");
        assert_eq!(player.games_started, Some(4));
        assert_eq!(player.traits_text(), "K+");

        let raw = RawPlayerRecord::new().with("Name", "Di").with("Traits", "Fast, Clutch");
        let player = normalize(&raw);
        assert_eq!(player.traits, vec!["Fast".to_string(), "Clutch".to_string()]);
        assert_eq!(player.traits_text(), "Fast  Clutch");
        assert_eq!(player.positions, "P");
    }
}
