//! Batting order resolution: starting lineup slots 1-9 and bench.

use std::cmp::Ordering;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::normalize::{order_sort_key, NormalizedPlayer};

/// Maximum starting lineup size.
pub const LINEUP_CAP: usize = 9;

/// A starter tagged with the slot it claimed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineupEntry {
    pub slot: i64,
    pub player: NormalizedPlayer,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BattingOrder {
    pub starters: Vec<LineupEntry>,
    pub bench: Vec<NormalizedPlayer>,
}

/// Parsed keys ascend, unparsed keys sort after parsed ones, two unparsed
/// keys compare equal so a stable sort keeps input order.
pub fn compare_order_keys(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

pub fn resolve_order(hitters: &[NormalizedPlayer]) -> BattingOrder {
    let mut sorted: Vec<&NormalizedPlayer> = hitters.iter().collect();
    sorted.sort_by(|a, b| {
        compare_order_keys(
            order_sort_key(a.batting_order.as_deref()),
            order_sort_key(b.batting_order.as_deref()),
        )
    });

    let mut order = BattingOrder::default();
    let mut claimed = HashSet::new();

    for player in sorted {
        match player.batting_order_slot {
            Some(slot) if order.starters.len() < LINEUP_CAP && claimed.insert(slot) => {
                order.starters.push(LineupEntry {
                    slot,
                    player: player.clone(),
                });
            }
            _ => order.bench.push(player.clone()),
        }
    }

    debug!(
        "Resolved batting order: {} starters, {} bench",
        order.starters.len(),
        order.bench.len()
    );
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;
    use crate::record::RawPlayerRecord;
    use serde_json::Value;

    fn hitter(name: &str, order: impl Into<Value>) -> NormalizedPlayer {
        normalize(&RawPlayerRecord::new().with("Name", name).with("BatOrder", order))
    }

    fn names(players: &[NormalizedPlayer]) -> Vec<&str> {
        players.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_compare_order_keys() {
        assert_eq!(compare_order_keys(Some(1.0), Some(2.0)), Ordering::Less);
        assert_eq!(compare_order_keys(Some(9.0), None), Ordering::Less);
        assert_eq!(compare_order_keys(None, Some(1.0)), Ordering::Greater);
        assert_eq!(compare_order_keys(None, None), Ordering::Equal);
    }

    #[test]
    fn test_duplicate_slots_fall_to_bench() {
        let order = resolve_order(&[
            hitter("first", "4.0"),
            hitter("second", "4.0"),
            hitter("third", "4.9"),
        ]);
        assert_eq!(order.starters.len(), 1);
        assert_eq!(order.starters[0].slot, 4);
        assert_eq!(order.starters[0].player.name, "first");
        assert_eq!(names(&order.bench), vec!["second", "third"]);
    }

    #[test]
    fn test_sorted_by_order_value() {
        let order = resolve_order(&[hitter("c", "3"), hitter("a", "1"), hitter("b", "2.1")]);
        let slots: Vec<i64> = order.starters.iter().map(|e| e.slot).collect();
        assert_eq!(slots, vec![1, 2, 3]);
        assert!(order.bench.is_empty());
    }

    #[test]
    fn test_missing_order_always_bench() {
        let order = resolve_order(&[hitter("x", Value::Null), hitter("a", "1"), hitter("y", "abc")]);
        assert_eq!(order.starters.len(), 1);
        assert_eq!(names(&order.bench), vec!["x", "y"]);
    }

    #[test]
    fn test_corrupted_order_sorts_last_but_keeps_slot() {
        // "3.corrupted" has no sort key but its integer part is still slot 3.
        let order = resolve_order(&[hitter("late", "3.corrupted"), hitter("a", "1")]);
        assert_eq!(order.starters[0].player.name, "a");
        assert_eq!(order.starters[1].slot, 3);
    }

    #[test]
    fn test_lineup_cap() {
        let hitters: Vec<_> = (1..=11).map(|i| hitter(&format!("h{i}"), i)).collect();
        let order = resolve_order(&hitters);
        assert_eq!(order.starters.len(), LINEUP_CAP);
        assert_eq!(names(&order.bench), vec!["h10", "h11"]);
    }
}
