//! Team grouping and away/home selection.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::ConvertError;
use crate::normalize::NormalizedPlayer;
use crate::roles::PlayerKind;

/// Bucket for records without a team label.
pub const UNLABELED_TEAM: &str = "Team";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamGroup {
    pub label: String,
    pub hitters: Vec<NormalizedPlayer>,
    pub pitchers: Vec<NormalizedPlayer>,
}

impl TeamGroup {
    fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            hitters: Vec::new(),
            pitchers: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.hitters.len() + self.pitchers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hitters.is_empty() && self.pitchers.is_empty()
    }
}

/// Team groups in the order their labels were first seen.
#[derive(Debug, Clone, Default)]
pub struct TeamGroups {
    groups: Vec<TeamGroup>,
    index: HashMap<String, usize>,
}

impl TeamGroups {
    pub fn get(&self, label: &str) -> Option<&TeamGroup> {
        self.index.get(label).and_then(|&i| self.groups.get(i))
    }

    pub fn iter(&self) -> impl Iterator<Item = &TeamGroup> {
        self.groups.iter()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.groups.iter().map(|g| g.label.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Players across every group.
    pub fn player_count(&self) -> usize {
        self.groups.iter().map(TeamGroup::len).sum()
    }

    fn entry(&mut self, label: &str) -> &mut TeamGroup {
        let i = match self.index.get(label) {
            Some(&i) => i,
            None => {
                self.groups.push(TeamGroup::new(label));
                let i = self.groups.len() - 1;
                self.index.insert(label.to_string(), i);
                i
            }
        };
        &mut self.groups[i]
    }
}

/// Caller-supplied away/home labels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamHints {
    pub away: Option<String>,
    pub home: Option<String>,
}

impl TeamHints {
    pub fn new(away: Option<String>, home: Option<String>) -> Self {
        let clean = |s: Option<String>| s.map(|s| s.trim().to_string()).filter(|s| !s.is_empty());
        Self {
            away: clean(away),
            home: clean(home),
        }
    }

    /// Fill sides this set leaves open from `other`.
    pub fn or(self, other: TeamHints) -> TeamHints {
        TeamHints {
            away: self.away.or(other.away),
            home: self.home.or(other.home),
        }
    }
}

/// Chosen group labels for the two sides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Matchup {
    pub away: String,
    pub home: String,
}

impl Matchup {
    /// True when one team fills both sides.
    pub fn is_duplicated(&self) -> bool {
        self.away == self.home
    }
}

/// Partition players by team label, hitters and pitchers in input order.
pub fn group(players: &[NormalizedPlayer]) -> TeamGroups {
    let mut groups = TeamGroups::default();
    for player in players {
        let label = match player.team.trim() {
            "" => UNLABELED_TEAM,
            label => label,
        };
        let group = groups.entry(label);
        match player.kind {
            PlayerKind::Hitter => group.hitters.push(player.clone()),
            PlayerKind::Pitcher => group.pitchers.push(player.clone()),
        }
    }
    for g in groups.iter() {
        debug!(
            "Team group {:?}: {} hitters, {} pitchers",
            g.label,
            g.hitters.len(),
            g.pitchers.len()
        );
    }
    groups
}

static NON_KEY_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]").expect("team key pattern compiles"));

/// Lowercase and keep only ASCII letters and digits: `"St. Louis"` -> `"stlouis"`.
pub fn normalize_team_key(label: &str) -> String {
    NON_KEY_CHARS
        .replace_all(&label.to_lowercase(), "")
        .into_owned()
}

fn resolve_hint<'a>(hint: &str, candidates: &[&'a TeamGroup]) -> Option<&'a TeamGroup> {
    if let Some(g) = candidates.iter().find(|g| g.label == hint) {
        return Some(*g);
    }

    let key = normalize_team_key(hint);
    if key.is_empty() {
        return None;
    }
    if let Some(g) = candidates.iter().find(|g| normalize_team_key(&g.label) == key) {
        return Some(*g);
    }
    candidates
        .iter()
        .find(|g| {
            let group_key = normalize_team_key(&g.label);
            !group_key.is_empty() && (group_key.contains(&key) || key.contains(&group_key))
        })
        .copied()
}

fn resolve_side<'a>(
    side: &str,
    hint: Option<&str>,
    candidates: &[&'a TeamGroup],
) -> Option<&'a TeamGroup> {
    let hint = hint?;
    let found = resolve_hint(hint, candidates);
    if found.is_none() {
        warn!("{} team hint {:?} matches no team in the payload", side, hint);
    }
    found
}

/// First candidate that is not `taken`.
fn first_other<'a>(candidates: &[&'a TeamGroup], taken: Option<&TeamGroup>) -> Option<&'a TeamGroup> {
    candidates
        .iter()
        .find(|g| taken.map_or(true, |t| t.label != g.label))
        .copied()
}

/// Pick the away and home groups.
///
/// Hints win when they resolve; open sides take the first unused non-empty
/// group in encounter order. A lone team fills both sides.
pub fn select_teams(groups: &TeamGroups, hints: &TeamHints) -> Result<Matchup, ConvertError> {
    let candidates: Vec<&TeamGroup> = groups.iter().filter(|g| !g.is_empty()).collect();
    if candidates.is_empty() {
        return Err(ConvertError::NoTeams);
    }

    let hinted_away = resolve_side("Away", hints.away.as_deref(), &candidates);
    let hinted_home = resolve_side("Home", hints.home.as_deref(), &candidates);

    let away = match hinted_away {
        Some(g) => g,
        None => first_other(&candidates, hinted_home).unwrap_or(candidates[0]),
    };
    let mut home = match hinted_home {
        Some(g) => g,
        None => first_other(&candidates, Some(away)).unwrap_or(away),
    };

    if home.label == away.label {
        if let Some(other) = first_other(&candidates, Some(away)) {
            home = other;
        }
    }

    let matchup = Matchup {
        away: away.label.clone(),
        home: home.label.clone(),
    };
    if matchup.is_duplicated() {
        warn!(
            "Only one team ({:?}) in payload, using it for both sides",
            matchup.away
        );
    }
    Ok(matchup)
}
