//! MLB Stats API boxscore flattening.
//!
//! Turns `{"teams": {"away": {...}, "home": {...}}}` into the same raw
//! records a stats CSV would carry, so boxscores go through the normal
//! pipeline. Ratings (BT, OBT, PD) and traits are derived from the
//! season stats embedded in the boxscore, falling back to game stats.

use std::collections::HashSet;

use serde_json::{json, Value};
use tracing::debug;

use crate::error::ConvertError;
use crate::payload::TeamLabels;
use crate::record::{value_text, RawPlayerRecord};

/// Shape check: a `teams` object holding an `away` or `home` side object.
pub fn looks_like_boxscore(value: &Value) -> bool {
    value
        .get("teams")
        .and_then(Value::as_object)
        .is_some_and(|teams| {
            ["away", "home"]
                .iter()
                .any(|side| teams.get(*side).is_some_and(Value::is_object))
        })
}

/// Flatten both sides into raw records plus the team labels found.
pub fn flatten(boxscore: &Value) -> Result<(Vec<RawPlayerRecord>, TeamLabels), ConvertError> {
    let teams = boxscore
        .get("teams")
        .and_then(Value::as_object)
        .ok_or_else(|| ConvertError::InvalidPayload("boxscore has no teams object".into()))?;

    let mut labels = TeamLabels::default();
    let mut hitters = Vec::new();
    let mut pitchers = Vec::new();
    let mut pitcher_names = HashSet::new();
    let mut sides = 0;

    for side in ["away", "home"] {
        let Some(entry) = teams.get(side).filter(|e| e.is_object()) else {
            continue;
        };
        sides += 1;

        let (name, abbr) = team_label(entry);
        match side {
            "away" => {
                labels.away = Some(name.clone());
                labels.away_abbr = Some(abbr);
            }
            _ => {
                labels.home = Some(name.clone());
                labels.home_abbr = Some(abbr);
            }
        }

        let players: Vec<&Value> = entry
            .get("players")
            .and_then(Value::as_object)
            .map(|m| m.values().collect())
            .unwrap_or_default();

        let mut side_hitters: Vec<(u32, u32, String, RawPlayerRecord)> = players
            .iter()
            .filter_map(|p| hitter_row(p, &name))
            .collect();
        side_hitters.sort_by(|a, b| (a.0, a.1, &a.2).cmp(&(b.0, b.1, &b.2)));
        hitters.extend(side_hitters.into_iter().map(|(_, _, _, row)| row));

        for player in &players {
            if let Some((pitcher_name, row)) = pitcher_row(player, &name) {
                pitcher_names.insert(pitcher_name);
                pitchers.push(row);
            }
        }
    }

    if sides == 0 {
        return Err(ConvertError::InvalidPayload(
            "boxscore is missing team data".into(),
        ));
    }

    // Pitchers who batted show up twice; keep only their pitcher row.
    hitters.retain(|row| {
        let is_pitcher_bat = row.get("Pos").and_then(Value::as_str) == Some("P")
            && row
                .get("Name")
                .and_then(Value::as_str)
                .is_some_and(|n| pitcher_names.contains(n));
        !is_pitcher_bat
    });

    debug!(
        "Flattened boxscore: {} hitter rows, {} pitcher rows",
        hitters.len(),
        pitchers.len()
    );

    hitters.extend(pitchers);
    Ok((hitters, labels))
}

/// Display name and abbreviation of one side.
pub fn team_label(entry: &Value) -> (String, String) {
    let team = entry.get("team").unwrap_or(&Value::Null);
    let text = |key: &str| {
        team.get(key)
            .map(value_text)
            .filter(|s| !s.is_empty())
    };

    let located = format!(
        "{} {}",
        text("locationName").unwrap_or_default(),
        text("teamName").unwrap_or_default()
    )
    .trim()
    .to_string();

    let name = text("name")
        .or_else(|| text("fullName"))
        .or_else(|| Some(located).filter(|s| !s.is_empty()))
        .or_else(|| text("clubName"))
        .unwrap_or_else(|| "Unknown".to_string());
    let abbr = text("abbreviation")
        .or_else(|| text("teamCode"))
        .unwrap_or_else(|| name.clone());
    (name, abbr)
}

/// `"100"` -> (1, 0, "1"), `"502"` -> (5, 2, "5.2"). Zero slot or junk -> `None`.
pub fn batting_order_code(raw: Option<&Value>) -> Option<(u32, u32, String)> {
    let code: u32 = value_text(raw?).parse().ok()?;
    let slot = code / 100;
    let sub = code % 100;
    if slot == 0 {
        return None;
    }
    let text = if sub == 0 {
        slot.to_string()
    } else {
        format!("{slot}.{sub}")
    };
    Some((slot, sub, text))
}

/// Declared position first, then every position played, de-duplicated.
pub fn positions(player: &Value) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    let mut add = |pos: Option<&Value>| {
        let Some(pos) = pos else { return };
        let code = pos
            .get("abbreviation")
            .or_else(|| pos.get("code"))
            .map(value_text)
            .unwrap_or_default();
        if !code.is_empty() && !out.contains(&code) {
            out.push(code);
        }
    };

    add(player.get("position"));
    if let Some(all) = player.get("allPositions").and_then(Value::as_array) {
        for pos in all {
            add(Some(pos));
        }
    }
    out
}

/// `0.283` -> `"28"`, `0.05` -> `"05"`.
pub fn two_digit(rate: f64) -> String {
    format!("{:02}", (rate * 100.0).round() as i64)
}

/// Baseball innings notation: `"5.2"` is five and two-thirds innings.
pub fn innings_to_float(raw: Option<&Value>) -> f64 {
    let text = raw.map(value_text).unwrap_or_default();
    match text.split_once('.') {
        Some((whole, outs)) => match (whole.parse::<f64>(), outs.parse::<f64>()) {
            (Ok(w), Ok(o)) => w + o / 3.0,
            _ => text.parse().unwrap_or(0.0),
        },
        None => text.parse().unwrap_or(0.0),
    }
}

/// Pitcher die from an ERA.
pub fn pitcher_die(era: f64) -> &'static str {
    match era {
        e if e < 2.0 => "d20",
        e if e < 3.0 => "d12",
        e if e < 4.0 => "d8",
        e if e < 5.0 => "d4",
        e if e < 6.0 => "-d4",
        e if e < 7.0 => "-d8",
        e if e < 8.0 => "-d12",
        _ => "-d20",
    }
}

/// Season batting line used for hitter traits.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BattingLine {
    pub home_runs: f64,
    pub doubles: f64,
    pub stolen_bases: f64,
    pub games: f64,
    pub fielding: Option<f64>,
}

pub fn batter_traits(line: &BattingLine, positions: &[String]) -> Vec<String> {
    let mut traits = Vec::new();

    let hr = line.home_runs;
    if hr >= 35.0 {
        traits.push("P++");
    } else if hr >= 25.0 {
        traits.push("P+");
    } else if hr < 5.0 {
        traits.push("P\u{2212}\u{2212}");
    } else if hr <= 10.0 {
        traits.push("P\u{2212}");
    }

    if line.doubles >= 35.0 {
        traits.push("C+");
    } else if line.doubles < 10.0 {
        traits.push("C\u{2212}");
    }

    if line.stolen_bases >= 20.0 {
        traits.push("S+");
    } else if line.stolen_bases == 0.0 {
        traits.push("S\u{2212}");
    }

    if let Some(f) = line.fielding {
        if f >= 0.998 {
            traits.push("D+");
        } else if f < 0.950 {
            traits.push("D\u{2212}");
        }
    }

    let iron_man = if positions.iter().any(|p| p == "C") {
        130.0
    } else {
        150.0
    };
    if line.games >= iron_man {
        traits.push("T+");
    }

    traits.into_iter().map(str::to_string).collect()
}

/// Pitching line used for the die and pitcher traits.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PitchingLine {
    pub innings: f64,
    pub era: Option<f64>,
    pub strikeouts: Option<f64>,
    pub walks: Option<f64>,
    pub ground_outs: Option<f64>,
    pub air_outs: Option<f64>,
    pub complete_games: f64,
    pub games_started: Option<i64>,
}

impl PitchingLine {
    fn from_stats(stats: &Value) -> Self {
        let innings = innings_to_float(stats.get("inningsPitched"));
        let earned = number(stats.get("earnedRuns"));
        let era = number(stats.get("era")).or_else(|| match earned {
            Some(er) if innings > 0.0 => Some(er * 9.0 / innings),
            _ => None,
        });
        Self {
            innings,
            era,
            strikeouts: number(stats.get("strikeOuts")),
            walks: number(stats.get("baseOnBalls")),
            ground_outs: number(stats.get("groundOuts")),
            air_outs: number(stats.get("airOuts")),
            complete_games: number(stats.get("completeGames")).unwrap_or(0.0),
            games_started: number(stats.get("gamesStarted")).map(|g| g as i64),
        }
    }

    fn per_nine(&self, count: Option<f64>) -> Option<f64> {
        count.filter(|_| self.innings > 0.0).map(|c| c * 9.0 / self.innings)
    }

    fn ground_ball_pct(&self) -> Option<f64> {
        match (self.ground_outs, self.air_outs) {
            (Some(gb), Some(fb)) if gb + fb > 0.0 => Some(gb / (gb + fb) * 100.0),
            _ => None,
        }
    }
}

pub fn pitcher_traits(line: &PitchingLine) -> Vec<String> {
    let mut traits = Vec::new();
    if line.per_nine(line.strikeouts).is_some_and(|k9| k9 >= 10.0) {
        traits.push("K+");
    }
    if line.ground_ball_pct().is_some_and(|gb| gb >= 55.0) {
        traits.push("GB+");
    }
    match line.per_nine(line.walks) {
        Some(bb9) if bb9 < 2.0 => traits.push("CN+"),
        Some(bb9) if bb9 >= 4.0 => traits.push("CN\u{2212}"),
        _ => {}
    }
    if line.innings >= 200.0 || line.complete_games > 0.0 {
        traits.push("ST+");
    }
    traits.into_iter().map(str::to_string).collect()
}

fn number(v: Option<&Value>) -> Option<f64> {
    let parsed = match v? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|f| f.is_finite())
}

fn full_name(player: &Value) -> Option<String> {
    player
        .get("person")
        .and_then(|p| p.get("fullName"))
        .map(value_text)
        .filter(|s| !s.is_empty())
}

fn hand_code(player: &Value, key: &str) -> String {
    player
        .get(key)
        .or_else(|| player.get("person").and_then(|p| p.get(key)))
        .and_then(|h| h.get("code"))
        .map(value_text)
        .unwrap_or_default()
}

fn season<'a>(player: &'a Value, group: &str) -> Option<&'a Value> {
    player
        .get("seasonStats")
        .and_then(|s| s.get(group))
        .filter(|s| s.as_object().is_some_and(|m| !m.is_empty()))
}

fn hitter_row(player: &Value, team: &str) -> Option<(u32, u32, String, RawPlayerRecord)> {
    let (slot, sub, order) = batting_order_code(player.get("battingOrder"))?;
    let name = full_name(player)?;
    let all = positions(player);
    let primary = all.first().cloned().unwrap_or_default();
    let bats = hand_code(player, "batSide");

    let mut row = RawPlayerRecord::new()
        .with("Type", "Hitter")
        .with("Team", team)
        .with("BatOrder", order)
        .with("Name", name.clone())
        .with("Pos", primary)
        .with("Positions", all.join(","))
        .with("LR", bats.clone())
        .with("Hand", bats)
        .with("Throws", hand_code(player, "pitchHand"));

    if let Some(batting) = season(player, "batting") {
        if let Some(avg) = number(batting.get("avg")) {
            row.insert("BT", two_digit(avg));
        }
        if let Some(obp) = number(batting.get("obp")) {
            row.insert("OBT", two_digit(obp));
        }
        let line = BattingLine {
            home_runs: number(batting.get("homeRuns")).unwrap_or(0.0),
            doubles: number(batting.get("doubles")).unwrap_or(0.0),
            stolen_bases: number(batting.get("stolenBases")).unwrap_or(0.0),
            games: number(batting.get("gamesPlayed")).unwrap_or(1.0),
            fielding: season(player, "fielding").and_then(|f| number(f.get("fielding"))),
        };
        row.insert("Traits", json!(batter_traits(&line, &all)));
    }

    Some((slot, sub, name, row))
}

fn pitcher_row(player: &Value, team: &str) -> Option<(String, RawPlayerRecord)> {
    let game = player
        .get("stats")
        .and_then(|s| s.get("pitching"))
        .filter(|s| s.as_object().is_some_and(|m| !m.is_empty()))?;
    let name = full_name(player)?;

    let game_line = PitchingLine::from_stats(game);
    let season_line = season(player, "pitching").map(PitchingLine::from_stats);
    let rating_line = season_line.as_ref().unwrap_or(&game_line);

    let all = positions(player);
    let primary = all.first().cloned().unwrap_or_else(|| "P".to_string());
    let positions = if all.is_empty() { "P".to_string() } else { all.join(",") };

    let throws = match hand_code(player, "pitchHand") {
        t if t.is_empty() => hand_code(player, "batSide"),
        t => t,
    };

    let mut row = RawPlayerRecord::new()
        .with("Type", "Pitcher")
        .with("Team", team)
        .with("Name", name.clone())
        .with("Pos", primary)
        .with("Positions", positions)
        .with("Hand", throws.clone())
        .with("Throws", throws)
        .with("Traits", json!(pitcher_traits(rating_line)));

    let era = season_line.as_ref().and_then(|l| l.era).or(game_line.era);
    if let Some(era) = era {
        row.insert("PD", pitcher_die(era));
    }
    if let Some(gs) = game_line.games_started {
        row.insert("GS", gs);
    }

    Some((name, row))
}
