//! Field-name -> value map for the printable two-page scorecard form.
//!
//! Names follow the form template: `<SIDE><COLUMN>.<row>`, e.g. `AWAYNAME.0`
//! or `HOMEPITCHPD.3`. Rows past the template's capacity are left out.

use std::collections::BTreeMap;

use deadball_core::{GameScorecard, ScorecardDocument, Side};
use tracing::debug;

/// Lineup rows on the form.
pub const FORM_LINEUP_ROWS: usize = 9;
/// Bench rows on the form.
pub const FORM_BENCH_ROWS: usize = 5;
/// Pitching rows on the form.
pub const FORM_PITCHING_ROWS: usize = 12;

pub fn form_fields(game: &GameScorecard) -> BTreeMap<String, String> {
    let mut fields = BTreeMap::new();
    for side in [Side::Away, Side::Home] {
        side_fields(game.side(side), &mut fields);
    }
    fields
}

fn prefix(side: Side) -> &'static str {
    match side {
        Side::Away => "AWAY",
        Side::Home => "HOME",
    }
}

fn side_fields(doc: &ScorecardDocument, fields: &mut BTreeMap<String, String>) {
    let p = prefix(doc.side);
    let mut put = |column: &str, row: Option<usize>, value: &str| {
        let key = match row {
            Some(i) => format!("{p}{column}.{i}"),
            None => format!("{p}{column}"),
        };
        fields.insert(key, value.to_string());
    };

    put("TEAM", None, &doc.team);
    put("TEAMSCOREBOARD", None, &doc.scorebox.title);

    let lineup = doc.lineup_table();
    for (i, row) in lineup.iter().take(FORM_LINEUP_ROWS).enumerate() {
        put("NAME", Some(i), &row.name);
        put("POS", Some(i), &row.position);
        put("LR", Some(i), &row.hand);
        put("BT", Some(i), &row.batting_rate);
        put("OBT", Some(i), &row.on_base_rate);
        put("TRAITS", Some(i), &row.traits);
    }

    let bench = doc.bench_table();
    for (i, row) in bench.iter().take(FORM_BENCH_ROWS).enumerate() {
        put("BENCHNAME", Some(i), &row.name);
        put("BENCHPOS", Some(i), &row.position);
        put("BENCHLR", Some(i), &row.hand);
        put("BENCHBT", Some(i), &row.batting_rate);
        put("BENCHOBT", Some(i), &row.on_base_rate);
        put("BENCHTRAITS", Some(i), &row.traits);
    }

    let pitching = doc.pitching_table();
    for (i, row) in pitching.iter().take(FORM_PITCHING_ROWS).enumerate() {
        put("PITCHIP", Some(i), &row.innings_pitched);
        put("PITCHPOS", Some(i), row.role.label());
        put("PITCHNAME", Some(i), &row.name);
        put("PITCHPD", Some(i), &row.designation);
        put("PITCHLR", Some(i), &row.hand);
        put("PITCHBT", Some(i), &row.batting_rate);
        put("PITCHTRAITS", Some(i), &row.traits);
    }

    let dropped = lineup.len().saturating_sub(FORM_LINEUP_ROWS)
        + bench.len().saturating_sub(FORM_BENCH_ROWS)
        + pitching.len().saturating_sub(FORM_PITCHING_ROWS);
    if dropped > 0 {
        debug!("{} rows for {} do not fit the form", dropped, doc.team);
    }
}
