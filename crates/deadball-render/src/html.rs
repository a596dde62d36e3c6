//! Standalone HTML scorecard, one section per side.

use deadball_core::{
    BattingRow, GameScorecard, PitchingRow, Scorebox, ScorecardDocument, INNING_COLUMNS,
};

use crate::cells::escape_html;

const STYLE: &str = "\
body { font-family: Helvetica, Arial, sans-serif; font-size: 11px; margin: 16px; }
.scorecard { page-break-after: always; margin-bottom: 32px; }
.team-label { font-size: 18px; margin: 0 0 8px; }
table { border-collapse: collapse; margin-bottom: 10px; }
th, td { border: 1px solid #333; padding: 2px 4px; height: 18px; }
td.name { min-width: 140px; }
td.traits { min-width: 80px; }
td.inn { width: 28px; }
td.divider { border-left: 3px solid #000; }
";

pub fn render_html(game: &GameScorecard) -> String {
    let scorebox = &game.away.scorebox;
    let mut out = String::new();

    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("  <meta charset=\"utf-8\">\n");
    out.push_str(&format!("  <title>{}</title>\n", escape_html(&scorebox.title)));
    out.push_str(&format!("  <style>\n{STYLE}  </style>\n"));
    out.push_str("</head>\n<body>\n");

    for doc in [&game.away, &game.home] {
        out.push_str(&section(doc));
    }

    out.push_str("</body>\n</html>\n");
    out
}

fn section(doc: &ScorecardDocument) -> String {
    let side = doc.side.as_str();
    let mut out = String::new();

    out.push_str(&format!("<div class=\"{side} scorecard\">\n"));
    out.push_str(&format!(
        "  <h2 class=\"team-label\"><span class=\"team-name {side}-team\">{}</span></h2>\n",
        escape_html(&doc.team)
    ));
    out.push_str(&scorebox_table(&doc.scorebox));

    out.push_str("  <table class=\"lineup\">\n    <thead>\n      <tr>");
    out.push_str("<th>Player</th><th>Pos</th><th>LR</th><th>BT</th><th>OBT</th><th>Traits</th>");
    for inning in 1..=INNING_COLUMNS {
        out.push_str(&format!("<th>{inning}</th>"));
    }
    out.push_str("</tr>\n    </thead>\n    <tbody>\n");
    for row in doc.lineup_table() {
        out.push_str(&lineup_row(&row));
    }
    out.push_str("    </tbody>\n  </table>\n");

    out.push_str("  <table class=\"bench\">\n    <thead>\n      <tr>");
    out.push_str("<th>Bench</th><th>Pos</th><th>LR</th><th>BT</th><th>OBT</th><th>Traits</th>");
    out.push_str("</tr>\n    </thead>\n    <tbody>\n");
    for row in doc.bench_table() {
        out.push_str(&bench_row(&row));
    }
    out.push_str("    </tbody>\n  </table>\n");

    out.push_str("  <table class=\"pitching\">\n    <thead>\n      <tr>");
    out.push_str("<th>IP</th><th>Pos</th><th>Pitcher</th><th>PD</th><th>LR</th><th>BT</th><th>OBT</th><th>Traits</th>");
    out.push_str("</tr>\n    </thead>\n    <tbody>\n");
    for row in doc.pitching_table() {
        out.push_str(&pitching_row(&row));
    }
    out.push_str("    </tbody>\n  </table>\n");

    out.push_str("</div>\n");
    out
}

/// Line score grid: one row per team, blank innings plus R/H/E.
fn scorebox_table(scorebox: &Scorebox) -> String {
    let mut out = String::from("  <table class=\"scorebox\">\n    <thead>\n      <tr><th>");
    out.push_str(&escape_html(&scorebox.title));
    if let Some(date) = scorebox.date {
        out.push_str(&format!(" <span class=\"date\">{date}</span>"));
    }
    out.push_str("</th>");
    for inning in 1..=scorebox.innings {
        out.push_str(&format!("<th>{inning}</th>"));
    }
    out.push_str("<th>R</th><th>H</th><th>E</th></tr>\n    </thead>\n    <tbody>\n");

    for team in [&scorebox.away, &scorebox.home] {
        out.push_str(&format!("      <tr><td class=\"name\">{}</td>", escape_html(team)));
        for _ in 0..scorebox.innings + 3 {
            out.push_str("<td class=\"inn\"></td>");
        }
        out.push_str("</tr>\n");
    }
    out.push_str("    </tbody>\n  </table>\n");
    out
}

fn lineup_row(row: &BattingRow) -> String {
    let mut out = String::from("      <tr>\n");
    out.push_str(&format!("        <td class=\"name\">{}</td>\n", escape_html(&row.name)));
    out.push_str(&format!("        <td class=\"pos\">{}</td>\n", escape_html(&row.position)));
    out.push_str(&format!("        <td class=\"small\">{}</td>\n", escape_html(&row.hand)));
    out.push_str(&format!("        <td class=\"small\">{}</td>\n", escape_html(&row.batting_rate)));
    out.push_str(&format!("        <td class=\"small\">{}</td>\n", escape_html(&row.on_base_rate)));
    out.push_str(&format!("        <td class=\"traits\">{}</td>\n", escape_html(&row.traits)));
    for (i, cell) in row.innings.iter().enumerate() {
        let class = if i == 0 { "inn divider" } else { "inn" };
        out.push_str(&format!("        <td class=\"{class}\">{}</td>\n", escape_html(cell)));
    }
    out.push_str("      </tr>\n");
    out
}

fn bench_row(row: &BattingRow) -> String {
    let cells = [
        &row.name,
        &row.position,
        &row.hand,
        &row.batting_rate,
        &row.on_base_rate,
        &row.traits,
    ];
    table_row(&cells)
}

fn pitching_row(row: &PitchingRow) -> String {
    let role = row.role.label().to_string();
    let cells = [
        &row.innings_pitched,
        &role,
        &row.name,
        &row.designation,
        &row.hand,
        &row.batting_rate,
        &row.on_base_rate,
        &row.traits,
    ];
    table_row(&cells)
}

fn table_row(cells: &[&String]) -> String {
    let mut out = String::from("      <tr>\n");
    for cell in cells {
        out.push_str(&format!("        <td>{}</td>\n", escape_html(cell)));
    }
    out.push_str("      </tr>\n");
    out
}
