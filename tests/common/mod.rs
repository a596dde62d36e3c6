#![allow(dead_code)]

use deadball_core::RawPlayerRecord;
use serde_json::{json, Value};

/// A hitter row the way a stats CSV or JSON export carries it.
pub fn hitter(name: &str, team: &str, order: impl Into<Value>) -> RawPlayerRecord {
    RawPlayerRecord::new()
        .with("Type", "Hitter")
        .with("Name", name)
        .with("Team", team)
        .with("BatOrder", order)
        .with("Pos", "CF")
        .with("LR", "R")
        .with("BT", "28")
        .with("OBT", "34")
        .with("Traits", "S+")
}

/// A pitcher row with a designation and games-started count.
pub fn pitcher(name: &str, team: &str, designation: &str, games_started: i64) -> RawPlayerRecord {
    RawPlayerRecord::new()
        .with("Type", "Pitcher")
        .with("Name", name)
        .with("Team", team)
        .with("Pos", "P")
        .with("Throws", "L")
        .with("PD", designation)
        .with("GS", games_started)
        .with("Traits", json!(["K+"]))
}

/// Two full nine-man lineups with a bench and a staff each.
pub fn two_team_game() -> Vec<RawPlayerRecord> {
    let mut rows = Vec::new();
    for (team, prefix) in [("Owls", "O"), ("Hawks", "H")] {
        for slot in 1..=9 {
            rows.push(hitter(&format!("{prefix}{slot}"), team, slot.to_string()));
        }
        rows.push(hitter(&format!("{prefix}-sub"), team, "3.1"));
        rows.push(pitcher(&format!("{prefix}-ace"), team, "d8", 30));
        rows.push(pitcher(&format!("{prefix}-pen"), team, "RP", 0));
    }
    rows
}

/// Delimited text with the game CSV header.
pub fn csv_text() -> String {
    [
        "Type,Team,BatOrder,Name,Pos,LR,Throws,Hand,BT,OBT,PD,GS,Traits",
        "Hitter,Owls,1,Ada,SS,L,R,L,30,36,,,S+ D+",
        "Hitter,Owls,2,Bo,C,R,R,R,25,30,,,",
        "Pitcher,Owls,,Cy,P,,R,R,,,d8,12,K+",
        "Hitter,Hawks,1,Dee,CF,S,R,S,27,33,,,",
        "Pitcher,Hawks,,Eve,P,,L,L,,,RP,0,",
    ]
    .join("\r\n")
}
