//! Game CSV: one row per normalized player.
//!
//! Positions are written slash-separated and commas in every other text
//! cell become spaces, so no cell needs quoting and the file reads back
//! through the plain comma split of delimited input.

use deadball_core::NormalizedPlayer;

pub const GAME_CSV_HEADER: [&str; 13] = [
    "Type", "Team", "BatOrder", "Name", "Pos", "LR", "Throws", "Hand", "BT", "OBT", "PD", "GS",
    "Traits",
];

pub fn game_csv(players: &[NormalizedPlayer]) -> Result<String, csv::Error> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(GAME_CSV_HEADER)?;

    for p in players {
        let games_started = p.games_started.map(|gs| gs.to_string()).unwrap_or_default();
        let record = [
            p.kind.as_str().to_string(),
            plain(&p.team),
            plain(p.batting_order.as_deref().unwrap_or("")),
            plain(&p.name),
            p.positions.replace(',', "/"),
            plain(&p.bats),
            plain(&p.throws),
            plain(&p.hand),
            plain(&p.batting_rate),
            plain(&p.on_base_rate),
            plain(&p.pitcher_designation),
            games_started,
            plain(&p.traits_text()),
        ];
        writer.write_record(&record)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn plain(text: &str) -> String {
    text.replace(',', " ")
}
