//! Integration tests for the conversion pipeline: payload in, players and
//! a two-team scorecard out.

mod common;

use common::{csv_text, hitter, pitcher, two_team_game};
use deadball_core::normalize::format_traits;
use deadball_core::{
    convert, ConvertError, GameInfo, PitcherRole, RawPayload, RawPlayerRecord, TeamHints,
    UNLABELED_TEAM,
};
use serde_json::{json, Value};

fn run(payload: &RawPayload) -> Result<deadball_core::Conversion, ConvertError> {
    convert(payload, &TeamHints::default(), &GameInfo::default())
}

// ---------------------------------------------------------------------------
// Empty states
// ---------------------------------------------------------------------------

#[test]
fn test_zero_records_reports_no_players() {
    let err = run(&RawPayload::records(Vec::new())).unwrap_err();
    assert!(matches!(err, ConvertError::NoPlayers));
    assert!(err.is_empty_state());

    let err = run(&RawPayload::detect("[]").unwrap()).unwrap_err();
    assert!(matches!(err, ConvertError::NoPlayers));
}

#[test]
fn test_unlabeled_records_share_synthetic_team() {
    let rows = vec![
        RawPlayerRecord::new().with("Name", "a").with("BatOrder", "1"),
        RawPlayerRecord::new().with("Name", "b").with("BatOrder", "2"),
        RawPlayerRecord::new().with("Name", "c").with("BatOrder", "3"),
    ];
    let out = run(&RawPayload::records(rows)).unwrap();
    assert_eq!(out.scorecard.away.team, UNLABELED_TEAM);
    assert_eq!(out.scorecard.home.team, UNLABELED_TEAM);
    assert_eq!(out.scorecard.away.lineup.len(), 3);
    assert_eq!(out.scorecard.home.lineup.len(), 3);
}

// ---------------------------------------------------------------------------
// Ordering and roles
// ---------------------------------------------------------------------------

#[test]
fn test_shared_slot_only_first_starts() {
    let rows = vec![
        hitter("first", "Owls", "4.0"),
        hitter("second", "Owls", "4.0"),
        hitter("third", "Owls", "4.9"),
    ];
    let out = run(&RawPayload::records(rows)).unwrap();
    let doc = &out.scorecard.away;
    assert_eq!(doc.lineup.len(), 1);
    assert_eq!(doc.lineup[0].player.name, "first");
    assert_eq!(doc.lineup[0].slot, 4);
    let bench: Vec<_> = doc.bench.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(bench, vec!["second", "third"]);
}

#[test]
fn test_games_started_overrides_designation() {
    let rows = vec![
        pitcher("sp", "Owls", "SP", 0),
        pitcher("rp-but-started", "Owls", "RP", 5),
        pitcher("pen", "Owls", "RP", 0),
    ];
    let out = run(&RawPayload::records(rows)).unwrap();
    let table = out.scorecard.away.pitching_table();
    let roles: Vec<_> = table.iter().map(|r| (r.name.as_str(), r.role)).collect();
    assert_eq!(
        roles,
        vec![
            ("sp", PitcherRole::Starter),
            ("rp-but-started", PitcherRole::Starter),
            ("pen", PitcherRole::Reliever),
        ]
    );
}

#[test]
fn test_comma_traits_become_space_joined() {
    assert_eq!(format_traits(Some(&json!("Fast,Clutch"))), "Fast Clutch");

    let rows = vec![hitter("a", "Owls", "1").with("Traits", "Fast,Clutch")];
    let out = run(&RawPayload::records(rows)).unwrap();
    assert_eq!(out.scorecard.away.lineup_table()[0].traits, "Fast Clutch");
}

#[test]
fn test_order_round_trip_to_slot() {
    let rows = vec![
        hitter("a", "Owls", "3.1"),
        hitter("b", "Owls", Value::Null),
    ];
    let out = run(&RawPayload::records(rows)).unwrap();
    assert_eq!(out.players[0].batting_order_slot, Some(3));
    assert_eq!(out.players[1].batting_order_slot, None);
    assert_eq!(out.scorecard.away.bench[0].name, "b");
}

// ---------------------------------------------------------------------------
// Payload shapes
// ---------------------------------------------------------------------------

#[test]
fn test_full_game_partitions_every_player() {
    let out = run(&RawPayload::records(two_team_game())).unwrap();
    for doc in [&out.scorecard.away, &out.scorecard.home] {
        assert_eq!(doc.lineup.len(), 9);
        assert_eq!(doc.bench.len(), 1);
        assert_eq!(doc.starters.len(), 1);
        assert_eq!(doc.relievers.len(), 1);
    }
    assert_eq!(out.scorecard.away.team, "Owls");
    assert_eq!(out.scorecard.home.team, "Hawks");
}

#[test]
fn test_delimited_payload() {
    let payload = RawPayload::detect(&csv_text()).unwrap();
    let out = run(&payload).unwrap();
    assert_eq!(out.players.len(), 5);
    assert_eq!(out.scorecard.away.lineup.len(), 2);
    assert_eq!(out.scorecard.away.starters[0].name, "Cy");
    assert_eq!(out.scorecard.home.relievers[0].name, "Eve");
    assert_eq!(out.scorecard.away.lineup_table()[0].traits, "S+ D+");
}

#[test]
fn test_players_object_with_team_metadata() {
    let text = json!({
        "players": [
            {"name": "a", "team": "Owls", "battingOrder": "1"},
            {"name": "b", "team": "Hawks", "battingOrder": "1"}
        ],
        "teams": {"away_team": "Hawks", "home_team": "Owls"}
    })
    .to_string();
    let out = run(&RawPayload::detect(&text).unwrap()).unwrap();
    assert_eq!(out.scorecard.away.team, "Hawks");
    assert_eq!(out.scorecard.home.team, "Owls");

    let hints = TeamHints::new(Some("owls".into()), Some("hawks".into()));
    let out = convert(&RawPayload::detect(&text).unwrap(), &hints, &GameInfo::default()).unwrap();
    assert_eq!(out.scorecard.away.team, "Owls");
}

#[test]
fn test_numeric_team_metadata_still_converts() {
    let text = json!({
        "players": [{"Name": "a", "Team": "Owls", "BatOrder": "1"}],
        "teams": {"away": 147, "home": 110}
    })
    .to_string();
    let out = run(&RawPayload::detect(&text).unwrap()).unwrap();
    assert_eq!(out.players.len(), 1);
    assert_eq!(out.scorecard.away.team, "Owls");

    let text = json!({
        "players": [
            {"name": "a", "team": 147, "battingOrder": "1"},
            {"name": "b", "team": 110, "battingOrder": "1"}
        ],
        "teams": {"away": 110, "home": 147}
    })
    .to_string();
    let out = run(&RawPayload::detect(&text).unwrap()).unwrap();
    assert_eq!(out.scorecard.away.team, "110");
    assert_eq!(out.scorecard.home.team, "147");
}

#[test]
fn test_boxscore_payload() {
    let text = json!({
        "teams": {
            "away": {
                "team": {"name": "Boston Red Sox", "abbreviation": "BOS"},
                "players": {
                    "ID1": {"person": {"fullName": "A One"}, "battingOrder": "100",
                            "position": {"abbreviation": "2B"}, "batSide": {"code": "R"}},
                    "ID2": {"person": {"fullName": "A Arm"}, "position": {"abbreviation": "P"},
                            "pitchHand": {"code": "R"},
                            "stats": {"pitching": {"inningsPitched": "7.0", "earnedRuns": 1, "gamesStarted": 1}}}
                }
            },
            "home": {
                "team": {"name": "New York Yankees", "abbreviation": "NYY"},
                "players": {
                    "ID3": {"person": {"fullName": "H One"}, "battingOrder": "100",
                            "position": {"abbreviation": "SS"}, "batSide": {"code": "L"}}
                }
            }
        }
    })
    .to_string();
    let out = run(&RawPayload::detect(&text).unwrap()).unwrap();
    assert_eq!(out.scorecard.away.team, "Boston Red Sox");
    assert_eq!(out.scorecard.home.team, "New York Yankees");
    assert_eq!(out.scorecard.away.starters[0].name, "A Arm");
    assert_eq!(out.scorecard.away.starters[0].pitcher_designation, "d20");
    assert_eq!(out.teams.unwrap().home_abbr.as_deref(), Some("NYY"));
}

#[test]
fn test_unknown_json_shape_is_invalid() {
    let err = RawPayload::detect(r#"{"schedule": []}"#).unwrap_err();
    assert!(matches!(err, ConvertError::InvalidPayload(_)));
    assert!(!err.is_empty_state());
}
