//! Normalized stats JSON: `{"players": [...], "teams": {...}|null}`.

use deadball_core::{Conversion, NormalizedPlayer, TeamLabels};
use serde::Serialize;

#[derive(Serialize)]
struct StatsDocument<'a> {
    players: &'a [NormalizedPlayer],
    teams: Option<&'a TeamLabels>,
}

pub fn stats_json(conversion: &Conversion) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&StatsDocument {
        players: &conversion.players,
        teams: conversion.teams.as_ref(),
    })
}
