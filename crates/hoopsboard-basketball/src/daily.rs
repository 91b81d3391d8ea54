// Prior-day snapshot: daily point gains per player.
//
// A snapshot file either already carries `daily_points` per player, or
// carries yesterday's season totals, in which case the gain is derived from
// today's ranked players.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::ranking::RankedPlayers;

/// One player's points gained since the previous snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyEntry {
    pub name: String,
    #[serde(default)]
    pub team: String,
    #[serde(deserialize_with = "whole_number")]
    pub daily_points: i64,
}

/// A player's season total as of the previous snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PastTotal {
    pub name: String,
    #[serde(default)]
    pub team: String,
    pub fantasy_points: f64,
}

/// A row of a snapshot file, in either supported shape.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SnapshotRow {
    Daily(DailyEntry),
    Totals(PastTotal),
}

/// Snapshot exporters write gains as floats (`12.0`); accept any finite
/// number and round it.
fn whole_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    let value = f64::deserialize(deserializer)?;
    if !value.is_finite() {
        return Err(serde::de::Error::custom("daily_points must be finite"));
    }
    Ok(value.round() as i64)
}

/// Derive daily gains: today's total minus the prior total for the same
/// (name, team), a missing prior total counting as zero. Sorted by gain,
/// largest first; ties keep ranked order.
pub fn compute_daily(players: &RankedPlayers, past: &[PastTotal]) -> Vec<DailyEntry> {
    let prior: HashMap<(&str, &str), f64> = past
        .iter()
        .map(|p| ((p.name.as_str(), p.team.as_str()), p.fantasy_points))
        .collect();

    let mut entries: Vec<DailyEntry> = players
        .as_slice()
        .iter()
        .map(|p| {
            let before = prior.get(&(p.name(), p.team())).copied().unwrap_or(0.0);
            DailyEntry {
                name: p.name().to_string(),
                team: p.team().to_string(),
                daily_points: (f64::from(p.fantasy_points) - before).round() as i64,
            }
        })
        .collect();
    entries.sort_by(|a, b| b.daily_points.cmp(&a.daily_points));
    entries
}

/// Turn a snapshot into daily entries. Totals rows, when present, take
/// precedence and are diffed against `players`; otherwise the precomputed
/// daily rows are returned in file order.
pub fn resolve_snapshot(rows: Vec<SnapshotRow>, players: &RankedPlayers) -> Vec<DailyEntry> {
    let mut daily = Vec::new();
    let mut totals = Vec::new();
    for row in rows {
        match row {
            SnapshotRow::Daily(d) => daily.push(d),
            SnapshotRow::Totals(t) => totals.push(t),
        }
    }
    if totals.is_empty() {
        daily
    } else {
        compute_daily(players, &totals)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
