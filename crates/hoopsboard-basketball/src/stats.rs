// Raw stat records and the canonical per-player stat line.
//
// The conference stats feed delivers each player as a sparse list of
// single-key entries, e.g. `[{"minutes": 512}, {"pts": "143"}, ...]`.
// Anything absent or non-numeric becomes zero.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

// ---------------------------------------------------------------------------
// Raw feed types
// ---------------------------------------------------------------------------

/// One player row exactly as the statistics source returns it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawPlayerRecord {
    #[serde(default, deserialize_with = "lenient_string")]
    pub full_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub team_market: String,
    /// Labeled stat entries. Each map normally carries a single key.
    #[serde(default)]
    pub data: Vec<Map<String, Value>>,
}

/// Read a name-like field, turning `null` or any other non-string into "".
pub fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        _ => String::new(),
    })
}

impl RawPlayerRecord {
    /// Look up the first entry carrying `field`'s label.
    pub fn stat(&self, field: StatField) -> StatValue {
        let value = self.data.iter().find_map(|entry| entry.get(field.label()));
        StatValue::parse(value)
    }
}

/// The eight stat labels the engine reads from the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatField {
    Minutes,
    Games,
    Points,
    Rebounds,
    Assists,
    Blocks,
    Steals,
    Threes,
}

impl StatField {
    pub const ALL: [StatField; 8] = [
        StatField::Minutes,
        StatField::Games,
        StatField::Points,
        StatField::Rebounds,
        StatField::Assists,
        StatField::Blocks,
        StatField::Steals,
        StatField::Threes,
    ];

    /// The key used for this stat in the feed's `data` entries.
    pub fn label(self) -> &'static str {
        match self {
            StatField::Minutes => "minutes",
            StatField::Games => "gp",
            StatField::Points => "pts",
            StatField::Rebounds => "reb",
            StatField::Assists => "ast",
            StatField::Blocks => "blk",
            StatField::Steals => "stl",
            StatField::Threes => "fg3m",
        }
    }
}

// ---------------------------------------------------------------------------
// Parse-with-default
// ---------------------------------------------------------------------------

/// Result of coercing a raw stat value.
///
/// `Defaulted` marks a value that was missing, non-numeric, negative or
/// non-finite. It always reads as zero, but keeping it distinct lets callers
/// (and tests) see where the zero-default rule fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatValue {
    Parsed(u32),
    Defaulted,
}

impl StatValue {
    /// Coerce a JSON value. Numbers and numeric strings are accepted,
    /// truncated toward zero and clamped to `u32::MAX`; everything else is
    /// `Defaulted`.
    pub fn parse(value: Option<&Value>) -> Self {
        let number = match value {
            Some(Value::Number(n)) => n.as_f64(),
            Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
            _ => None,
        };
        match number {
            Some(n) if n.is_finite() && n >= 0.0 => {
                StatValue::Parsed(n.trunc().min(f64::from(u32::MAX)) as u32)
            }
            _ => StatValue::Defaulted,
        }
    }

    pub fn or_zero(self) -> u32 {
        match self {
            StatValue::Parsed(n) => n,
            StatValue::Defaulted => 0,
        }
    }

    pub fn is_defaulted(self) -> bool {
        matches!(self, StatValue::Defaulted)
    }
}

// ---------------------------------------------------------------------------
// Canonical stat line
// ---------------------------------------------------------------------------

/// Season totals for one player with every field defaulted to zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatLine {
    pub name: String,
    pub team: String,
    pub minutes: u32,
    pub games: u32,
    pub points: u32,
    pub rebounds: u32,
    pub assists: u32,
    pub blocks: u32,
    pub steals: u32,
    pub threes: u32,
}

impl StatLine {
    /// Normalize a raw feed row. Never fails: absent stats are zero.
    pub fn from_raw(raw: &RawPlayerRecord) -> Self {
        StatLine {
            name: raw.full_name.clone(),
            team: raw.team_market.clone(),
            minutes: raw.stat(StatField::Minutes).or_zero(),
            games: raw.stat(StatField::Games).or_zero(),
            points: raw.stat(StatField::Points).or_zero(),
            rebounds: raw.stat(StatField::Rebounds).or_zero(),
            assists: raw.stat(StatField::Assists).or_zero(),
            blocks: raw.stat(StatField::Blocks).or_zero(),
            steals: raw.stat(StatField::Steals).or_zero(),
            threes: raw.stat(StatField::Threes).or_zero(),
        }
    }
}

/// Drop placeholder rows (e.g. "DoNot Use") that the feed mixes in with
/// real players.
pub fn drop_excluded(records: Vec<RawPlayerRecord>, excluded: &[String]) -> Vec<RawPlayerRecord> {
    if excluded.is_empty() {
        return records;
    }
    let before = records.len();
    let kept: Vec<RawPlayerRecord> = records
        .into_iter()
        .filter(|r| !excluded.iter().any(|name| name == &r.full_name))
        .collect();
    if kept.len() != before {
        debug!("dropped {} placeholder stat rows", before - kept.len());
    }
    kept
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(name: &str, data: Value) -> RawPlayerRecord {
        serde_json::from_value(json!({
            "full_name": name,
            "team_market": "Iowa",
            "data": data,
        }))
        .unwrap()
    }

    #[test]
    fn deserializes_feed_row() {
        let raw = record("Caitlin Clark", json!([{"minutes": 1200}, {"pts": "900"}]));
        assert_eq!(raw.full_name, "Caitlin Clark");
        assert_eq!(raw.team_market, "Iowa");
        assert_eq!(raw.data.len(), 2);
    }

    #[test]
    fn missing_fields_default_to_zero() {
        let line = StatLine::from_raw(&record("Nobody", json!([])));
        assert_eq!(line.name, "Nobody");
        assert_eq!(line.minutes, 0);
        assert_eq!(line.games, 0);
        assert_eq!(line.points, 0);
        assert_eq!(line.rebounds, 0);
        assert_eq!(line.assists, 0);
        assert_eq!(line.blocks, 0);
        assert_eq!(line.steals, 0);
        assert_eq!(line.threes, 0);
    }

    #[test]
    fn numeric_strings_are_coerced() {
        let raw = record(
            "A",
            json!([{"gp": "30"}, {"pts": "412"}, {"reb": 120}, {"fg3m": "55.0"}]),
        );
        let line = StatLine::from_raw(&raw);
        assert_eq!(line.games, 30);
        assert_eq!(line.points, 412);
        assert_eq!(line.rebounds, 120);
        assert_eq!(line.threes, 55);
    }

    #[test]
    fn fractional_values_truncate() {
        let raw = record("A", json!([{"minutes": 612.9}, {"ast": "41.7"}]));
        let line = StatLine::from_raw(&raw);
        assert_eq!(line.minutes, 612);
        assert_eq!(line.assists, 41);
    }

    #[test]
    fn non_numeric_values_default() {
        let raw = record(
            "A",
            json!([{"pts": "n/a"}, {"reb": null}, {"ast": true}, {"blk": [3]}, {"stl": -2}]),
        );
        assert!(raw.stat(StatField::Points).is_defaulted());
        assert!(raw.stat(StatField::Rebounds).is_defaulted());
        assert!(raw.stat(StatField::Assists).is_defaulted());
        assert!(raw.stat(StatField::Blocks).is_defaulted());
        assert!(raw.stat(StatField::Steals).is_defaulted());
        assert_eq!(StatLine::from_raw(&raw), StatLine {
            name: "A".into(),
            team: "Iowa".into(),
            ..StatLine::default()
        });
    }

    #[test]
    fn null_identity_fields_read_as_blank() {
        let raw: RawPlayerRecord = serde_json::from_value(json!({
            "full_name": "DoNot Use",
            "team_market": null,
            "data": [],
        }))
        .unwrap();
        assert_eq!(raw.full_name, "DoNot Use");
        assert_eq!(raw.team_market, "");

        let raw: RawPlayerRecord =
            serde_json::from_value(json!({"full_name": null, "team_market": 7})).unwrap();
        assert_eq!(raw.full_name, "");
        assert_eq!(raw.team_market, "");
    }

    #[test]
    fn huge_values_clamp() {
        let raw = record("A", json!([{"pts": 3_000_000_000u64}, {"reb": 1e20}, {"ast": "5e12"}]));
        assert_eq!(raw.stat(StatField::Points), StatValue::Parsed(3_000_000_000));
        assert_eq!(raw.stat(StatField::Rebounds), StatValue::Parsed(u32::MAX));
        assert_eq!(raw.stat(StatField::Assists), StatValue::Parsed(u32::MAX));
    }

    #[test]
    fn first_matching_entry_wins() {
        let raw = record("A", json!([{"pts": 10}, {"reb": 4}, {"pts": 99}]));
        assert_eq!(raw.stat(StatField::Points), StatValue::Parsed(10));
    }

    #[test]
    fn unknown_labels_are_ignored() {
        let raw = record("A", json!([{"fgm": 40}, {"tov": 12}, {"pts": 100}]));
        let line = StatLine::from_raw(&raw);
        assert_eq!(line.points, 100);
        assert_eq!(line.rebounds, 0);
    }

    #[test]
    fn labels_match_feed_keys() {
        let labels: Vec<&str> = StatField::ALL.iter().map(|f| f.label()).collect();
        assert_eq!(
            labels,
            vec!["minutes", "gp", "pts", "reb", "ast", "blk", "stl", "fg3m"]
        );
    }

    #[test]
    fn drop_excluded_removes_placeholders() {
        let rows = vec![
            record("DoNot Use", json!([])),
            record("Real Player", json!([])),
        ];
        let kept = drop_excluded(rows, &["DoNot Use".to_string()]);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].full_name, "Real Player");
    }

    #[test]
    fn drop_excluded_with_empty_list_keeps_everything() {
        let rows = vec![record("DoNot Use", json!([]))];
        assert_eq!(drop_excluded(rows, &[]).len(), 1);
    }
}
