// Player ranking: dedup by name, score, sort descending, assign ranks.

use std::collections::HashMap;

use tracing::debug;

use crate::scoring::ScoredPlayer;
use crate::stats::{RawPlayerRecord, StatLine};

/// The ranked player set produced by one load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RankedPlayers {
    players: Vec<ScoredPlayer>,
}

impl RankedPlayers {
    /// Normalize, score, deduplicate and rank raw feed rows.
    ///
    /// When several rows share a name the last one wins, but it keeps the
    /// slot of the first occurrence. Ties in fantasy points keep that
    /// post-dedup order (the sort is stable).
    pub fn rank(records: &[RawPlayerRecord]) -> Self {
        let mut players: Vec<ScoredPlayer> = Vec::with_capacity(records.len());
        let mut slot_by_name: HashMap<&str, usize> = HashMap::with_capacity(records.len());

        for raw in records {
            let scored = ScoredPlayer::score(StatLine::from_raw(raw));
            match slot_by_name.get(raw.full_name.as_str()) {
                Some(&idx) => players[idx] = scored,
                None => {
                    slot_by_name.insert(raw.full_name.as_str(), players.len());
                    players.push(scored);
                }
            }
        }

        if players.len() != records.len() {
            debug!(
                "collapsed {} stat rows into {} unique players",
                records.len(),
                players.len()
            );
        }

        players.sort_by(|a, b| b.fantasy_points.cmp(&a.fantasy_points));
        for (i, player) in players.iter_mut().enumerate() {
            player.rank = i + 1;
        }

        RankedPlayers { players }
    }

    /// Find a player by exact name. Linear scan; the set is small.
    pub fn lookup(&self, name: &str) -> Option<&ScoredPlayer> {
        self.players.iter().find(|p| p.line.name == name)
    }

    /// Fantasy points for `name`, or 0 when the name is blank or unknown.
    pub fn points_for(&self, name: &str) -> u32 {
        if name.trim().is_empty() {
            return 0;
        }
        self.lookup(name).map_or(0, |p| p.fantasy_points)
    }

    pub fn as_slice(&self) -> &[ScoredPlayer] {
        &self.players
    }

    /// The first `n` players (fewer if the set is smaller).
    pub fn top(&self, n: usize) -> &[ScoredPlayer] {
        &self.players[..n.min(self.players.len())]
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(name: &str, pts: u32, team: &str) -> RawPlayerRecord {
        serde_json::from_value(json!({
            "full_name": name,
            "team_market": team,
            "data": [{"gp": 10}, {"pts": pts}],
        }))
        .unwrap()
    }

    #[test]
    fn sorts_descending_and_assigns_ranks() {
        let ranked = RankedPlayers::rank(&[
            raw("Low", 10, "Ohio State"),
            raw("High", 90, "Indiana"),
            raw("Mid", 50, "Purdue"),
        ]);
        let names: Vec<&str> = ranked.as_slice().iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["High", "Mid", "Low"]);
        let ranks: Vec<usize> = ranked.as_slice().iter().map(|p| p.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
    }

    #[test]
    fn ranked_sequence_is_non_increasing() {
        let rows: Vec<RawPlayerRecord> = (0..40u32)
            .map(|i| raw(&format!("P{i}"), (i * 37) % 101, "Team"))
            .collect();
        let ranked = RankedPlayers::rank(&rows);
        for pair in ranked.as_slice().windows(2) {
            assert!(pair[0].fantasy_points >= pair[1].fantasy_points);
        }
        for (i, p) in ranked.as_slice().iter().enumerate() {
            assert_eq!(p.rank, i + 1);
        }
    }

    #[test]
    fn later_duplicate_replaces_earlier() {
        let ranked = RankedPlayers::rank(&[
            raw("Same Name", 10, "Old Team"),
            raw("Other", 20, "Iowa"),
            raw("Same Name", 80, "New Team"),
        ]);
        assert_eq!(ranked.len(), 2);
        let p = ranked.lookup("Same Name").unwrap();
        assert_eq!(p.fantasy_points, 80);
        assert_eq!(p.team(), "New Team");
    }

    #[test]
    fn duplicate_keeps_first_slot_for_tie_order() {
        // A and B tie; A appeared first so it stays ahead even though its
        // surviving row came later in the feed.
        let ranked = RankedPlayers::rank(&[
            raw("A", 5, "X"),
            raw("B", 30, "Y"),
            raw("A", 30, "X"),
        ]);
        let names: Vec<&str> = ranked.as_slice().iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn ties_keep_input_order() {
        let ranked = RankedPlayers::rank(&[
            raw("First", 40, "X"),
            raw("Second", 40, "X"),
            raw("Third", 40, "X"),
        ]);
        let names: Vec<&str> = ranked.as_slice().iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn lookup_miss_and_blank_names() {
        let ranked = RankedPlayers::rank(&[raw("Known", 12, "X")]);
        assert!(ranked.lookup("Unknown").is_none());
        assert_eq!(ranked.points_for("Unknown"), 0);
        assert_eq!(ranked.points_for(""), 0);
        assert_eq!(ranked.points_for("   "), 0);
        assert_eq!(ranked.points_for("Known"), 12);
    }

    #[test]
    fn empty_input_gives_empty_set() {
        let ranked = RankedPlayers::rank(&[]);
        assert!(ranked.is_empty());
        assert!(ranked.top(5).is_empty());
    }

    #[test]
    fn top_truncates() {
        let rows: Vec<RawPlayerRecord> = (0..8u32).map(|i| raw(&format!("P{i}"), i, "T")).collect();
        let ranked = RankedPlayers::rank(&rows);
        assert_eq!(ranked.top(5).len(), 5);
        assert_eq!(ranked.top(5)[0].name(), "P7");
        assert_eq!(ranked.top(50).len(), 8);
    }
}
