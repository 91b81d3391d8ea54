// Draft rosters: join each team's ten named slots against player scores.

use serde::{Deserialize, Serialize};

use crate::ranking::RankedPlayers;
use crate::stats::lenient_string;

/// Number of drafted players per team.
pub const ROSTER_SIZE: usize = 10;

/// A team roster exactly as the entries source returns it:
/// `{"team": "...", "p1": "...", ..., "p10": "..."}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTeamEntry {
    #[serde(deserialize_with = "lenient_string")]
    pub team: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub p1: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub p2: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub p3: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub p4: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub p5: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub p6: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub p7: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub p8: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub p9: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub p10: String,
}

impl RawTeamEntry {
    fn into_slots(self) -> (String, [String; ROSTER_SIZE]) {
        (
            self.team,
            [
                self.p1, self.p2, self.p3, self.p4, self.p5, self.p6, self.p7, self.p8, self.p9,
                self.p10,
            ],
        )
    }
}

/// One drafted slot: the player name and the points it resolved to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterSlot {
    pub player: String,
    /// Resolved fantasy points, 0 when the name did not match.
    pub points: u32,
}

/// A team with resolved slot points, total and rank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamEntry {
    pub team: String,
    pub slots: [RosterSlot; ROSTER_SIZE],
    pub total_score: u32,
    /// 1-based position in the ranked sequence. Zero until ranked.
    pub rank: usize,
}

impl TeamEntry {
    /// Resolve every slot against the ranked players and total them.
    pub fn resolve(raw: RawTeamEntry, players: &RankedPlayers) -> Self {
        let (team, names) = raw.into_slots();
        let slots = names.map(|player| {
            let points = players.points_for(&player);
            RosterSlot { player, points }
        });
        let total_score = slots
            .iter()
            .fold(0u32, |total, s| total.saturating_add(s.points));
        TeamEntry {
            team,
            slots,
            total_score,
            rank: 0,
        }
    }

    /// Slot by 1-based draft position (`p1`..`p10`).
    pub fn slot(&self, position: usize) -> Option<&RosterSlot> {
        position.checked_sub(1).and_then(|i| self.slots.get(i))
    }
}

/// The ranked team set produced by one load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RankedTeams {
    teams: Vec<TeamEntry>,
}

impl RankedTeams {
    /// Resolve all rosters, sort descending by total (stable) and rank.
    pub fn aggregate(entries: Vec<RawTeamEntry>, players: &RankedPlayers) -> Self {
        let mut teams: Vec<TeamEntry> = entries
            .into_iter()
            .map(|raw| TeamEntry::resolve(raw, players))
            .collect();
        teams.sort_by(|a, b| b.total_score.cmp(&a.total_score));
        for (i, team) in teams.iter_mut().enumerate() {
            team.rank = i + 1;
        }
        RankedTeams { teams }
    }

    pub fn as_slice(&self) -> &[TeamEntry] {
        &self.teams
    }

    pub fn top(&self, n: usize) -> &[TeamEntry] {
        &self.teams[..n.min(self.teams.len())]
    }

    pub fn lookup(&self, team: &str) -> Option<&TeamEntry> {
        self.teams.iter().find(|t| t.team == team)
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
