// Per-load standings context.
//
// Built once per load from the two primary sources and handed explicitly to
// everything downstream (rollup, daily gains, table sorters). Nothing here
// outlives the next reload.

use tracing::info;

use crate::category::{rollup, Category, CategoryMap, CategorySummary};
use crate::daily::{resolve_snapshot, DailyEntry, SnapshotRow};
use crate::ranking::RankedPlayers;
use crate::roster::{RankedTeams, RawTeamEntry};
use crate::stats::RawPlayerRecord;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Standings {
    pub players: RankedPlayers,
    pub teams: RankedTeams,
}

impl Standings {
    /// Rank players, then join every roster against them.
    pub fn build(rosters: Vec<RawTeamEntry>, records: &[RawPlayerRecord]) -> Self {
        let players = RankedPlayers::rank(records);
        let teams = RankedTeams::aggregate(rosters, &players);
        info!(
            "standings built: {} players, {} teams",
            players.len(),
            teams.len()
        );
        Standings { players, teams }
    }

    pub fn category_summary(&self, categories: &[Category], membership: &CategoryMap) -> CategorySummary {
        rollup(categories, membership, &self.players)
    }

    pub fn daily(&self, snapshot: Vec<SnapshotRow>) -> Vec<DailyEntry> {
        resolve_snapshot(snapshot, &self.players)
    }
}
