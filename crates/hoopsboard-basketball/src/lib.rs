// Basketball fantasy scoring engine: stat normalization, scoring, player and
// team ranking, category rollup, daily gains and table re-sorting.

pub mod category;
pub mod daily;
pub mod ranking;
pub mod roster;
pub mod scoring;
pub mod sorting;
pub mod standings;
pub mod stats;

pub use ranking::RankedPlayers;
pub use roster::{RankedTeams, TeamEntry};
pub use scoring::ScoredPlayer;
pub use standings::Standings;
