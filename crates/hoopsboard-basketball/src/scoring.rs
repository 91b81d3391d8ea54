// Fantasy scoring: fixed weights over a normalized stat line.
//
//   fantasy_points = pts + fg3m + reb + ast + 2*stl + 2*blk

use serde::{Deserialize, Serialize};

use crate::stats::StatLine;

/// Steals and blocks count double.
pub const STEAL_WEIGHT: u32 = 2;
pub const BLOCK_WEIGHT: u32 = 2;

/// Compute the fantasy score for a stat line. Saturates at `u32::MAX`.
pub fn fantasy_points(line: &StatLine) -> u32 {
    line.points
        .saturating_add(line.threes)
        .saturating_add(line.rebounds)
        .saturating_add(line.assists)
        .saturating_add(STEAL_WEIGHT.saturating_mul(line.steals))
        .saturating_add(BLOCK_WEIGHT.saturating_mul(line.blocks))
}

/// Fantasy points per game, rounded half-up to one decimal.
///
/// Zero games yields exactly 0.0. Rounding is done in integer tenths so the
/// result does not depend on binary float representation.
pub fn points_per_game(fantasy_points: u32, games: u32) -> f64 {
    if games == 0 {
        return 0.0;
    }
    let fp = u64::from(fantasy_points);
    let g = u64::from(games);
    // floor(fp / g * 10 + 0.5) == floor((20 * fp + g) / (2 * g))
    let tenths = (20 * fp + g) / (2 * g);
    tenths as f64 / 10.0
}

/// A normalized player with computed score and leaderboard rank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredPlayer {
    #[serde(flatten)]
    pub line: StatLine,
    pub fantasy_points: u32,
    pub points_per_game: f64,
    /// 1-based position in the ranked sequence. Zero until ranked.
    pub rank: usize,
}

impl ScoredPlayer {
    pub fn score(line: StatLine) -> Self {
        let fantasy_points = fantasy_points(&line);
        let points_per_game = points_per_game(fantasy_points, line.games);
        ScoredPlayer {
            line,
            fantasy_points,
            points_per_game,
            rank: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.line.name
    }

    pub fn team(&self) -> &str {
        &self.line.team
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn line(points: u32, threes: u32, rebounds: u32, assists: u32, steals: u32, blocks: u32) -> StatLine {
        StatLine {
            name: "Player A".into(),
            team: "Maryland".into(),
            points,
            threes,
            rebounds,
            assists,
            steals,
            blocks,
            ..StatLine::default()
        }
    }

    #[test]
    fn worked_example_scores_26() {
        // pts=10, reb=5, ast=3, stl=2, blk=1, fg3m=2
        let l = line(10, 2, 5, 3, 2, 1);
        assert_eq!(fantasy_points(&l), 26);
    }

    #[test]
    fn empty_line_scores_zero() {
        let scored = ScoredPlayer::score(StatLine::default());
        assert_eq!(scored.fantasy_points, 0);
        assert_eq!(scored.points_per_game, 0.0);
        assert_eq!(scored.rank, 0);
    }

    #[test]
    fn steals_and_blocks_count_double() {
        assert_eq!(fantasy_points(&line(0, 0, 0, 0, 3, 0)), 6);
        assert_eq!(fantasy_points(&line(0, 0, 0, 0, 0, 4)), 8);
    }

    #[test]
    fn huge_lines_saturate() {
        let l = line(3_000_000_000, 0, 3_000_000_000, 0, 0, 0);
        assert_eq!(fantasy_points(&l), u32::MAX);
        assert_eq!(fantasy_points(&line(0, 0, 0, 0, u32::MAX, u32::MAX)), u32::MAX);

        let mut l = line(u32::MAX, 0, 0, 0, 0, 0);
        l.games = 1;
        assert_eq!(ScoredPlayer::score(l).points_per_game, f64::from(u32::MAX));
    }

    #[test]
    fn zero_games_gives_zero_rate() {
        assert_eq!(points_per_game(250, 0), 0.0);
    }

    #[test]
    fn rate_rounds_to_one_decimal() {
        assert_eq!(points_per_game(26, 1), 26.0);
        assert_eq!(points_per_game(100, 3), 33.3);
        assert_eq!(points_per_game(200, 3), 66.7);
        assert_eq!(points_per_game(7, 9), 0.8);
    }

    #[test]
    fn rate_rounds_half_up() {
        // 1 / 4 = 0.25 -> 0.3
        assert_eq!(points_per_game(1, 4), 0.3);
        // 21 / 20 = 1.05 -> 1.1
        assert_eq!(points_per_game(21, 20), 1.1);
        // 29 / 20 = 1.45 -> 1.5
        assert_eq!(points_per_game(29, 20), 1.5);
    }

    #[test]
    fn scored_player_carries_rate() {
        let mut l = line(300, 30, 100, 50, 10, 5);
        l.games = 20;
        let scored = ScoredPlayer::score(l);
        assert_eq!(scored.fantasy_points, 300 + 30 + 100 + 50 + 20 + 10);
        assert_eq!(scored.points_per_game, 25.5);
        assert_eq!(scored.name(), "Player A");
        assert_eq!(scored.team(), "Maryland");
    }
}
