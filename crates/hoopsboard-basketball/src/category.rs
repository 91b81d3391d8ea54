// Category rollup: best scorer within each of ten fixed player groups.

use std::collections::HashMap;

use serde::Serialize;

use crate::ranking::RankedPlayers;
use crate::scoring::ScoredPlayer;

/// Number of category groups.
pub const CATEGORY_COUNT: usize = 10;

/// Category key (`p1`..`p10`) mapped to candidate player names.
pub type CategoryMap = HashMap<String, Vec<String>>;

/// A category key with its display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub key: String,
    pub label: String,
}

/// The fixed key order `p1`..`p10` paired with the given labels.
pub fn categories_from_labels(labels: &[String]) -> Vec<Category> {
    labels
        .iter()
        .take(CATEGORY_COUNT)
        .enumerate()
        .map(|(i, label)| Category {
            key: format!("p{}", i + 1),
            label: label.clone(),
        })
        .collect()
}

/// Default labels: "Group 1".."Group 10".
pub fn default_categories() -> Vec<Category> {
    let labels: Vec<String> = (1..=CATEGORY_COUNT).map(|i| format!("Group {i}")).collect();
    categories_from_labels(&labels)
}

/// What a single category resolved to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum CategoryOutcome {
    /// The map had no candidates for this category.
    NoData,
    /// Candidates were listed but none matched a ranked player.
    NotFound,
    Winner(ScoredPlayer),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryRow {
    pub category: Category,
    pub outcome: CategoryOutcome,
}

/// Per-category winners in fixed order plus the sum of winners' points.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CategorySummary {
    pub rows: Vec<CategoryRow>,
    pub grand_total: u32,
}

/// Pick the highest-scoring known candidate. Blank names never match. The
/// first candidate wins ties.
pub fn best_candidate<'a>(candidates: &[String], players: &'a RankedPlayers) -> Option<&'a ScoredPlayer> {
    let mut best: Option<&ScoredPlayer> = None;
    for name in candidates {
        if name.trim().is_empty() {
            continue;
        }
        if let Some(player) = players.lookup(name) {
            if best.map_or(true, |b| player.fantasy_points > b.fantasy_points) {
                best = Some(player);
            }
        }
    }
    best
}

/// Roll up category winners. Output order follows `categories`, never the
/// map's key order.
pub fn rollup(categories: &[Category], membership: &CategoryMap, players: &RankedPlayers) -> CategorySummary {
    let mut grand_total: u32 = 0;
    let rows = categories
        .iter()
        .map(|category| {
            let outcome = match membership.get(&category.key) {
                None => CategoryOutcome::NoData,
                Some(candidates) if candidates.is_empty() => CategoryOutcome::NoData,
                Some(candidates) => match best_candidate(candidates, players) {
                    Some(winner) => {
                        grand_total = grand_total.saturating_add(winner.fantasy_points);
                        CategoryOutcome::Winner(winner.clone())
                    }
                    None => CategoryOutcome::NotFound,
                },
            };
            CategoryRow {
                category: category.clone(),
                outcome,
            }
        })
        .collect();

    CategorySummary { rows, grand_total }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
