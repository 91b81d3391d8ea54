// Column re-sorting for the players and teams tables.
//
// A `TableSorter` holds one table's sort state. Selecting the current column
// again flips the direction; selecting a new column resets the direction to
// that column kind's default (numbers descending, text ascending). Sorting
// always works on a copy of the rows.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::roster::{TeamEntry, ROSTER_SIZE};
use crate::scoring::ScoredPlayer;

// ---------------------------------------------------------------------------
// Column model
// ---------------------------------------------------------------------------

/// How a column's values are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnKind {
    Number,
    Text,
}

impl ColumnKind {
    pub fn default_direction(self) -> SortDirection {
        match self {
            ColumnKind::Number => SortDirection::Desc,
            ColumnKind::Text => SortDirection::Asc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

/// A raw cell value as a row exposes it.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Number(f64),
    Text(String),
    Missing,
}

impl CellValue {
    /// Numeric coercion. Non-numeric text and non-finite numbers are `None`.
    pub fn as_number(&self) -> Option<f64> {
        let n = match self {
            CellValue::Number(n) => *n,
            CellValue::Text(s) => s.trim().parse::<f64>().ok()?,
            CellValue::Missing => return None,
        };
        n.is_finite().then_some(n)
    }

    /// Case-folded text for comparison.
    pub fn as_text(&self) -> Option<String> {
        match self {
            CellValue::Number(n) => Some(n.to_string()),
            CellValue::Text(s) => Some(s.to_lowercase()),
            CellValue::Missing => None,
        }
    }
}

/// Rows that can be re-sorted by named column.
pub trait SortableRow {
    fn cell(&self, column: &str) -> CellValue;
}

/// Static description of a sortable table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    pub key: &'static str,
    pub title: &'static str,
    pub kind: ColumnKind,
}

const fn col(key: &'static str, title: &'static str, kind: ColumnKind) -> ColumnSpec {
    ColumnSpec { key, title, kind }
}

/// Full players table columns, in display order.
pub const PLAYER_COLUMNS: &[ColumnSpec] = &[
    col("rank", "#", ColumnKind::Number),
    col("name", "Name", ColumnKind::Text),
    col("team", "Team", ColumnKind::Text),
    col("games", "GP", ColumnKind::Number),
    col("minutes", "MIN", ColumnKind::Number),
    col("points", "PTS", ColumnKind::Number),
    col("rebounds", "REB", ColumnKind::Number),
    col("assists", "AST", ColumnKind::Number),
    col("blocks", "BLK", ColumnKind::Number),
    col("steals", "STL", ColumnKind::Number),
    col("threes", "3PM", ColumnKind::Number),
    col("fantasy_points", "FP", ColumnKind::Number),
    col("points_per_game", "FP/G", ColumnKind::Number),
];

/// Full teams table columns, in display order. Slot columns sort by the
/// slot's resolved points.
pub const TEAM_COLUMNS: &[ColumnSpec] = &[
    col("rank", "#", ColumnKind::Number),
    col("team", "Team", ColumnKind::Text),
    col("p1_points", "P1", ColumnKind::Number),
    col("p2_points", "P2", ColumnKind::Number),
    col("p3_points", "P3", ColumnKind::Number),
    col("p4_points", "P4", ColumnKind::Number),
    col("p5_points", "P5", ColumnKind::Number),
    col("p6_points", "P6", ColumnKind::Number),
    col("p7_points", "P7", ColumnKind::Number),
    col("p8_points", "P8", ColumnKind::Number),
    col("p9_points", "P9", ColumnKind::Number),
    col("p10_points", "P10", ColumnKind::Number),
    col("total_score", "Total", ColumnKind::Number),
];

// ---------------------------------------------------------------------------
// Comparison
// ---------------------------------------------------------------------------

/// Compare two cells. A missing (or uncoercible) value always sorts after a
/// present one, whichever the direction.
pub fn compare_cells(a: &CellValue, b: &CellValue, kind: ColumnKind, direction: SortDirection) -> Ordering {
    match kind {
        ColumnKind::Number => order_present(a.as_number(), b.as_number(), direction, |x, y| x.total_cmp(y)),
        ColumnKind::Text => order_present(a.as_text(), b.as_text(), direction, |x, y| x.cmp(y)),
    }
}

fn order_present<T>(
    a: Option<T>,
    b: Option<T>,
    direction: SortDirection,
    cmp: impl Fn(&T, &T) -> Ordering,
) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => direction.apply(cmp(&a, &b)),
    }
}

// ---------------------------------------------------------------------------
// TableSorter
// ---------------------------------------------------------------------------

/// The column a table is currently sorted by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortColumn {
    pub key: String,
    pub kind: ColumnKind,
}

/// Per-table sort toggle. Starts unsorted with direction `Desc`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSorter {
    column: Option<SortColumn>,
    direction: SortDirection,
}

impl Default for TableSorter {
    fn default() -> Self {
        TableSorter {
            column: None,
            direction: SortDirection::Desc,
        }
    }
}

impl TableSorter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn column(&self) -> Option<&SortColumn> {
        self.column.as_ref()
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    /// Register a column selection and return the resulting direction.
    pub fn select(&mut self, key: &str, kind: ColumnKind) -> SortDirection {
        let same = self.column.as_ref().is_some_and(|c| c.key == key);
        self.direction = if same {
            self.direction.flipped()
        } else {
            kind.default_direction()
        };
        self.column = Some(SortColumn {
            key: key.to_string(),
            kind,
        });
        debug!("sort by {key} ({:?}) {:?}", kind, self.direction);
        self.direction
    }

    /// A stably sorted copy of `rows` under the current state. With no
    /// column selected the copy keeps the input order.
    pub fn sorted<R: SortableRow + Clone>(&self, rows: &[R]) -> Vec<R> {
        let mut out = rows.to_vec();
        if let Some(column) = &self.column {
            let direction = self.direction;
            out.sort_by(|a, b| {
                compare_cells(&a.cell(&column.key), &b.cell(&column.key), column.kind, direction)
            });
        }
        out
    }

    /// `select` followed by `sorted`.
    pub fn resort<R: SortableRow + Clone>(&mut self, key: &str, kind: ColumnKind, rows: &[R]) -> Vec<R> {
        self.select(key, kind);
        self.sorted(rows)
    }
}

// ---------------------------------------------------------------------------
// Row impls
// ---------------------------------------------------------------------------

impl SortableRow for ScoredPlayer {
    fn cell(&self, column: &str) -> CellValue {
        let n = |v: u32| CellValue::Number(f64::from(v));
        match column {
            "rank" => CellValue::Number(self.rank as f64),
            "name" => CellValue::Text(self.line.name.clone()),
            "team" => CellValue::Text(self.line.team.clone()),
            "games" => n(self.line.games),
            "minutes" => n(self.line.minutes),
            "points" => n(self.line.points),
            "rebounds" => n(self.line.rebounds),
            "assists" => n(self.line.assists),
            "blocks" => n(self.line.blocks),
            "steals" => n(self.line.steals),
            "threes" => n(self.line.threes),
            "fantasy_points" => n(self.fantasy_points),
            "points_per_game" => CellValue::Number(self.points_per_game),
            _ => CellValue::Missing,
        }
    }
}

/// Parse `pN` / `pN_points` into a 0-based slot index and whether the
/// points were asked for.
fn slot_column(column: &str) -> Option<(usize, bool)> {
    let rest = column.strip_prefix('p')?;
    let (digits, wants_points) = match rest.strip_suffix("_points") {
        Some(d) => (d, true),
        None => (rest, false),
    };
    let n: usize = digits.parse().ok()?;
    (1..=ROSTER_SIZE).contains(&n).then_some((n - 1, wants_points))
}

impl SortableRow for TeamEntry {
    fn cell(&self, column: &str) -> CellValue {
        match column {
            "rank" => CellValue::Number(self.rank as f64),
            "team" => CellValue::Text(self.team.clone()),
            "total_score" => CellValue::Number(f64::from(self.total_score)),
            other => match slot_column(other) {
                Some((i, true)) => CellValue::Number(f64::from(self.slots[i].points)),
                Some((i, false)) => CellValue::Text(self.slots[i].player.clone()),
                None => CellValue::Missing,
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
