// Message types passed between the app orchestrator and the TUI.

use hoopsboard_basketball::category::CategorySummary;
use hoopsboard_basketball::daily::DailyEntry;
use hoopsboard_basketball::sorting::{ColumnSpec, SortDirection, PLAYER_COLUMNS, TEAM_COLUMNS};
use hoopsboard_basketball::{ScoredPlayer, TeamEntry};

/// Which full table a command or update refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableId {
    Teams,
    Players,
}

impl TableId {
    pub fn columns(self) -> &'static [ColumnSpec] {
        match self {
            TableId::Teams => TEAM_COLUMNS,
            TableId::Players => PLAYER_COLUMNS,
        }
    }

    pub fn column(self, key: &str) -> Option<&'static ColumnSpec> {
        self.columns().iter().find(|c| c.key == key)
    }
}

/// A secondary dashboard section that may have failed to load on its own.
#[derive(Debug, Clone, PartialEq)]
pub enum Section<T> {
    Ready(T),
    Unavailable(String),
}

impl<T> Section<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            Section::Ready(v) => Some(v),
            Section::Unavailable(_) => None,
        }
    }
}

/// Everything the TUI needs to draw one loaded dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub league_name: String,
    pub top_teams: Vec<TeamEntry>,
    pub top_players: Vec<ScoredPlayer>,
    pub teams: Vec<TeamEntry>,
    pub players: Vec<ScoredPlayer>,
    pub categories: Section<CategorySummary>,
    pub daily: Section<Vec<DailyEntry>>,
    /// Snapshot date key (`YYYY-MM-DD`).
    pub snapshot_date: String,
    /// Local time the load finished, preformatted.
    pub loaded_at: String,
}

/// Rows of a re-sorted table.
#[derive(Debug, Clone, PartialEq)]
pub enum SortedRows {
    Teams(Vec<TeamEntry>),
    Players(Vec<ScoredPlayer>),
}

/// Updates pushed from the app orchestrator to the TUI.
#[derive(Debug, Clone, PartialEq)]
pub enum UiUpdate {
    Loading,
    Loaded(Box<DashboardView>),
    LoadFailed(String),
    TableSorted {
        column: String,
        direction: SortDirection,
        rows: SortedRows,
    },
}

/// Commands sent from the TUI to the app orchestrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserCommand {
    Refresh,
    Sort { table: TableId, column: String },
    Quit,
}
