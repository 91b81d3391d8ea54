// Application orchestrator.
//
// Owns the loaded standings and one TableSorter per full table. The TUI
// never touches either; it sends UserCommands and renders UiUpdates.

use std::sync::Arc;

use chrono::{Local, NaiveDateTime};
use tokio::sync::mpsc;
use tracing::{error, info, warn};

use hoopsboard_basketball::sorting::TableSorter;
use hoopsboard_core::config::Config;
use hoopsboard_core::fetch::Fetcher;

use crate::load::{self, Dashboard};
use crate::protocol::{DashboardView, SortedRows, TableId, UiUpdate, UserCommand};

/// Source of the current local time. Tests pin it.
pub type Clock = Arc<dyn Fn() -> NaiveDateTime + Send + Sync>;

pub struct AppState {
    pub config: Config,
    fetcher: Arc<dyn Fetcher>,
    clock: Clock,
    pub dashboard: Option<Dashboard>,
    pub team_sorter: TableSorter,
    pub player_sorter: TableSorter,
}

impl AppState {
    pub fn new(config: Config, fetcher: Arc<dyn Fetcher>) -> Self {
        Self::with_clock(config, fetcher, Arc::new(|| Local::now().naive_local()))
    }

    pub fn with_clock(config: Config, fetcher: Arc<dyn Fetcher>, clock: Clock) -> Self {
        AppState {
            config,
            fetcher,
            clock,
            dashboard: None,
            team_sorter: TableSorter::new(),
            player_sorter: TableSorter::new(),
        }
    }

    /// Run a full load. Sort state is reset either way; a failed load also
    /// drops the previous dashboard.
    pub async fn reload(&mut self) -> UiUpdate {
        self.team_sorter = TableSorter::new();
        self.player_sorter = TableSorter::new();

        let now = (self.clock)();
        match load::load(&self.config, self.fetcher.as_ref(), now).await {
            Ok(dashboard) => {
                let view = self.view(&dashboard);
                self.dashboard = Some(dashboard);
                UiUpdate::Loaded(Box::new(view))
            }
            Err(e) => {
                error!("load failed: {}", e);
                self.dashboard = None;
                UiUpdate::LoadFailed(format!("Error loading data: {e}"))
            }
        }
    }

    /// Re-sort one table by `column`. Returns `None` when nothing is loaded
    /// or the column does not belong to that table.
    pub fn sort(&mut self, table: TableId, column: &str) -> Option<UiUpdate> {
        let dashboard = self.dashboard.as_ref()?;
        let Some(col) = table.column(column) else {
            warn!("ignoring sort on unknown {:?} column {:?}", table, column);
            return None;
        };
        let standings = &dashboard.standings;
        let (direction, rows) = match table {
            TableId::Teams => {
                let rows = self
                    .team_sorter
                    .resort(col.key, col.kind, standings.teams.as_slice());
                (self.team_sorter.direction(), SortedRows::Teams(rows))
            }
            TableId::Players => {
                let rows = self
                    .player_sorter
                    .resort(col.key, col.kind, standings.players.as_slice());
                (self.player_sorter.direction(), SortedRows::Players(rows))
            }
        };
        info!("sorted {:?} by {} {:?}", table, col.key, direction);
        Some(UiUpdate::TableSorted {
            column: col.key.to_string(),
            direction,
            rows,
        })
    }

    fn view(&self, dashboard: &Dashboard) -> DashboardView {
        let top_n = self.config.league.top_n;
        let standings = &dashboard.standings;
        DashboardView {
            league_name: self.config.league.name.clone(),
            top_teams: standings.teams.top(top_n).to_vec(),
            top_players: standings.players.top(top_n).to_vec(),
            teams: standings.teams.as_slice().to_vec(),
            players: standings.players.as_slice().to_vec(),
            categories: dashboard.categories.clone(),
            daily: dashboard.daily.clone(),
            snapshot_date: dashboard.snapshot_date.format("%Y-%m-%d").to_string(),
            loaded_at: dashboard.loaded_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Main event loop
// ---------------------------------------------------------------------------

/// Load once, then serve commands until Quit or the TUI goes away.
pub async fn run(
    mut cmd_rx: mpsc::Receiver<UserCommand>,
    ui_tx: mpsc::Sender<UiUpdate>,
    mut state: AppState,
) -> anyhow::Result<()> {
    info!("Application event loop started");

    if !refresh(&mut state, &ui_tx).await {
        return Ok(());
    }

    while let Some(cmd) = cmd_rx.recv().await {
        match cmd {
            UserCommand::Quit => {
                info!("Quit command received, shutting down");
                break;
            }
            UserCommand::Refresh => {
                if !refresh(&mut state, &ui_tx).await {
                    break;
                }
            }
            UserCommand::Sort { table, column } => {
                if let Some(update) = state.sort(table, &column) {
                    if ui_tx.send(update).await.is_err() {
                        break;
                    }
                }
            }
        }
    }

    info!("Application event loop stopped");
    Ok(())
}

/// Returns false once the UI channel has closed.
async fn refresh(state: &mut AppState, ui_tx: &mpsc::Sender<UiUpdate>) -> bool {
    if ui_tx.send(UiUpdate::Loading).await.is_err() {
        return false;
    }
    let update = state.reload().await;
    ui_tx.send(update).await.is_ok()
}
