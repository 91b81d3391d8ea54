// TUI dashboard: layout, input handling, and widget rendering.
//
// The TUI owns a `ViewState` holding the last dashboard the app pushed.
// The app orchestrator sends `UiUpdate` messages over an mpsc channel; the
// TUI applies them to `ViewState` and re-renders at ~30 fps. Sorting is
// requested with `UserCommand::Sort` and the re-sorted rows come back as a
// `UiUpdate::TableSorted`.

pub mod input;
pub mod layout;
pub mod widgets;

use std::time::Duration;

use crossterm::event::{Event, EventStream};
use futures_util::StreamExt;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;
use tokio::sync::mpsc;

use hoopsboard_app::protocol::{DashboardView, SortedRows, TableId, UiUpdate, UserCommand};
use hoopsboard_basketball::sorting::SortDirection;

use layout::build_layout;

// ---------------------------------------------------------------------------
// Tabs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Overview,
    Teams,
    Players,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Overview, Tab::Teams, Tab::Players];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Teams => "Teams",
            Tab::Players => "Players",
        }
    }

    /// The sortable table shown on this tab, if any.
    pub fn table(self) -> Option<TableId> {
        match self {
            Tab::Overview => None,
            Tab::Teams => Some(TableId::Teams),
            Tab::Players => Some(TableId::Players),
        }
    }
}

// ---------------------------------------------------------------------------
// ViewState
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum LoadStatus {
    Loading,
    Ready,
    Failed(String),
}

/// Cursor, scroll and sort indicator for one full table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableView {
    /// Index of the highlighted column.
    pub column_cursor: usize,
    /// First visible row.
    pub scroll: usize,
    /// Column and direction of the last sort the app confirmed.
    pub sorted_by: Option<(String, SortDirection)>,
}

/// TUI-local state mirrored from app updates.
#[derive(Debug, Clone)]
pub struct ViewState {
    pub status: LoadStatus,
    /// Last successfully loaded dashboard. Team and player rows are in
    /// display order (re-sorted in place by `TableSorted`).
    pub dashboard: Option<DashboardView>,
    pub active_tab: Tab,
    pub teams_table: TableView,
    pub players_table: TableView,
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState {
            status: LoadStatus::Loading,
            dashboard: None,
            active_tab: Tab::Overview,
            teams_table: TableView::default(),
            players_table: TableView::default(),
        }
    }
}

impl ViewState {
    pub fn table(&self, id: TableId) -> &TableView {
        match id {
            TableId::Teams => &self.teams_table,
            TableId::Players => &self.players_table,
        }
    }

    pub fn table_mut(&mut self, id: TableId) -> &mut TableView {
        match id {
            TableId::Teams => &mut self.teams_table,
            TableId::Players => &mut self.players_table,
        }
    }

    /// Number of rows in a full table (0 when nothing is loaded).
    pub fn row_count(&self, id: TableId) -> usize {
        self.dashboard.as_ref().map_or(0, |d| match id {
            TableId::Teams => d.teams.len(),
            TableId::Players => d.players.len(),
        })
    }
}

// ---------------------------------------------------------------------------
// UiUpdate processing
// ---------------------------------------------------------------------------

/// Apply a single UiUpdate to the ViewState.
pub fn apply_ui_update(state: &mut ViewState, update: UiUpdate) {
    match update {
        UiUpdate::Loading => {
            state.status = LoadStatus::Loading;
        }
        UiUpdate::Loaded(view) => {
            state.dashboard = Some(*view);
            state.status = LoadStatus::Ready;
            // The app resets both sorters on every load.
            for id in [TableId::Teams, TableId::Players] {
                let table = state.table_mut(id);
                table.sorted_by = None;
                table.scroll = 0;
            }
        }
        UiUpdate::LoadFailed(message) => {
            state.dashboard = None;
            state.status = LoadStatus::Failed(message);
        }
        UiUpdate::TableSorted {
            column,
            direction,
            rows,
        } => {
            let Some(dashboard) = state.dashboard.as_mut() else {
                return;
            };
            let id = match rows {
                SortedRows::Teams(rows) => {
                    dashboard.teams = rows;
                    TableId::Teams
                }
                SortedRows::Players(rows) => {
                    dashboard.players = rows;
                    TableId::Players
                }
            };
            let table = state.table_mut(id);
            table.sorted_by = Some((column, direction));
            table.scroll = 0;
        }
    }
}

// ---------------------------------------------------------------------------
// Render frame
// ---------------------------------------------------------------------------

/// Render the complete dashboard frame.
pub fn render_frame(frame: &mut Frame, state: &ViewState) {
    let layout = build_layout(frame.area());

    widgets::status_bar::render(frame, layout.status_bar, state);
    widgets::help_bar::render(frame, layout.help_bar, state);

    if let LoadStatus::Failed(message) = &state.status {
        let paragraph = Paragraph::new(message.as_str())
            .style(Style::default().fg(Color::Red))
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title("Error"));
        frame.render_widget(paragraph, layout.main_panel);
        return;
    }

    let Some(dashboard) = state.dashboard.as_ref() else {
        let paragraph = Paragraph::new("Loading standings...")
            .block(Block::default().borders(Borders::ALL).title(state.active_tab.label()));
        frame.render_widget(paragraph, layout.main_panel);
        return;
    };

    match state.active_tab {
        Tab::Overview => {
            let overview = layout::build_overview(layout.main_panel);
            widgets::leaders::render_teams(frame, overview.top_teams, dashboard);
            widgets::leaders::render_players(frame, overview.top_players, dashboard);
            widgets::categories::render(frame, overview.categories, &dashboard.categories);
            widgets::daily::render(frame, overview.daily, dashboard);
        }
        Tab::Teams => {
            widgets::teams::render(frame, layout.main_panel, &dashboard.teams, &state.teams_table);
        }
        Tab::Players => {
            widgets::players::render(frame, layout.main_panel, &dashboard.players, &state.players_table);
        }
    }
}

// ---------------------------------------------------------------------------
// Main TUI loop
// ---------------------------------------------------------------------------

/// Run the TUI event loop.
///
/// 1. Initializes the terminal (raw mode, alternate screen).
/// 2. Installs a panic hook to restore the terminal on crash.
/// 3. Runs an async select loop: UI updates, keyboard input, render ticks.
/// 4. Restores the terminal on exit.
pub async fn run(
    mut ui_rx: mpsc::Receiver<UiUpdate>,
    cmd_tx: mpsc::Sender<UserCommand>,
) -> anyhow::Result<()> {
    // 1. Initialize terminal
    let mut terminal = ratatui::init();

    // 2. Restore the terminal before the default panic output.
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));

    let mut view_state = ViewState::default();
    let mut event_stream = EventStream::new();

    // ~30fps
    let mut render_tick = tokio::time::interval(Duration::from_millis(33));
    render_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    // 3. Main loop
    let result = loop {
        tokio::select! {
            update = ui_rx.recv() => {
                match update {
                    Some(ui_update) => apply_ui_update(&mut view_state, ui_update),
                    // App is shutting down
                    None => break Ok(()),
                }
            }

            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key_event))) => {
                        if let Some(cmd) = input::handle_key(key_event, &mut view_state) {
                            let quit = cmd == UserCommand::Quit;
                            let _ = cmd_tx.send(cmd).await;
                            if quit {
                                break Ok(());
                            }
                        }
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => break Err(e.into()),
                    None => break Ok(()),
                }
            }

            _ = render_tick.tick() => {
                if let Err(e) = terminal.draw(|frame| render_frame(frame, &view_state)) {
                    break Err(e.into());
                }
            }
        }
    };

    // 4. Restore terminal
    ratatui::restore();

    result
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
