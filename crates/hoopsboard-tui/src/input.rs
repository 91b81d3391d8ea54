// Keyboard input handling and command dispatch.
//
// Translates crossterm key events into UserCommand messages for the app
// orchestrator, or into local ViewState changes (tab switching, column
// cursor, scrolling).

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use hoopsboard_app::protocol::UserCommand;

use super::{Tab, ViewState};

/// Rows moved by PageUp / PageDown.
const PAGE_SIZE: usize = 10;

/// Handle a keyboard event.
///
/// Returns `Some(UserCommand)` when the key press should go to the app
/// orchestrator (Sort, Refresh, Quit) and `None` when it was handled
/// locally.
pub fn handle_key(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    // Windows reports Press and Release for each keystroke.
    if key_event.kind != KeyEventKind::Press {
        return None;
    }

    if key_event.modifiers.contains(KeyModifiers::CONTROL) && key_event.code == KeyCode::Char('c') {
        return Some(UserCommand::Quit);
    }

    match key_event.code {
        KeyCode::Char('q') => Some(UserCommand::Quit),
        KeyCode::Char('r') => Some(UserCommand::Refresh),

        // Tab switching
        KeyCode::Char('1') => switch_tab(view_state, Tab::Overview),
        KeyCode::Char('2') => switch_tab(view_state, Tab::Teams),
        KeyCode::Char('3') => switch_tab(view_state, Tab::Players),
        KeyCode::Tab => {
            let next = match view_state.active_tab {
                Tab::Overview => Tab::Teams,
                Tab::Teams => Tab::Players,
                Tab::Players => Tab::Overview,
            };
            switch_tab(view_state, next)
        }

        // Column cursor
        KeyCode::Left | KeyCode::Char('h') => {
            move_cursor(view_state, -1);
            None
        }
        KeyCode::Right | KeyCode::Char('l') => {
            move_cursor(view_state, 1);
            None
        }

        // Sort by the highlighted column
        KeyCode::Enter | KeyCode::Char('s') => sort_command(view_state),

        // Scrolling
        KeyCode::Up | KeyCode::Char('k') => {
            scroll(view_state, -1);
            None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            scroll(view_state, 1);
            None
        }
        KeyCode::PageUp => {
            scroll(view_state, -(PAGE_SIZE as isize));
            None
        }
        KeyCode::PageDown => {
            scroll(view_state, PAGE_SIZE as isize);
            None
        }
        KeyCode::Home => {
            scroll(view_state, isize::MIN);
            None
        }

        _ => None,
    }
}

fn switch_tab(view_state: &mut ViewState, tab: Tab) -> Option<UserCommand> {
    view_state.active_tab = tab;
    None
}

fn move_cursor(view_state: &mut ViewState, delta: isize) {
    let Some(id) = view_state.active_tab.table() else {
        return;
    };
    let last = id.columns().len().saturating_sub(1);
    let table = view_state.table_mut(id);
    table.column_cursor = table.column_cursor.saturating_add_signed(delta).min(last);
}

fn sort_command(view_state: &ViewState) -> Option<UserCommand> {
    let id = view_state.active_tab.table()?;
    view_state.dashboard.as_ref()?;
    let column = id.columns().get(view_state.table(id).column_cursor)?;
    Some(UserCommand::Sort {
        table: id,
        column: column.key.to_string(),
    })
}

/// Scroll the active table, keeping at least one row visible.
fn scroll(view_state: &mut ViewState, delta: isize) {
    let Some(id) = view_state.active_tab.table() else {
        return;
    };
    let last = view_state.row_count(id).saturating_sub(1);
    let table = view_state.table_mut(id);
    table.scroll = table.scroll.saturating_add_signed(delta).min(last);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
