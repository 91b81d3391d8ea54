// TUI widget modules for each dashboard panel, plus the header and row
// helpers the sortable tables share.

pub mod categories;
pub mod daily;
pub mod help_bar;
pub mod leaders;
pub mod players;
pub mod status_bar;
pub mod teams;

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Cell, Row};

use hoopsboard_basketball::sorting::{ColumnSpec, SortDirection};

use crate::TableView;

/// Arrow shown next to the sorted column's title.
pub fn sort_arrow(direction: SortDirection) -> &'static str {
    match direction {
        SortDirection::Asc => "▲",
        SortDirection::Desc => "▼",
    }
}

/// Header row for a sortable table: the sorted column carries an arrow and
/// the column under the cursor is highlighted.
pub fn sortable_header(columns: &[ColumnSpec], view: &TableView) -> Row<'static> {
    let cells = columns.iter().enumerate().map(|(i, column)| {
        let title = match &view.sorted_by {
            Some((key, direction)) if key == column.key => {
                format!("{}{}", column.title, sort_arrow(*direction))
            }
            _ => column.title.to_string(),
        };
        let style = if i == view.column_cursor {
            Style::default().fg(Color::Black).bg(Color::White)
        } else {
            Style::default()
        };
        Cell::from(title).style(style)
    });
    Row::new(cells).style(Style::default().add_modifier(Modifier::BOLD))
}

/// Title for a full table: its name plus the active sort, if any.
pub fn table_title(name: &str, columns: &[ColumnSpec], view: &TableView) -> String {
    match &view.sorted_by {
        Some((key, direction)) => {
            let title = columns
                .iter()
                .find(|c| c.key == key)
                .map_or(key.as_str(), |c| c.title);
            format!("{name} (sorted by {title} {})", sort_arrow(*direction))
        }
        None => name.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
