// Teams widget: full team standings with per-slot points, sortable by
// any column.

use ratatui::layout::{Constraint, Rect};
use ratatui::widgets::{Block, Borders, Cell, Row, Table};
use ratatui::Frame;

use hoopsboard_basketball::roster::{RosterSlot, TeamEntry, ROSTER_SIZE};
use hoopsboard_basketball::sorting::TEAM_COLUMNS;

use super::{sortable_header, table_title};
use crate::TableView;

pub fn render(frame: &mut Frame, area: Rect, teams: &[TeamEntry], view: &TableView) {
    let rows: Vec<Row> = if teams.is_empty() {
        vec![Row::new(vec![Cell::from(""), Cell::from("No teams")])]
    } else {
        teams
            .iter()
            .skip(view.scroll)
            .map(|team| {
                let mut cells = Vec::with_capacity(TEAM_COLUMNS.len());
                cells.push(Cell::from(team.rank.to_string()));
                cells.push(Cell::from(team.team.clone()));
                cells.extend(team.slots.iter().map(|s| Cell::from(format_slot(s))));
                cells.push(Cell::from(team.total_score.to_string()));
                Row::new(cells)
            })
            .collect()
    };

    let mut widths = vec![Constraint::Length(4), Constraint::Min(14)];
    widths.extend(std::iter::repeat(Constraint::Min(8)).take(ROSTER_SIZE));
    widths.push(Constraint::Length(7));

    let table = Table::new(rows, widths)
        .header(sortable_header(TEAM_COLUMNS, view))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(table_title("Teams", TEAM_COLUMNS, view)),
        );
    frame.render_widget(table, area);
}

/// "Name (pts)", or "-" for an empty slot.
pub fn format_slot(slot: &RosterSlot) -> String {
    if slot.player.trim().is_empty() {
        "-".to_string()
    } else {
        format!("{} ({})", slot.player, slot.points)
    }
}
