// Players widget: every ranked player with raw stats, fantasy points and
// points per game, sortable by any column. The # column is the row's
// position in the current order, so it follows re-sorts.

use ratatui::layout::{Constraint, Rect};
use ratatui::widgets::{Block, Borders, Cell, Row, Table};
use ratatui::Frame;

use hoopsboard_basketball::sorting::PLAYER_COLUMNS;
use hoopsboard_basketball::ScoredPlayer;

use super::{sortable_header, table_title};
use crate::TableView;

pub fn render(frame: &mut Frame, area: Rect, players: &[ScoredPlayer], view: &TableView) {
    let rows: Vec<Row> = if players.is_empty() {
        vec![Row::new(vec![Cell::from(""), Cell::from("No players")])]
    } else {
        players
            .iter()
            .enumerate()
            .skip(view.scroll)
            .map(|(i, p)| player_row(i + 1, p))
            .collect()
    };

    let widths = [
        Constraint::Length(4),  // #
        Constraint::Min(16),    // name
        Constraint::Min(12),    // team
        Constraint::Length(4),  // gp
        Constraint::Length(5),  // min
        Constraint::Length(5),  // pts
        Constraint::Length(5),  // reb
        Constraint::Length(5),  // ast
        Constraint::Length(5),  // blk
        Constraint::Length(5),  // stl
        Constraint::Length(5),  // 3pm
        Constraint::Length(5),  // fp
        Constraint::Length(6),  // fp/g
    ];

    let table = Table::new(rows, widths)
        .header(sortable_header(PLAYER_COLUMNS, view))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(table_title("Players", PLAYER_COLUMNS, view)),
        );
    frame.render_widget(table, area);
}

fn player_row(position: usize, p: &ScoredPlayer) -> Row<'static> {
    let line = &p.line;
    Row::new(vec![
        Cell::from(position.to_string()),
        Cell::from(line.name.clone()),
        Cell::from(line.team.clone()),
        Cell::from(line.games.to_string()),
        Cell::from(line.minutes.to_string()),
        Cell::from(line.points.to_string()),
        Cell::from(line.rebounds.to_string()),
        Cell::from(line.assists.to_string()),
        Cell::from(line.blocks.to_string()),
        Cell::from(line.steals.to_string()),
        Cell::from(line.threes.to_string()),
        Cell::from(p.fantasy_points.to_string()),
        Cell::from(format!("{:.1}", p.points_per_game)),
    ])
}
