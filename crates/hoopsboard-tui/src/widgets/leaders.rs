// Leader widgets for the Overview tab: top-N teams and top-N players.

use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Row, Table};
use ratatui::Frame;

use hoopsboard_app::protocol::DashboardView;

fn header(titles: &[&'static str]) -> Row<'static> {
    Row::new(titles.iter().map(|t| Cell::from(*t)))
        .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
}

pub fn render_teams(frame: &mut Frame, area: Rect, dashboard: &DashboardView) {
    let rows: Vec<Row> = dashboard
        .top_teams
        .iter()
        .map(|t| {
            Row::new(vec![
                Cell::from(t.rank.to_string()),
                Cell::from(t.team.clone()),
                Cell::from(t.total_score.to_string()),
            ])
        })
        .collect();

    let widths = [Constraint::Length(4), Constraint::Min(16), Constraint::Length(7)];
    let table = Table::new(rows, widths)
        .header(header(&["#", "Team", "Total"]))
        .block(Block::default().borders(Borders::ALL).title("Top Teams"));
    frame.render_widget(table, area);
}

pub fn render_players(frame: &mut Frame, area: Rect, dashboard: &DashboardView) {
    let rows: Vec<Row> = dashboard
        .top_players
        .iter()
        .map(|p| {
            Row::new(vec![
                Cell::from(p.rank.to_string()),
                Cell::from(p.name().to_string()),
                Cell::from(p.team().to_string()),
                Cell::from(p.fantasy_points.to_string()),
                Cell::from(format!("{:.1}", p.points_per_game)),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(4),
        Constraint::Min(14),
        Constraint::Min(10),
        Constraint::Length(5),
        Constraint::Length(6),
    ];
    let table = Table::new(rows, widths)
        .header(header(&["#", "Name", "Team", "FP", "FP/G"]))
        .block(Block::default().borders(Borders::ALL).title("Top Players"));
    frame.render_widget(table, area);
}
