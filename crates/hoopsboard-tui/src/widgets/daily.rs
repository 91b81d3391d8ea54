// Daily widget: points gained since the prior-day snapshot.

use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap};
use ratatui::Frame;

use hoopsboard_app::protocol::{DashboardView, Section};

pub fn render(frame: &mut Frame, area: Rect, dashboard: &DashboardView) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("Daily Gains ({})", dashboard.snapshot_date));

    let entries = match &dashboard.daily {
        Section::Ready(entries) => entries,
        Section::Unavailable(reason) => {
            let paragraph = Paragraph::new(format!("Daily snapshot unavailable: {reason}"))
                .style(Style::default().fg(Color::Red))
                .wrap(Wrap { trim: true })
                .block(block);
            frame.render_widget(paragraph, area);
            return;
        }
    };

    let rows: Vec<Row> = entries
        .iter()
        .map(|d| {
            Row::new(vec![
                Cell::from(d.name.clone()),
                Cell::from(d.team.clone()),
                Cell::from(format_gain(d.daily_points)),
            ])
        })
        .collect();

    let header = Row::new(vec![Cell::from("Name"), Cell::from("Team"), Cell::from("+FP")])
        .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD));
    let widths = [Constraint::Min(14), Constraint::Min(10), Constraint::Length(6)];
    let table = Table::new(rows, widths).header(header).block(block);
    frame.render_widget(table, area);
}

/// Signed gain, e.g. "+12", "0", "-3".
pub fn format_gain(points: i64) -> String {
    if points > 0 {
        format!("+{points}")
    } else {
        points.to_string()
    }
}
