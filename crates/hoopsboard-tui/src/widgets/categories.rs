// Categories widget: best scorer per category and the grand total.

use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap};
use ratatui::Frame;

use hoopsboard_app::protocol::Section;
use hoopsboard_basketball::category::{CategoryOutcome, CategorySummary};

pub fn render(frame: &mut Frame, area: Rect, section: &Section<CategorySummary>) {
    let block = Block::default().borders(Borders::ALL).title("Categories");
    let summary = match section {
        Section::Ready(summary) => summary,
        Section::Unavailable(reason) => {
            let paragraph = Paragraph::new(format!("Categories unavailable: {reason}"))
                .style(Style::default().fg(Color::Red))
                .wrap(Wrap { trim: true })
                .block(block);
            frame.render_widget(paragraph, area);
            return;
        }
    };

    let mut rows: Vec<Row> = summary
        .rows
        .iter()
        .map(|row| {
            let (player, points) = outcome_cells(&row.outcome);
            Row::new(vec![
                Cell::from(row.category.label.clone()),
                Cell::from(player),
                Cell::from(points),
            ])
        })
        .collect();
    rows.push(
        Row::new(vec![
            Cell::from("Total"),
            Cell::from(""),
            Cell::from(summary.grand_total.to_string()),
        ])
        .style(Style::default().add_modifier(Modifier::BOLD)),
    );

    let header = Row::new(vec![Cell::from("Category"), Cell::from("Best"), Cell::from("FP")])
        .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD));
    let widths = [Constraint::Min(10), Constraint::Min(16), Constraint::Length(6)];
    let table = Table::new(rows, widths).header(header).block(block);
    frame.render_widget(table, area);
}

/// Player and points text for one category row.
pub fn outcome_cells(outcome: &CategoryOutcome) -> (String, String) {
    match outcome {
        CategoryOutcome::NoData => ("No data".to_string(), "-".to_string()),
        CategoryOutcome::NotFound => ("Not found".to_string(), "-".to_string()),
        CategoryOutcome::Winner(p) => (p.name().to_string(), p.fantasy_points.to_string()),
    }
}
