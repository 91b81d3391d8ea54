// Status bar widget: league name, tab indicator, load status.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::{LoadStatus, Tab, ViewState};

pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let mut spans = Vec::new();

    let league = state
        .dashboard
        .as_ref()
        .map_or("Hoopsboard", |d| d.league_name.as_str());
    spans.push(Span::styled(
        format!(" {league} "),
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    ));
    spans.push(Span::styled("| ", Style::default().fg(Color::Gray)));
    spans.extend(tab_spans(state.active_tab));
    spans.push(Span::styled("| ", Style::default().fg(Color::Gray)));

    let (text, color) = load_indicator(state);
    spans.push(Span::styled(text, Style::default().fg(color)));

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Black));
    frame.render_widget(paragraph, area);
}

/// Tab labels with the active one highlighted, e.g. "[1:Overview] [2:Teams] [3:Players]".
pub fn tab_spans(active: Tab) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    for (i, tab) in Tab::ALL.into_iter().enumerate() {
        let style = if tab == active {
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        spans.push(Span::styled(format!("[{}:{}]", i + 1, tab.label()), style));
        spans.push(Span::raw(" "));
    }
    spans
}

pub fn load_indicator(state: &ViewState) -> (String, Color) {
    match (&state.status, &state.dashboard) {
        (LoadStatus::Loading, _) => ("Loading...".to_string(), Color::Yellow),
        (LoadStatus::Failed(_), _) => ("Load failed".to_string(), Color::Red),
        (LoadStatus::Ready, Some(d)) => (
            format!("Updated {} | snapshot {}", d.loaded_at, d.snapshot_date),
            Color::Green,
        ),
        (LoadStatus::Ready, None) => ("Ready".to_string(), Color::Green),
    }
}
