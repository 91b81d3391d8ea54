// Help bar widget: key hints for the active tab.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::ViewState;

pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let paragraph = Paragraph::new(Line::from(vec![Span::styled(
        hint_text(state),
        Style::default().fg(Color::White).add_modifier(Modifier::DIM),
    )]))
    .style(Style::default().bg(Color::DarkGray));
    frame.render_widget(paragraph, area);
}

pub fn hint_text(state: &ViewState) -> &'static str {
    if state.active_tab.table().is_some() {
        " q:Quit | 1-3:Tabs | h/l:Column | Enter:Sort | j/k:Scroll | r:Refresh"
    } else {
        " q:Quit | 1-3:Tabs | r:Refresh"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Tab;

    #[test]
    fn sort_hints_only_on_tables() {
        let mut state = ViewState::default();
        assert!(!hint_text(&state).contains("Sort"));
        state.active_tab = Tab::Players;
        assert!(hint_text(&state).contains("Enter:Sort"));
    }
}
