// Screen layout: panel arrangement and sizing.
//
// +--------------------------------------------------+
// | Status Bar (1 row)                                |
// +--------------------------------------------------+
// | Main Panel (tab content)                          |
// |                                                   |
// +--------------------------------------------------+
// | Help Bar (1 row)                                  |
// +--------------------------------------------------+
//
// The Overview tab splits the main panel into a 2x2 grid:
//
// +-------------------------+------------------------+
// | Top Teams               | Top Players            |
// +-------------------------+------------------------+
// | Categories              | Daily Gains            |
// +-------------------------+------------------------+

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Resolved screen areas for each dashboard zone.
#[derive(Debug, Clone)]
pub struct AppLayout {
    /// League name, tabs, load status.
    pub status_bar: Rect,
    /// Tab-switched content area.
    pub main_panel: Rect,
    /// Keyboard shortcut hints.
    pub help_bar: Rect,
}

/// Areas of the Overview tab.
#[derive(Debug, Clone)]
pub struct OverviewLayout {
    pub top_teams: Rect,
    pub top_players: Rect,
    pub categories: Rect,
    pub daily: Rect,
}

pub fn build_layout(area: Rect) -> AppLayout {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // status bar
            Constraint::Min(6),    // main panel
            Constraint::Length(1), // help bar
        ])
        .split(area);

    AppLayout {
        status_bar: vertical[0],
        main_panel: vertical[1],
        help_bar: vertical[2],
    }
}

pub fn build_overview(main_panel: Rect) -> OverviewLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(main_panel);

    let halves = |area: Rect| {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area)
    };
    let top = halves(rows[0]);
    let bottom = halves(rows[1]);

    OverviewLayout {
        top_teams: top[0],
        top_players: top[1],
        categories: bottom[0],
        daily: bottom[1],
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn test_area() -> Rect {
        Rect::new(0, 0, 160, 50)
    }

    #[test]
    fn bars_are_one_row() {
        let layout = build_layout(test_area());
        assert_eq!(layout.status_bar.height, 1);
        assert_eq!(layout.help_bar.height, 1);
        assert_eq!(layout.status_bar.y, 0);
        assert_eq!(layout.help_bar.y, 49);
        assert_eq!(layout.main_panel.height, 48);
    }

    #[test]
    fn overview_quadrants_tile_main_panel() {
        let main = build_layout(test_area()).main_panel;
        let o = build_overview(main);
        assert_eq!(o.top_teams.width + o.top_players.width, main.width);
        assert_eq!(o.top_teams.height + o.categories.height, main.height);
        assert_eq!(o.top_teams.x, o.categories.x);
        assert_eq!(o.top_players.y, o.top_teams.y);
        assert_eq!(o.daily.x, o.top_players.x);
    }

    #[test]
    fn small_terminal_still_lays_out() {
        let layout = build_layout(Rect::new(0, 0, 40, 8));
        assert_eq!(layout.main_panel.height, 6);
        let o = build_overview(layout.main_panel);
        assert!(o.top_teams.width > 0);
    }
}
