use ratatui::layout::{Constraint, Direction, Layout, Rect};

#[derive(Debug, Clone, Copy)]
pub struct UiAreas {
    pub size: Rect,
    pub header: Rect,
    pub main: Rect,
    pub sidebar: Rect,
    pub sidebar_nav: Rect,
    pub sidebar_footer: Rect,
    pub body: Rect,
    pub status_line: Rect,
    pub command_line: Rect,
}

pub fn areas(size: Rect, sidebar_width: u16) -> UiAreas {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(size);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(sidebar_width), Constraint::Min(0)])
        .split(vertical[1]);

    let sidebar_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(3)])
        .split(main_chunks[0]);

    let footer_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(vertical[2]);

    UiAreas {
        size,
        header: vertical[0],
        main: vertical[1],
        sidebar: main_chunks[0],
        sidebar_nav: sidebar_chunks[0],
        sidebar_footer: sidebar_chunks[1],
        body: main_chunks[1],
        status_line: footer_chunks[0],
        command_line: footer_chunks[1],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::Sidebar;

    #[test]
    fn test_sidebar_width_follows_state() {
        let size = Rect::new(0, 0, 100, 30);
        let expanded = areas(size, Sidebar::EXPANDED_WIDTH);
        assert_eq!(expanded.sidebar.width, 28);
        assert_eq!(expanded.body.x, 28);
        assert_eq!(expanded.body.width, 72);

        let collapsed = areas(size, Sidebar::COLLAPSED_WIDTH);
        assert_eq!(collapsed.sidebar.width, 8);
        assert_eq!(collapsed.body.width, 92);
    }

    #[test]
    fn test_footer_lines() {
        let a = areas(Rect::new(0, 0, 80, 24), 28);
        assert_eq!(a.status_line.y, 22);
        assert_eq!(a.command_line.y, 23);
        assert_eq!(a.sidebar_footer.height, 3);
    }
}
