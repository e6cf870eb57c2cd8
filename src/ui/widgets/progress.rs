//! Inline progress bar for task completion and stock levels

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

const PARTIALS: [char; 8] = [' ', '▏', '▎', '▍', '▌', '▋', '▊', '▉'];
const FULL: char = '█';
const EMPTY: char = '░';

/// A single-line bar filled to `percent` of the area width
pub struct ProgressBar {
    percent: u8,
    style: Style,
    empty_style: Style,
}

impl ProgressBar {
    pub fn new(percent: u8) -> Self {
        Self {
            percent: percent.min(100),
            style: Style::default().fg(Color::Cyan),
            empty_style: Style::default().fg(Color::DarkGray),
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl Widget for ProgressBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        for (i, ch) in bar_chars(self.percent, area.width as usize)
            .into_iter()
            .enumerate()
        {
            let style = if ch == EMPTY { self.empty_style } else { self.style };
            buf.get_mut(area.x + i as u16, area.y)
                .set_char(ch)
                .set_style(style);
        }
    }
}

/// Progress bar as plain text (for table cells and detail lines)
pub fn progress_text(percent: u8, width: usize) -> String {
    bar_chars(percent, width).into_iter().collect()
}

fn bar_chars(percent: u8, width: usize) -> Vec<char> {
    let percent = usize::from(percent.min(100));
    // Eighths of a cell.
    let filled = percent * width * 8 / 100;
    let full = filled / 8;
    let partial = filled % 8;

    let mut out = Vec::with_capacity(width);
    out.extend(std::iter::repeat(FULL).take(full));
    if full < width && partial > 0 {
        out.push(PARTIALS[partial]);
    }
    while out.len() < width {
        out.push(EMPTY);
    }
    out
}

/// Share of `part` in `whole`, in percent. Zero when `whole` is zero.
pub fn percent_of(part: u32, whole: u32) -> u8 {
    if whole == 0 {
        return 0;
    }
    (u64::from(part.min(whole)) * 100 / u64::from(whole)) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_text_widths() {
        assert_eq!(progress_text(0, 4), "░░░░");
        assert_eq!(progress_text(100, 4), "████");
        assert_eq!(progress_text(50, 4), "██░░");
        assert_eq!(progress_text(65, 10).chars().count(), 10);
    }

    #[test]
    fn test_progress_text_partial_cell() {
        // 25% of 10 cells is 2.5 cells.
        assert_eq!(progress_text(25, 10), "██▌░░░░░░░");
    }

    #[test]
    fn test_percent_of() {
        assert_eq!(percent_of(4, 5), 80);
        assert_eq!(percent_of(1, 0), 0);
        assert_eq!(percent_of(9, 3), 100);
    }
}
