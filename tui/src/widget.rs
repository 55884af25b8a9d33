//! Console widget — draws a [`Console`] into a ratatui frame.
//!
//! The widget is a pure projection of the buffer's display lines: history
//! rows colored by their tags, the prompt and live edit last, the terminal
//! cursor placed at the caret. Layout knobs (`item_height`, `margin`) only
//! affect drawing; the console never reads them.

use std::fmt;

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph};
use ratatui::Frame;

use termline_core::buffer::ColorTag;
use termline_core::console::Console;

use crate::theme::Theme;


/// Renders a console into a frame area.
pub struct ConsoleView<'a, T> {
    console: &'a Console<T>,
    theme: &'a Theme,
    title: Option<&'a str>,
    /// Visual lines per history row; rows are padded with blank filler
    /// lines when > 1.
    item_height: u16,
    /// Inset between the border and the text, in cells.
    margin: u16,
}


impl<'a, T: fmt::Display> ConsoleView<'a, T> {
    pub fn new(console: &'a Console<T>, theme: &'a Theme) -> Self {
        ConsoleView {
            console,
            theme,
            title: None,
            item_height: 1,
            margin: 0,
        }
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    pub fn item_height(mut self, item_height: u16) -> Self {
        self.item_height = item_height.max(1);
        self
    }

    pub fn margin(mut self, margin: u16) -> Self {
        self.margin = margin;
        self
    }

    /// Draw the console and position the cursor at the caret.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border.to_tui()))
            .padding(Padding::uniform(self.margin));
        if let Some(title) = self.title {
            block = block.title(title);
        }
        let inner = block.inner(area);

        let buffer = self.console.buffer();
        let display = buffer.display_lines();
        let lines = styled_lines(&display, self.theme, self.item_height);
        let scroll = scroll_offset(display.len(), self.item_height, inner.height);

        let paragraph = Paragraph::new(lines).block(block).scroll((scroll, 0));
        frame.render_widget(paragraph, area);

        let (row, col) = buffer.caret_line_col();
        if let Some((x, y)) = cursor_position(row, col, self.item_height, scroll, inner) {
            frame.set_cursor_position((x, y));
        }
    }
}


// ---------------------------------------------------------------------------
// Line construction (free functions, unit-testable without a terminal)
// ---------------------------------------------------------------------------

/// Build the visual lines: history rows with filler padding, then the
/// prompt line with the prompt span in the prompt color.
fn styled_lines<'a>(
    display: &[Vec<(&'a str, ColorTag)>],
    theme: &Theme,
    item_height: u16,
) -> Vec<Line<'a>> {
    let mut lines = Vec::new();
    let last = display.len().saturating_sub(1);
    for (row, runs) in display.iter().enumerate() {
        let spans: Vec<Span> = runs
            .iter()
            .enumerate()
            .map(|(i, (text, tag))| {
                // The prompt marker is the first run of the last row.
                let color = if row == last && i == 0 {
                    theme.prompt.to_tui()
                } else {
                    theme.color_for(*tag)
                };
                Span::styled(*text, Style::default().fg(color))
            })
            .collect();
        lines.push(Line::from(spans));
        if row < last {
            for _ in 1..item_height {
                lines.push(Line::default());
            }
        }
    }
    lines
}

/// Scroll offset that keeps the prompt line visible at the bottom.
fn scroll_offset(rows: usize, item_height: u16, height: u16) -> u16 {
    if rows == 0 {
        return 0;
    }
    let total = (rows as u32 - 1) * item_height as u32 + 1;
    total.saturating_sub(height as u32).min(u16::MAX as u32) as u16
}

/// Screen position of the caret, or `None` when it is scrolled out of view
/// or past the right edge.
fn cursor_position(
    row: usize,
    col: usize,
    item_height: u16,
    scroll: u16,
    inner: Rect,
) -> Option<(u16, u16)> {
    let visual_row = (row as u32) * item_height as u32;
    let y = visual_row.checked_sub(scroll as u32)?;
    if y >= inner.height as u32 || col >= inner.width as usize {
        return None;
    }
    Some((inner.x + col as u16, inner.y + y as u16))
}


// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
