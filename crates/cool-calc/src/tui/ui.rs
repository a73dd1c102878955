//! Window rendering
//!
//! The window is a fixed-size box centered in the terminal: a read-only
//! display on top, the keypad below.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::KeypadWidget;

/// Window title
pub const WINDOW_TITLE: &str = " Cool Calculator ";

/// Fixed window width in cells
pub const WINDOW_WIDTH: u16 = 30;

/// Fixed window height in cells
pub const WINDOW_HEIGHT: u16 = 16;

/// Screen regions of the calculator window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalculatorLayout {
    /// The whole window including its border
    pub window: Rect,
    /// Display field
    pub display: Rect,
    /// Keypad including its border
    pub keypad: Rect,
}

/// Computes the window layout for a terminal area
#[must_use]
pub fn layout(area: Rect) -> CalculatorLayout {
    let width = WINDOW_WIDTH.min(area.width);
    let height = WINDOW_HEIGHT.min(area.height);
    let window = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    };

    let inner = Block::default().borders(Borders::ALL).inner(window);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(inner);

    CalculatorLayout {
        window,
        display: chunks[0],
        keypad: chunks[1],
    }
}

/// Last `width` characters of `text`
fn visible_tail(text: &str, width: usize) -> &str {
    let skip = text.chars().count().saturating_sub(width);
    text.char_indices().nth(skip).map_or("", |(i, _)| &text[i..])
}

/// Renders the calculator to the frame
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(CalculatorUI::new(app), area);
}

/// Calculator window widget
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    app: &'a CalculatorApp,
}

impl<'a> CalculatorUI<'a> {
    /// Creates a new calculator window widget
    #[must_use]
    pub fn new(app: &'a CalculatorApp) -> Self {
        Self { app }
    }

    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let style = if self.app.controller().is_error() {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        };

        // Inside the border; the newest characters stay visible
        let width = usize::from(area.width.saturating_sub(2));
        let text = visible_tail(self.app.display(), width);

        Paragraph::new(Span::styled(text, style))
            .alignment(Alignment::Right)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            )
            .render(area, buf);
    }
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let regions = layout(area);

        Block::default()
            .title(WINDOW_TITLE)
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .render(regions.window, buf);

        self.render_display(regions.display, buf);
        KeypadWidget::new(self.app.keypad()).render(regions.keypad, buf);
    }
}
