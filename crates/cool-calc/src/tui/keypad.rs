//! Keypad widget and mouse hit testing
//!
//! Rendering and hit testing share [`button_rect`], so a click always lands
//! on the button that was drawn under it.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

use crate::keypad::{ButtonAction, Keypad};

/// Area inside the keypad border
fn inner_area(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

/// Cell size of one button, or `None` when the area is too small
fn button_size(keypad: &Keypad, area: Rect) -> Option<(u16, u16)> {
    let (rows, cols) = keypad.dimensions();
    let inner = inner_area(area);
    let width = inner.width / cols as u16;
    let height = inner.height / rows as u16;
    (width > 0 && height > 0).then_some((width, height))
}

/// Screen rectangle of the button at `index`
#[must_use]
pub fn button_rect(keypad: &Keypad, area: Rect, index: usize) -> Option<Rect> {
    let (_, cols) = keypad.dimensions();
    keypad.get_button(index)?;
    let (width, height) = button_size(keypad, area)?;
    let inner = inner_area(area);
    Some(Rect {
        x: inner.x + (index % cols) as u16 * width,
        y: inner.y + (index / cols) as u16 * height,
        width,
        height,
    })
}

/// Converts a click position to a button index
#[must_use]
pub fn hit_test(keypad: &Keypad, area: Rect, x: u16, y: u16) -> Option<usize> {
    let inner = inner_area(area);
    if x < inner.x || y < inner.y || x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    let (width, height) = button_size(keypad, area)?;
    let (rows, cols) = keypad.dimensions();
    let col = ((x - inner.x) / width) as usize;
    let row = ((y - inner.y) / height) as usize;

    (row < rows && col < cols).then_some(row * cols + col)
}

/// Keypad widget for rendering
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a new keypad widget
    #[must_use]
    pub fn new(keypad: &'a Keypad) -> Self {
        Self { keypad }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .render(area, buf);

        for (index, btn) in self.keypad.buttons().enumerate() {
            let Some(rect) = button_rect(self.keypad, area, index) else {
                return; // Too small to render
            };

            let style = if btn.pressed {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                match btn.action {
                    ButtonAction::Token(c) if c.is_ascii_digit() => {
                        Style::default().fg(Color::White)
                    }
                    ButtonAction::Token(_) => Style::default().fg(Color::Yellow),
                    ButtonAction::Equals => Style::default().fg(Color::Green),
                    ButtonAction::Clear => Style::default().fg(Color::Red),
                }
            };

            let label = format!("[{}]", btn.label);
            if rect.width >= label.len() as u16 {
                let label_x = rect.x + (rect.width - label.len() as u16) / 2;
                let label_y = rect.y + rect.height / 2;
                buf.set_span(label_x, label_y, &Span::styled(label, style), rect.width);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn center(rect: Rect) -> (u16, u16) {
        (rect.x + rect.width / 2, rect.y + rect.height / 2)
    }

    #[test]
    fn test_button_rect_grid() {
        let keypad = Keypad::new();
        let area = Rect::new(0, 0, 26, 10);
        let first = button_rect(&keypad, area, 0).unwrap();
        assert_eq!(first, Rect::new(1, 1, 6, 2));
        let last = button_rect(&keypad, area, 15).unwrap();
        assert_eq!(last, Rect::new(19, 7, 6, 2));
        assert!(button_rect(&keypad, area, 16).is_none());
    }

    #[test]
    fn test_button_rect_too_small() {
        let keypad = Keypad::new();
        assert!(button_rect(&keypad, Rect::new(0, 0, 4, 4), 0).is_none());
    }

    #[test]
    fn test_hit_test_every_button_center() {
        let keypad = Keypad::new();
        let area = Rect::new(3, 5, 26, 10);
        for index in 0..keypad.button_count() {
            let (x, y) = center(button_rect(&keypad, area, index).unwrap());
            assert_eq!(hit_test(&keypad, area, x, y), Some(index));
        }
    }

    #[test]
    fn test_hit_test_outside() {
        let keypad = Keypad::new();
        let area = Rect::new(10, 10, 26, 10);
        assert!(hit_test(&keypad, area, 0, 0).is_none());
        assert!(hit_test(&keypad, area, 100, 100).is_none());
    }

    #[test]
    fn test_hit_test_border() {
        let keypad = Keypad::new();
        let area = Rect::new(0, 0, 26, 10);
        assert!(hit_test(&keypad, area, 0, 0).is_none());
        assert!(hit_test(&keypad, area, 25, 5).is_none());
        assert!(hit_test(&keypad, area, 5, 9).is_none());
    }

    #[test]
    fn test_hit_test_leftover_strip() {
        let keypad = Keypad::new();
        // 27 wide leaves one unused column right of the last button
        let area = Rect::new(0, 0, 27, 10);
        assert!(hit_test(&keypad, area, 25, 2).is_none());
    }

    #[test]
    fn test_widget_render() {
        let keypad = Keypad::new();
        let area = Rect::new(0, 0, 26, 10);
        let mut buf = Buffer::empty(area);

        KeypadWidget::new(&keypad).render(area, &mut buf);

        let content: String = buf.content().iter().map(|c| c.symbol()).collect();
        for label in keypad.labels() {
            assert!(content.contains(&format!("[{label}]")), "missing [{label}]");
        }
    }

    #[test]
    fn test_widget_render_pressed() {
        let mut keypad = Keypad::new();
        keypad.highlight_label('7');
        let area = Rect::new(0, 0, 26, 10);
        let mut buf = Buffer::empty(area);

        KeypadWidget::new(&keypad).render(area, &mut buf);

        let rect = button_rect(&keypad, area, 0).unwrap();
        let cell = &buf[(rect.x + 2, rect.y + 1)];
        assert_eq!(cell.symbol(), "7");
        assert_eq!(cell.bg, Color::Yellow);
    }

    #[test]
    fn test_widget_render_small() {
        let keypad = Keypad::new();
        let area = Rect::new(0, 0, 5, 5);
        let mut buf = Buffer::empty(area);
        KeypadWidget::new(&keypad).render(area, &mut buf);
    }
}
