//! Terminal event mapping
//!
//! Only the mouse drives the calculator. The keyboard can close the window
//! and nothing else.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// What the event loop should do with an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    /// Left button pressed at a terminal cell
    Click {
        /// Cell column
        column: u16,
        /// Cell row
        row: u16,
    },
    /// Left button released
    Release,
    /// Close the window
    Quit,
    /// Terminal resized; draw again
    Redraw,
    /// Ignored event
    None,
}

/// Maps crossterm events to [`UiAction`]s
#[derive(Debug, Default, Clone, Copy)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a terminal event to an action
    #[must_use]
    pub fn handle_event(&self, event: &Event) -> UiAction {
        match event {
            Event::Mouse(mouse) => Self::handle_mouse(*mouse),
            Event::Key(key) => Self::handle_key(*key),
            Event::Resize(..) => UiAction::Redraw,
            _ => UiAction::None,
        }
    }

    fn handle_mouse(event: MouseEvent) -> UiAction {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => UiAction::Click {
                column: event.column,
                row: event.row,
            },
            MouseEventKind::Up(MouseButton::Left) => UiAction::Release,
            _ => UiAction::None,
        }
    }

    fn handle_key(event: KeyEvent) -> UiAction {
        if event.kind != KeyEventKind::Press {
            return UiAction::None;
        }

        match event.code {
            KeyCode::Esc | KeyCode::Char('q') => UiAction::Quit,
            KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => {
                UiAction::Quit
            }
            _ => UiAction::None,
        }
    }
}
