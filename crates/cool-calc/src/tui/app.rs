//! Window application state
//!
//! Wraps the [`Controller`] with the keypad highlight and the quit flag.

use ratatui::layout::Rect;
use tracing::debug;

use super::keypad::hit_test;
use super::ui::layout;
use crate::controller::{Controller, Transition};
use crate::driver::CalculatorDriver;
use crate::keypad::Keypad;

/// Calculator window state
#[derive(Debug, Default)]
pub struct CalculatorApp {
    controller: Controller,
    keypad: Keypad,
    should_quit: bool,
}

impl CalculatorApp {
    /// Creates a blank calculator window
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Presses the button carrying `label`
    pub fn press(&mut self, label: char) -> Transition {
        self.keypad.highlight_label(label);
        self.controller.press(label)
    }

    /// Presses every non-whitespace label in order
    pub fn press_labels(&mut self, labels: &str) {
        for label in labels.chars().filter(|c| !c.is_whitespace()) {
            self.press(label);
        }
    }

    /// Handles a mouse click at a terminal cell
    ///
    /// `area` is the full terminal area the window was last drawn into.
    /// Returns `None` when the click misses every button.
    pub fn click(&mut self, column: u16, row: u16, area: Rect) -> Option<Transition> {
        let keypad_area = layout(area).keypad;
        let index = hit_test(&self.keypad, keypad_area, column, row)?;
        let label = self.keypad.get_button(index)?.label;
        debug!(column, row, ?label, "button clicked");
        Some(self.press(label))
    }

    /// Clears the pressed highlight
    pub fn release(&mut self) {
        self.keypad.release_all();
    }

    /// Returns the display string
    #[must_use]
    pub fn display(&self) -> &str {
        self.controller.display()
    }

    /// Returns the expression buffer
    #[must_use]
    pub fn buffer(&self) -> &str {
        self.controller.buffer()
    }

    /// Returns the keypad
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Returns the controller
    #[must_use]
    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    /// Requests that the window close
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Returns true once the window should close
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}

impl CalculatorDriver for CalculatorApp {
    fn press(&mut self, label: char) -> Transition {
        Self::press(self, label)
    }

    fn display(&self) -> String {
        Self::display(self).to_string()
    }

    fn buffer(&self) -> String {
        Self::buffer(self).to_string()
    }
}
