//! The fixed 4x4 button set
//!
//! ```text
//! [ 7 ] [ 8 ] [ 9 ] [ / ]
//! [ 4 ] [ 5 ] [ 6 ] [ * ]
//! [ 1 ] [ 2 ] [ 3 ] [ - ]
//! [ 0 ] [ C ] [ = ] [ + ]
//! ```
//!
//! `C` and `=` are commands; every other label is a token appended to the
//! expression buffer as-is.

use crate::core::Operation;

/// Label of the clear command
pub const CLEAR_LABEL: char = 'C';

/// Label of the evaluate command
pub const EQUALS_LABEL: char = '=';

/// Button labels in row-major order
pub const LAYOUT: [[char; 4]; 4] = [
    ['7', '8', '9', '/'],
    ['4', '5', '6', '*'],
    ['1', '2', '3', '-'],
    ['0', 'C', '=', '+'],
];

/// What pressing a button does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    /// Append the character to the buffer
    Token(char),
    /// Clear buffer and display
    Clear,
    /// Evaluate the buffer
    Equals,
}

impl ButtonAction {
    /// Classifies a button label; `None` for labels not on the keypad
    #[must_use]
    pub fn from_label(label: char) -> Option<Self> {
        match label {
            CLEAR_LABEL => Some(Self::Clear),
            EQUALS_LABEL => Some(Self::Equals),
            c if c.is_ascii_digit() || Operation::from_char(c).is_some() => Some(Self::Token(c)),
            _ => None,
        }
    }
}

/// A single keypad button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// The symbol on the button
    pub label: char,
    /// Whether the button is currently highlighted
    pub pressed: bool,
    /// The action this button performs
    pub action: ButtonAction,
}

impl KeypadButton {
    /// Creates a button for a keypad label
    #[must_use]
    pub fn new(label: char, action: ButtonAction) -> Self {
        Self {
            label,
            pressed: false,
            action,
        }
    }

    /// Sets the pressed state
    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }
}

/// The keypad: 16 buttons in a 4x4 grid
#[derive(Debug, Clone)]
pub struct Keypad {
    /// Buttons in row-major order
    buttons: Vec<KeypadButton>,
    cols: usize,
    rows: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard keypad
    #[must_use]
    pub fn new() -> Self {
        let buttons = LAYOUT
            .iter()
            .flatten()
            .filter_map(|&label| {
                ButtonAction::from_label(label).map(|action| KeypadButton::new(label, action))
            })
            .collect();

        Self {
            buttons,
            cols: LAYOUT[0].len(),
            rows: LAYOUT.len(),
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets a button by index
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButton> {
        self.buttons.get(index)
    }

    /// Gets a button by row and column
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        if row < self.rows && col < self.cols {
            self.buttons.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Finds a button index by its label
    #[must_use]
    pub fn find_button_by_label(&self, label: char) -> Option<usize> {
        self.buttons.iter().position(|b| b.label == label)
    }

    /// Highlights the button at `index`
    pub fn press_button(&mut self, index: usize) {
        if let Some(btn) = self.buttons.get_mut(index) {
            btn.set_pressed(true);
        }
    }

    /// Releases all buttons
    pub fn release_all(&mut self) {
        for btn in &mut self.buttons {
            btn.set_pressed(false);
        }
    }

    /// Highlights only the button carrying `label`
    pub fn highlight_label(&mut self, label: char) {
        self.release_all();
        if let Some(idx) = self.find_button_by_label(label) {
            self.press_button(idx);
        }
    }

    /// Returns an iterator over all buttons
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter()
    }

    /// Returns all labels in row-major order
    #[must_use]
    pub fn labels(&self) -> Vec<char> {
        self.buttons.iter().map(|b| b.label).collect()
    }

    /// Returns buttons with their (row, col) positions
    pub fn buttons_with_positions(&self) -> impl Iterator<Item = ((usize, usize), &KeypadButton)> {
        self.buttons
            .iter()
            .enumerate()
            .map(move |(i, btn)| ((i / self.cols, i % self.cols), btn))
    }
}
