//! Button-press state machine
//!
//! | Label           | Effect                                                        |
//! |-----------------|---------------------------------------------------------------|
//! | `0`-`9`, `+-*/` | append; display shows the buffer                              |
//! | `C`             | clear; display empty                                          |
//! | `=`             | evaluate; on success buffer and display hold the result, on   |
//! |                 | failure buffer is cleared and display reads `Error`           |
//!
//! Errors never escape [`Controller::press`]; they become the `Error`
//! display and a [`Transition::Failed`] report.

use tracing::{debug, warn};

use crate::core::{self, CalcError};
use crate::keypad::ButtonAction;
use crate::state::InputState;

/// Display text after a failed evaluation
pub const ERROR_DISPLAY: &str = "Error";

/// What a single button press did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// A token was appended to the buffer
    Appended(char),
    /// Buffer and display were cleared
    Cleared,
    /// The buffer evaluated to the rendered result
    Evaluated(String),
    /// Evaluation failed; buffer cleared, display reads `Error`
    Failed(CalcError),
    /// The label is not on the keypad
    Ignored(char),
}

impl Transition {
    /// Returns true for evaluation failures
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// Bridges button labels to buffer and display updates
#[derive(Debug, Clone, Default)]
pub struct Controller {
    state: InputState,
    display: String,
}

impl Controller {
    /// Creates a controller with an empty buffer and display
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Handles one button press
    pub fn press(&mut self, label: char) -> Transition {
        let Some(action) = ButtonAction::from_label(label) else {
            warn!(?label, "ignoring unknown button label");
            return Transition::Ignored(label);
        };

        let transition = match action {
            ButtonAction::Token(token) => {
                self.state.append(token);
                self.display = self.state.read().to_string();
                Transition::Appended(token)
            }
            ButtonAction::Clear => {
                self.state.clear();
                self.display.clear();
                Transition::Cleared
            }
            ButtonAction::Equals => self.evaluate(),
        };

        debug!(?label, ?transition, buffer = self.state.read(), "button pressed");
        transition
    }

    /// Presses every non-whitespace character of `labels` in order
    pub fn press_str(&mut self, labels: &str) -> Vec<Transition> {
        labels
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| self.press(c))
            .collect()
    }

    fn evaluate(&mut self) -> Transition {
        match core::evaluate(self.state.read()) {
            Ok(result) => {
                self.state.replace(result.clone());
                self.display.clone_from(&result);
                Transition::Evaluated(result)
            }
            Err(e) => {
                self.state.clear();
                self.display = ERROR_DISPLAY.to_string();
                Transition::Failed(e)
            }
        }
    }

    /// Returns the display string
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Returns the expression buffer
    #[must_use]
    pub fn buffer(&self) -> &str {
        self.state.read()
    }

    /// Returns true when the display shows the error marker
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.display == ERROR_DISPLAY
    }
}
