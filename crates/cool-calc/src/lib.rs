//! Cool Calc: a four-function calculator
//!
//! Button presses flow through a [`Controller`](controller::Controller)
//! that accumulates an expression buffer and hands it to the evaluator on
//! `=`. The evaluator is a small recursive-descent parser restricted to
//! `+ - * /`, parentheses and unary minus.
//!
//! # Example
//!
//! ```rust
//! use cool_calc::prelude::*;
//!
//! let mut controller = Controller::new();
//! controller.press_str("12+3=");
//! assert_eq!(controller.display(), "15");
//!
//! controller.press_str("/0=");
//! assert_eq!(controller.display(), "Error");
//! assert_eq!(controller.buffer(), "");
//!
//! assert_eq!(evaluate("1+2*3").unwrap(), "7");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod cli;
pub mod config;
pub mod controller;
pub mod core;
pub mod driver;
pub mod error;
pub mod keypad;
pub mod state;
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::controller::{Controller, Transition, ERROR_DISPLAY};
    pub use crate::core::parser::{AstNode, Parser, Token, Tokenizer};
    pub use crate::core::{evaluate, evaluate_value, format_result, CalcError, CalcResult, Operation};
    pub use crate::driver::CalculatorDriver;
    pub use crate::error::{AppError, AppResult};
    pub use crate::keypad::{ButtonAction, Keypad, KeypadButton};
    pub use crate::state::InputState;
    pub use crate::tui::CalculatorApp;
}
