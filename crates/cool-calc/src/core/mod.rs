//! Expression core: tokenizer, parser, checked arithmetic and rendering.
//!
//! Everything under this module is pure. No I/O, no shared state, so the
//! whole evaluation pipeline can be exercised without a terminal.

pub mod evaluator;
mod operations;
pub mod parser;

pub use evaluator::{evaluate, evaluate_value, format_result};
pub use operations::Operation;

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Everything that can go wrong while evaluating an expression
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Division by zero attempted
    #[error("Division by zero")]
    DivisionByZero,
    /// Result left the finite f64 range
    #[error("Overflow: result exceeds maximum value")]
    Overflow,
    /// Invalid expression syntax
    #[error("Invalid expression: {0}")]
    ParseError(String),
    /// Empty expression provided
    #[error("Empty expression")]
    EmptyExpression,
    /// Result is not a number
    #[error("Invalid result: {0}")]
    InvalidResult(String),
}

impl CalcError {
    /// Create a parse error
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::ParseError(message.into())
    }

    /// True when the input was not a well-formed expression
    #[must_use]
    pub const fn is_parse_error(&self) -> bool {
        matches!(self, Self::ParseError(_) | Self::EmptyExpression)
    }

    /// True when the input parsed but could not be computed
    #[must_use]
    pub const fn is_runtime_error(&self) -> bool {
        !self.is_parse_error()
    }
}
