//! Expression buffer
//!
//! No validation happens here; whatever the controller appends is kept
//! verbatim until the evaluator looks at it.

/// The expression the user is composing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputState {
    buffer: String,
}

impl InputState {
    /// Creates an empty buffer
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a single token
    pub fn append(&mut self, token: char) {
        self.buffer.push(token);
    }

    /// Empties the buffer
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Replaces the buffer contents
    pub fn replace(&mut self, text: impl Into<String>) {
        self.buffer = text.into();
    }

    /// Returns the current buffer
    #[must_use]
    pub fn read(&self) -> &str {
        &self.buffer
    }

    /// Returns true when nothing has been entered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}
