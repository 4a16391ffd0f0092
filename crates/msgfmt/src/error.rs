#![forbid(unsafe_code)]

//! Error type shared by the scanner, the case parser and the engine.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FormatError>;

/// Boxed error raised by a type handler.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum FormatError {
    /// A `{` with no matching `}` before the end of `text`.
    #[error("unbalanced curly braces in string: \"{text}\"")]
    UnbalancedBraces { text: String, open_index: usize },

    /// Failure raised by a caller-supplied handler, passed through untouched.
    #[error(transparent)]
    Handler(HandlerError),
}

impl FormatError {
    #[must_use]
    pub fn unbalanced(text: &str, open_index: usize) -> Self {
        tracing::debug!(
            text_len = text.len(),
            open_index,
            "unbalanced curly braces"
        );
        Self::UnbalancedBraces {
            text: text.to_owned(),
            open_index,
        }
    }

    #[must_use]
    pub fn handler(err: impl Into<HandlerError>) -> Self {
        Self::Handler(err.into())
    }

    #[must_use]
    pub fn is_unbalanced(&self) -> bool {
        matches!(self, Self::UnbalancedBraces { .. })
    }
}
