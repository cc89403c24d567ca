//! Grammar errors reported by the parser.

use crate::ast::Span;
use thiserror::Error;

/// Malformed source. Fatal to the file being parsed, never to its neighbours.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("grammar error at {span}: {message}")]
pub struct GrammarError {
    pub message: String,
    pub span: Span,
}

impl GrammarError {
    pub fn new(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            span,
        }
    }
}
