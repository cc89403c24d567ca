//! Compile errors.
//!
//! Every error is fatal to the compile unit it was raised in: the whole
//! document compile is abandoned and no partial output is produced. Invalid
//! utilities are not errors here; they are logged and left out of the
//! stylesheet.

use fryx_relief::{GrammarError, Span};
use thiserror::Error;

/// Errors raised while compiling a document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    /// The source could not be parsed.
    #[error(transparent)]
    Grammar(#[from] GrammarError),

    /// Start and end tag names differ.
    #[error("start tag <{start}> is closed by </{end}> at {span}")]
    TagMismatch {
        start: String,
        end: String,
        span: Span,
    },

    /// A key that is neither an HTML attribute nor a utility (strict mode).
    #[error("unknown attribute `{name}` on <{tag}> at {span}")]
    UnknownAttribute {
        tag: String,
        name: String,
        span: Span,
    },

    /// An attribute form an HTML tag does not accept.
    #[error("attribute `{name}` on <{tag}> at {span} uses a form HTML tags do not accept")]
    InvalidHtmlAttribute {
        tag: String,
        name: String,
        span: Span,
    },

    /// `@event` given as anything but a server or client value.
    #[error("event handler `{name}` on <{tag}> at {span} must be a server or client value")]
    InvalidEventHandler {
        tag: String,
        name: String,
        span: Span,
    },

    /// An attribute form a component reference does not accept.
    #[error("invalid attribute `{name}` on component {component} at {span}: {reason}")]
    InvalidComponentAttribute {
        component: String,
        name: String,
        reason: &'static str,
        span: Span,
    },

    /// A script attribute that is not a literal, server or forwarded value.
    #[error("script attribute `{name}` at {span} must be a literal, server or forwarded value")]
    InvalidScriptAttribute { name: String, span: Span },

    /// A script attribute named with the reserved `fry` prefix.
    #[error("script attribute `{name}` at {span} uses the reserved `fry` prefix")]
    ReservedScriptAttribute { name: String, span: Span },

    /// `<script>` used as a root element.
    #[error("<script> can not be a root element ({span})")]
    ScriptRoot { span: Span },

    /// A second script block in one compile unit.
    #[error("a component can have only one <script> block ({span})")]
    MultipleScripts { span: Span },

    /// A `<script>` element outside the script block position.
    #[error("<script> element at {span} is not a component script block")]
    MisplacedScript { span: Span },

    /// Utility attributes on a tag whose class is computed on the server.
    #[error("utility attributes on <{tag}> at {span} can not be folded into a computed class")]
    ComputedClass { tag: String, span: Span },
}

impl CompileError {
    /// Source span of the offending node.
    pub fn span(&self) -> Span {
        match self {
            Self::Grammar(err) => err.span,
            Self::TagMismatch { span, .. }
            | Self::UnknownAttribute { span, .. }
            | Self::InvalidHtmlAttribute { span, .. }
            | Self::InvalidEventHandler { span, .. }
            | Self::InvalidComponentAttribute { span, .. }
            | Self::InvalidScriptAttribute { span, .. }
            | Self::ReservedScriptAttribute { span, .. }
            | Self::ScriptRoot { span }
            | Self::MultipleScripts { span }
            | Self::MisplacedScript { span }
            | Self::ComputedClass { span, .. } => *span,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_span() {
        let err = CompileError::TagMismatch {
            start: "div".into(),
            end: "span".into(),
            span: Span::new(0, 16),
        };
        assert_eq!(err.to_string(), "start tag <div> is closed by </span> at 0..16");
        assert_eq!(err.span(), Span::new(0, 16));
    }

    #[test]
    fn test_grammar_error_is_transparent() {
        let err: CompileError = GrammarError::new("unexpected `<`", Span::new(2, 3)).into();
        assert_eq!(err.to_string(), "grammar error at 2..3: unexpected `<`");
        assert_eq!(err.span(), Span::new(2, 3));
    }
}
