//! Render errors.
//!
//! A failed render produces no HTML. Callers discard the partially rendered
//! tree; nothing is retried.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// A tag name that can not be serialized.
    #[error("invalid element name '{0}'")]
    InvalidElementName(String),

    /// An owned client embed under a key that is not a hydration attachment point.
    #[error("client embed under `{key}` on <{element}> has no attachment point")]
    MisplacedEmbed { element: String, key: String },

    /// A `call-client-script` record that is not `[module id, [(name, value)...]]`.
    #[error("malformed client script call on component {component}")]
    MalformedScriptCall { component: String },

    /// A component function reported a failure.
    #[error("component {component} failed: {message}")]
    Component { component: String, message: String },
}

impl RenderError {
    /// Failure raised from inside a component function.
    pub fn component(component: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Component {
            component: component.into(),
            message: message.into(),
        }
    }
}
