//! Runtime elements and components.

use std::fmt;
use std::sync::Arc;

use crate::errors::RenderError;
use crate::value::{Props, Value};

/// Space-joined component names of the component roots stacked on a tag.
pub const COMPONENT_ATTR: &str = "data-fryclass";
/// Space-joined instance ids matching [`COMPONENT_ATTR`].
pub const COMPONENT_ID_ATTR: &str = "data-fryid";
/// Hydration markers attached to a tag.
pub const CLIENT_EMBED_ATTR: &str = "data-fryembed";
/// Child list key.
pub const CHILDREN_KEY: &str = "children";
/// Record the code generator puts on the root of a component with a client script.
pub const CALL_CLIENT_SCRIPT_KEY: &str = "call-client-script";

type RenderFn = dyn Fn(Props) -> Result<Element, RenderError> + Send + Sync;

/// A component function.
#[derive(Clone)]
pub struct Component {
    name: String,
    render: Arc<RenderFn>,
}

impl Component {
    pub fn new<F>(name: impl Into<String>, render: F) -> Self
    where
        F: Fn(Props) -> Result<Element, RenderError> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            render: Arc::new(render),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run the component function.
    pub fn call(&self, props: Props) -> Result<Element, RenderError> {
        (self.render)(props)
    }
}

impl PartialEq for Component {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && Arc::ptr_eq(&self.render, &other.render)
    }
}

impl fmt::Debug for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Component").field(&self.name).finish()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ElementName {
    Tag(String),
    Component(Component),
}

/// An element: unrendered as built by server code, rendered after
/// [`Element::render`]. A rendered element only has tag names and no
/// element-valued props left unrendered.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub name: ElementName,
    pub props: Props,
    pub(crate) rendered: bool,
}

impl Element {
    /// `Element("tag", {...})`
    pub fn tag(name: impl Into<String>, props: Props) -> Self {
        Self {
            name: ElementName::Tag(name.into()),
            props,
            rendered: false,
        }
    }

    /// `Element(Component, {...})`
    pub fn component(component: Component, props: Props) -> Self {
        Self {
            name: ElementName::Component(component),
            props,
            rendered: false,
        }
    }

    pub(crate) fn rendered_tag(name: impl Into<String>, props: Props) -> Self {
        Self {
            name: ElementName::Tag(name.into()),
            props,
            rendered: true,
        }
    }

    pub fn is_rendered(&self) -> bool {
        self.rendered
    }

    /// Tag name, or `None` for a component element.
    pub fn tag_name(&self) -> Option<&str> {
        match &self.name {
            ElementName::Tag(name) => Some(name),
            ElementName::Component(_) => None,
        }
    }

    /// Whether this is a component: by name before rendering, by the
    /// identity attribute after.
    pub fn is_component(&self) -> bool {
        if self.rendered {
            self.props.contains_key(COMPONENT_ATTR)
        } else {
            matches!(self.name, ElementName::Component(_))
        }
    }

    pub fn children(&self) -> Option<&[Value]> {
        match self.props.get(CHILDREN_KEY) {
            Some(Value::List(children)) => Some(children),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::props;

    #[test]
    fn test_component_identity() {
        let card = Component::new("Card", |_| Ok(Element::tag("div", Props::new())));
        let same = card.clone();
        let other = Component::new("Card", |_| Ok(Element::tag("div", Props::new())));
        assert_eq!(card, same);
        assert_ne!(card, other);
        assert_eq!(format!("{:?}", card), "Component(\"Card\")");
    }

    #[test]
    fn test_is_component() {
        let card = Component::new("Card", |_| Ok(Element::tag("div", Props::new())));
        assert!(Element::component(card, Props::new()).is_component());
        assert!(!Element::tag("div", Props::new()).is_component());
        let root = Element::rendered_tag("div", props([(COMPONENT_ATTR, "Card".into())]));
        assert!(root.is_component());
    }
}
