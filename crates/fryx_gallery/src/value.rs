//! Attribute and child values.

use indexmap::IndexMap;

use crate::element::Element;
use crate::embed::ClientEmbed;

/// Insertion-ordered attribute mapping of an element.
pub type Props = IndexMap<String, Value>;

/// Build [`Props`] from literal entries.
///
/// ```
/// use fryx_gallery::{props, Value};
///
/// let p = props([("class", "card".into()), ("hidden", true.into())]);
/// assert_eq!(p.get("hidden"), Some(&Value::Bool(true)));
/// ```
pub fn props<'k>(entries: impl IntoIterator<Item = (&'k str, Value)>) -> Props {
    entries
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Value>),
    Map(Props),
    Element(Box<Element>),
    Embed(ClientEmbed),
    /// Collected hydration markers of one element.
    Embeds(Vec<ClientEmbed>),
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_embed(&self) -> Option<&ClientEmbed> {
        match self {
            Self::Embed(embed) => Some(embed),
            _ => None,
        }
    }

    /// Visit every marker reachable from this value, through nested elements.
    pub(crate) fn for_each_embed(&self, f: &mut impl FnMut(&ClientEmbed)) {
        match self {
            Self::Embed(embed) => f(embed),
            Self::Embeds(embeds) => {
                for embed in embeds {
                    f(embed);
                }
            }
            Self::List(items) => {
                for item in items {
                    item.for_each_embed(&mut *f);
                }
            }
            Self::Map(map) => {
                for item in map.values() {
                    item.for_each_embed(&mut *f);
                }
            }
            Self::Element(el) => {
                for item in el.props.values() {
                    item.for_each_embed(&mut *f);
                }
            }
            Self::Null | Self::Bool(_) | Self::Int(_) | Self::Float(_) | Self::Str(_) => {}
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Self::List(value)
    }
}

impl From<Props> for Value {
    fn from(value: Props) -> Self {
        Self::Map(value)
    }
}

impl From<Element> for Value {
    fn from(value: Element) -> Self {
        Self::Element(Box::new(value))
    }
}

impl From<ClientEmbed> for Value {
    fn from(value: ClientEmbed) -> Self {
        Self::Embed(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}
