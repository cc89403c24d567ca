//! HTML serialization of rendered elements.

use std::fmt::{self, Write};

use fryx_carton::{escape_attr, escape_text, format_number};

use crate::element::{Element, ElementName, CHILDREN_KEY};
use crate::value::Value;

/// Attribute text of a value; `None` omits the attribute.
fn attribute_value(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::Bool(true) => Some(String::new()),
        Value::Map(map) => Some(
            map.iter()
                .map(|(key, value)| format!("{}: {};", key, plain(value)))
                .collect::<Vec<_>>()
                .join(" "),
        ),
        Value::List(items) => Some(items.iter().map(plain).collect::<Vec<_>>().join(" ")),
        value => Some(plain(value)),
    }
}

/// Unescaped text of a value.
fn plain(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Int(n) => n.to_string(),
        Value::Float(n) => format_number(*n),
        Value::Str(s) => s.clone(),
        Value::List(items) => items.iter().map(plain).collect::<Vec<_>>().join(" "),
        Value::Map(map) => map
            .iter()
            .map(|(key, value)| format!("{}: {};", key, plain(value)))
            .collect::<Vec<_>>()
            .join(" "),
        Value::Element(el) => el.to_string(),
        Value::Embed(embed) => embed.to_string(),
        Value::Embeds(embeds) => embeds
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" "),
    }
}

fn write_child(f: &mut fmt::Formatter<'_>, child: &Value) -> fmt::Result {
    match child {
        Value::Null => Ok(()),
        Value::Element(el) => write!(f, "{}", el),
        Value::Str(text) => f.write_str(&escape_text(text)),
        other => f.write_str(&escape_text(&plain(other))),
    }
}

/// Serializes a rendered element. An element without a `children` entry
/// self-closes; an unrendered one prints a placeholder.
impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match (&self.name, self.rendered) {
            (ElementName::Tag(name), true) => name,
            _ => return f.write_str("<Element(not rendered)>"),
        };

        let mut attrs = String::new();
        for (key, value) in &self.props {
            if key == CHILDREN_KEY {
                continue;
            }
            match attribute_value(value) {
                None => {}
                Some(value) if value.is_empty() => write!(attrs, " {}", key)?,
                Some(value) => write!(attrs, " {}=\"{}\"", key, escape_attr(&value))?,
            }
        }

        match self.props.get(CHILDREN_KEY) {
            None => write!(f, "<{}{} />", name, attrs),
            Some(children) => {
                write!(f, "<{}{}>", name, attrs)?;
                match children {
                    Value::List(children) => {
                        for child in children {
                            write_child(f, child)?;
                        }
                    }
                    child => write_child(f, child)?,
                }
                write!(f, "</{}>", name)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::RenderOptions;
    use crate::page::Page;
    use crate::value::{props, Props};

    fn html(el: Element) -> String {
        let options = RenderOptions::default();
        el.render(&mut Page::new(&options)).unwrap().to_string()
    }

    #[test]
    fn test_attribute_forms() {
        let el = Element::tag(
            "input",
            props([
                ("type", "checkbox".into()),
                ("checked", true.into()),
                ("disabled", false.into()),
                ("value", Value::Null),
                ("title", "say \"hi\"".into()),
                ("class", Value::List(vec!["a".into(), "b".into()])),
                (
                    "style",
                    Value::Map(props([("color", "red".into()), ("width", 2i64.into())])),
                ),
            ]),
        );
        assert_eq!(
            html(el),
            r#"<input type="checkbox" checked title="say &quot;hi&quot;" class="a b" style="color: red; width: 2;" />"#
        );
    }

    #[test]
    fn test_children_are_escaped() {
        let el = Element::tag(
            "p",
            props([(
                CHILDREN_KEY,
                Value::List(vec![
                    "a < b".into(),
                    Element::tag("br", Props::new()).into(),
                    1.5f64.into(),
                ]),
            )]),
        );
        assert_eq!(html(el), "<p>a &lt; b<br />1.5</p>");
    }

    #[test]
    fn test_unrendered_placeholder() {
        assert_eq!(
            Element::tag("p", Props::new()).to_string(),
            "<Element(not rendered)>"
        );
    }
}
