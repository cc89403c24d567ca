//! Classified attribute records.
//!
//! Every raw attribute form of a start tag maps to exactly one
//! [`AttributeRecord`]. Records already hold generated code for their values,
//! so emitting an element is a plain walk over its records.

use fryx_carton::quoted;

/// Key of the ordered child list.
pub const CHILDREN_KEY: &str = "children";

/// Key of the client script call record on a component's root element.
pub const CALL_CLIENT_SCRIPT_KEY: &str = "call-client-script";

/// Key of a text override on an inline pass-through element.
pub const TEXT_KEY: &str = "*";

/// A client-side override attached to a text run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientRef {
    /// `(js)`: embed number `n` of this component.
    Embed(u32),
    /// `({expr})`: a value forwarded by the parent, as server code.
    Forwarded(String),
}

impl ClientRef {
    fn code(&self) -> String {
        match self {
            Self::Embed(n) => embed_code(*n),
            Self::Forwarded(expr) => expr.clone(),
        }
    }
}

/// One classified attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeRecord {
    /// `k="v"`
    Literal { name: String, value: String },
    /// `k`
    NoValue { name: String },
    /// `k={expr}`
    ServerValue { name: String, expr: String },
    /// `k=(js)`
    ClientValue { name: String, embed: u32 },
    /// `k=({expr})`
    ParentClientValue { name: String, expr: String },
    /// `k={expr}(js)`
    ServerClientValue {
        name: String,
        expr: String,
        embed: u32,
    },
    /// `k={expr}({expr})`
    ServerParentClientValue {
        name: String,
        expr: String,
        forwarded: String,
    },
    /// `k=[v](js)`
    LiteralClientValue {
        name: String,
        value: String,
        embed: u32,
    },
    /// `k=[v]({expr})`
    LiteralParentClientValue {
        name: String,
        value: String,
        forwarded: String,
    },
    /// `k=<tag>…</tag>`
    ElementValue { name: String, code: String },
    /// `{**expr}`, or `{*expr}` when `sequence` is set.
    Spread { expr: String, sequence: bool },
    Children(Vec<String>),
    /// Text run with a client override, on its pass-through element.
    TextClientEmbed(ClientRef),
    /// Client module id and captured `(name, value)` arguments.
    CallClientScript {
        module_id: String,
        args: Vec<(String, String)>,
    },
    /// Folded into the class list.
    NoOp,
}

impl AttributeRecord {
    /// Append this record's `key: value` entries for the attribute map.
    pub fn write_entries(&self, out: &mut Vec<String>) {
        match self {
            Self::Literal { name, value } => out.push(entry(name, &quoted(value))),
            Self::NoValue { name } => out.push(entry(name, "\"\"")),
            Self::ServerValue { name, expr } | Self::ParentClientValue { name, expr } => {
                out.push(entry(name, expr))
            }
            Self::ClientValue { name, embed } => out.push(entry(name, &embed_code(*embed))),
            Self::ServerClientValue { name, expr, embed } => {
                out.push(entry(name, expr));
                out.push(entry(&override_key(name), &embed_code(*embed)));
            }
            Self::ServerParentClientValue {
                name,
                expr,
                forwarded,
            } => {
                out.push(entry(name, expr));
                out.push(entry(&override_key(name), forwarded));
            }
            Self::LiteralClientValue { name, value, embed } => {
                out.push(entry(name, &quoted(value)));
                out.push(entry(&override_key(name), &embed_code(*embed)));
            }
            Self::LiteralParentClientValue {
                name,
                value,
                forwarded,
            } => {
                out.push(entry(name, &quoted(value)));
                out.push(entry(&override_key(name), forwarded));
            }
            Self::ElementValue { name, code } => out.push(entry(name, code)),
            Self::Spread { expr, sequence } => {
                if *sequence {
                    out.push(format!("**Flags({})", expr));
                } else {
                    out.push(format!("**{}", expr));
                }
            }
            Self::Children(children) => {
                out.push(entry(CHILDREN_KEY, &format!("[{}]", children.join(", "))))
            }
            Self::TextClientEmbed(client) => out.push(entry(TEXT_KEY, &client.code())),
            Self::CallClientScript { module_id, args } => {
                let args: Vec<String> = args
                    .iter()
                    .map(|(name, value)| format!("({}, {})", quoted(name), value))
                    .collect();
                out.push(entry(
                    CALL_CLIENT_SCRIPT_KEY,
                    &format!("[{}, [{}]]", quoted(module_id), args.join(", ")),
                ));
            }
            Self::NoOp => {}
        }
    }
}

/// `ClientEmbed(n)`
pub fn embed_code(n: u32) -> String {
    format!("ClientEmbed({})", n)
}

fn override_key(name: &str) -> String {
    format!("${}", name)
}

fn entry(name: &str, value: &str) -> String {
    format!("{}: {}", quoted(name), value)
}

/// Generated code for one element construction.
pub fn element_code(name: &str, records: &[AttributeRecord]) -> String {
    let mut entries = Vec::with_capacity(records.len());
    for record in records {
        record.write_entries(&mut entries);
    }
    format!("Element({}, {{{}}})", name, entries.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(record: AttributeRecord) -> Vec<String> {
        let mut out = Vec::new();
        record.write_entries(&mut out);
        out
    }

    #[test]
    fn test_constant_forms() {
        assert_eq!(
            entries(AttributeRecord::Literal {
                name: "href".into(),
                value: "/a \"b\"".into(),
            }),
            vec![r#""href": "/a \"b\"""#]
        );
        assert_eq!(
            entries(AttributeRecord::NoValue {
                name: "disabled".into()
            }),
            vec![r#""disabled": """#]
        );
        assert!(entries(AttributeRecord::NoOp).is_empty());
    }

    #[test]
    fn test_override_forms() {
        assert_eq!(
            entries(AttributeRecord::ServerClientValue {
                name: "value".into(),
                expr: "(count)".into(),
                embed: 2,
            }),
            vec![r#""value": (count)"#, r#""$value": ClientEmbed(2)"#]
        );
        assert_eq!(
            entries(AttributeRecord::LiteralParentClientValue {
                name: "title".into(),
                value: "Hi".into(),
                forwarded: "(props.title)".into(),
            }),
            vec![r#""title": "Hi""#, r#""$title": (props.title)"#]
        );
    }

    #[test]
    fn test_structural_forms() {
        assert_eq!(
            entries(AttributeRecord::Spread {
                expr: "(attrs)".into(),
                sequence: false,
            }),
            vec!["**(attrs)"]
        );
        assert_eq!(
            entries(AttributeRecord::Spread {
                expr: "(flags)".into(),
                sequence: true,
            }),
            vec!["**Flags((flags))"]
        );
        assert_eq!(
            entries(AttributeRecord::TextClientEmbed(ClientRef::Embed(0))),
            vec![r#""*": ClientEmbed(0)"#]
        );
        assert_eq!(
            entries(AttributeRecord::CallClientScript {
                module_id: "0123456789abcdef".into(),
                args: vec![("mode".into(), "\"dark\"".into())],
            }),
            vec![r#""call-client-script": ["0123456789abcdef", [("mode", "dark")]]"#]
        );
    }

    #[test]
    fn test_element_code() {
        let code = element_code(
            "\"p\"",
            &[
                AttributeRecord::Literal {
                    name: "class".into(),
                    value: "p-4".into(),
                },
                AttributeRecord::Children(vec!["\"hi\"".into()]),
            ],
        );
        assert_eq!(code, r#"Element("p", {"class": "p-4", "children": ["hi"]})"#);
    }
}
