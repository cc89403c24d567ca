//! Rendering.
//!
//! Rendering a component element runs the component function, numbers the
//! instance, claims the markers its result tree created, renders the result,
//! then moves every marker the instance owns into the `data-fryembed` list
//! of the tag it is attached to. The root tag of the result gets the
//! component's name and id stacked onto `data-fryclass` / `data-fryid`, and
//! the bootstrap `<script>` tag when the component has a client script.
//!
//! Rendering a tag renders its element-valued props and children, with
//! nested child lists flattened. Rendering a rendered element returns it
//! unchanged.

use fryx_carton::is_module_id;

use crate::element::{
    Component, Element, ElementName, CALL_CLIENT_SCRIPT_KEY, CHILDREN_KEY, CLIENT_EMBED_ATTR,
    COMPONENT_ATTR, COMPONENT_ID_ATTR,
};
use crate::errors::RenderError;
use crate::options::RenderOptions;
use crate::page::Page;
use crate::value::{Props, Value};

impl Element {
    /// Render into a tree of tags.
    pub fn render(self, page: &mut Page<'_>) -> Result<Element, RenderError> {
        if self.rendered {
            return Ok(self);
        }
        match self.name {
            ElementName::Component(component) => render_component(component, self.props, page),
            ElementName::Tag(name) => render_tag(name, self.props, page),
        }
    }

    /// Claim every unowned marker in the props for `instance`.
    fn claim_embeds(&self, instance: u32) {
        for value in self.props.values() {
            value.for_each_embed(&mut |embed| {
                embed.claim(instance);
            });
        }
    }
}

fn render_component(
    component: Component,
    props: Props,
    page: &mut Page<'_>,
) -> Result<Element, RenderError> {
    let mut result = component.call(props)?;
    let instance = page.add_component();
    result.claim_embeds(instance);
    let call = result.props.shift_remove(CALL_CLIENT_SCRIPT_KEY);

    let mut element = result.render(page)?;
    collect_embeds(&mut element, instance)?;

    let options = page.options();
    stack(
        &mut element.props,
        COMPONENT_ATTR,
        options.qualified_name(component.name()),
    );
    stack(&mut element.props, COMPONENT_ID_ATTR, instance.to_string());

    if let Some(call) = call {
        let script = bootstrap_script(&component, call, instance, options)?;
        match element.props.get_mut(CHILDREN_KEY) {
            Some(Value::List(children)) => children.insert(0, script.into()),
            _ => {
                element
                    .props
                    .insert(CHILDREN_KEY.to_string(), Value::List(vec![script.into()]));
            }
        }
    }

    tracing::trace!(component = component.name(), instance, "rendered component");
    Ok(element)
}

fn render_tag(name: String, props: Props, page: &mut Page<'_>) -> Result<Element, RenderError> {
    if !is_valid_tag(&name) {
        return Err(RenderError::InvalidElementName(name));
    }

    let mut rendered = Props::with_capacity(props.len());
    for (key, value) in props {
        let value = match value {
            Value::List(children) if key == CHILDREN_KEY => {
                Value::List(render_children(children, page)?)
            }
            Value::Element(el) => Value::Element(Box::new(el.render(page)?)),
            value => value,
        };
        rendered.insert(key, value);
    }
    Ok(Element::rendered_tag(name, rendered))
}

/// Render a child list, flattening nested lists in place.
fn render_children(children: Vec<Value>, page: &mut Page<'_>) -> Result<Vec<Value>, RenderError> {
    let mut out = Vec::with_capacity(children.len());
    for child in children {
        match child {
            Value::List(nested) => out.extend(render_children(nested, page)?),
            Value::Element(el) => out.push(Value::Element(Box::new(el.render(page)?))),
            other => out.push(other),
        }
    }
    Ok(out)
}

fn is_valid_tag(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':' | '.'))
        }
        _ => false,
    }
}

/// Move markers owned by `instance` into the `data-fryembed` list of the
/// tag they sit on, children first.
fn collect_embeds(el: &mut Element, instance: u32) -> Result<(), RenderError> {
    if let Some(Value::List(children)) = el.props.get_mut(CHILDREN_KEY) {
        for child in children.iter_mut() {
            if let Value::Element(child) = child {
                collect_embeds(child, instance)?;
            }
        }
    }

    let owned: Vec<String> = el
        .props
        .iter()
        .filter(|(key, _)| *key != CLIENT_EMBED_ATTR && *key != CHILDREN_KEY)
        .filter(|(_, value)| {
            matches!(value, Value::Embed(embed) if embed.owner() == Some(instance))
        })
        .map(|(key, _)| key.clone())
        .collect();
    if owned.is_empty() {
        return Ok(());
    }

    let tag = el.tag_name().unwrap_or_default().to_string();
    let mut attached = Vec::with_capacity(owned.len());
    for key in owned {
        let attachment = attachment(&tag, &key).ok_or_else(|| RenderError::MisplacedEmbed {
            element: tag.clone(),
            key: key.clone(),
        })?;
        if let Some(Value::Embed(embed)) = el.props.shift_remove(&key) {
            attached.push(embed.attached(attachment));
        }
    }

    match el.props.get_mut(CLIENT_EMBED_ATTR) {
        Some(Value::Embeds(embeds)) => embeds.extend(attached),
        _ => {
            el.props
                .insert(CLIENT_EMBED_ATTR.to_string(), Value::Embeds(attached));
        }
    }
    Ok(())
}

/// Where a marker under `key` attaches on the client.
fn attachment(tag: &str, key: &str) -> Option<String> {
    if tag == "script" {
        return Some(format!("object-{}", key));
    }
    if let Some(event) = key.strip_prefix('@') {
        Some(format!("event-{}", event))
    } else if let Some(attr) = key.strip_prefix('$') {
        Some(format!("attr-{}", attr))
    } else if key == "*" {
        Some("text".to_string())
    } else {
        None
    }
}

/// Prepend `value` to a space-joined identity stack.
fn stack(props: &mut Props, key: &str, value: String) {
    let stacked = match props.get(key).and_then(Value::as_str) {
        Some(inner) if !inner.is_empty() => format!("{} {}", value, inner),
        _ => value,
    };
    props.insert(key.to_string(), Value::Str(stacked));
}

/// The `<script>` tag loading a component's client script.
fn bootstrap_script(
    component: &Component,
    call: Value,
    instance: u32,
    options: &RenderOptions,
) -> Result<Element, RenderError> {
    let (module_id, args) = script_call(component, call)?;

    let mut props = Props::with_capacity(args.len() + 3);
    props.insert(
        "src".to_string(),
        Value::Str(format!("{}{}.js", options.static_url(&options.js_url), module_id)),
    );
    props.insert(COMPONENT_ID_ATTR.to_string(), instance.into());
    props.insert(CHILDREN_KEY.to_string(), Value::List(Vec::new()));
    for (name, value) in args {
        match value {
            // a forwarded client value stays a marker for the enclosing owner
            Value::Embed(embed) => {
                props.insert(name, Value::Embed(embed));
            }
            value => {
                props.insert(format!("data-{}", name), value);
            }
        }
    }
    Ok(Element::rendered_tag("script", props))
}

/// Split `[module id, [(name, value)...]]`.
fn script_call(
    component: &Component,
    call: Value,
) -> Result<(String, Vec<(String, Value)>), RenderError> {
    let malformed = || RenderError::MalformedScriptCall {
        component: component.name().to_string(),
    };
    let Value::List(parts) = call else {
        return Err(malformed());
    };
    let [Value::Str(module_id), Value::List(args)] =
        <[Value; 2]>::try_from(parts).map_err(|_| malformed())?
    else {
        return Err(malformed());
    };
    if !is_module_id(&module_id) {
        return Err(malformed());
    }

    let args = args
        .into_iter()
        .map(|arg| match arg {
            Value::List(pair) => match <[Value; 2]>::try_from(pair) {
                Ok([Value::Str(name), value]) => Ok((name, value)),
                _ => Err(malformed()),
            },
            _ => Err(malformed()),
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok((module_id, args))
}
