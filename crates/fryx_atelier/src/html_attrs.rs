//! HTML and SVG attribute tables.
//!
//! Decides whether an attribute key on a literal tag is passed to the browser
//! verbatim or handed to the utility resolver.

use phf::{phf_map, phf_set};

// =============================================================================
// Global attributes
// =============================================================================

static GLOBAL_ATTRIBUTES: phf::Set<&'static str> = phf_set! {
    "accesskey", "autocapitalize", "autofocus", "class", "contenteditable", "dir",
    "draggable", "enterkeyhint", "exportparts", "hidden", "id", "inert", "inputmode",
    "is", "itemid", "itemprop", "itemref", "itemscope", "itemtype", "lang", "nonce",
    "part", "popover", "role", "slot", "spellcheck", "style", "tabindex", "title",
    "translate", "xmlns",
};

// =============================================================================
// Element-specific attributes
// =============================================================================

static ELEMENT_ATTRIBUTES: phf::Map<&'static str, &'static [&'static str]> = phf_map! {
    "a" => &["download", "href", "hreflang", "ping", "referrerpolicy", "rel", "target", "type"],
    "area" => &["alt", "coords", "download", "href", "ping", "referrerpolicy", "rel", "shape", "target"],
    "audio" => &["autoplay", "controls", "crossorigin", "loop", "muted", "preload", "src"],
    "base" => &["href", "target"],
    "blockquote" => &["cite"],
    "body" => &["background", "bgcolor"],
    "button" => &["disabled", "form", "formaction", "formenctype", "formmethod", "formnovalidate", "formtarget", "name", "popovertarget", "popovertargetaction", "type", "value"],
    "canvas" => &["height", "width"],
    "col" => &["span"],
    "colgroup" => &["span"],
    "data" => &["value"],
    "del" => &["cite", "datetime"],
    "details" => &["name", "open"],
    "dialog" => &["open"],
    "embed" => &["height", "src", "type", "width"],
    "fieldset" => &["disabled", "form", "name"],
    "form" => &["accept-charset", "action", "autocomplete", "enctype", "method", "name", "novalidate", "rel", "target"],
    "html" => &["manifest"],
    "iframe" => &["allow", "allowfullscreen", "height", "loading", "name", "referrerpolicy", "sandbox", "src", "srcdoc", "width"],
    "img" => &["alt", "crossorigin", "decoding", "fetchpriority", "height", "ismap", "loading", "referrerpolicy", "sizes", "src", "srcset", "usemap", "width"],
    "input" => &["accept", "alt", "autocomplete", "capture", "checked", "dirname", "disabled", "form", "formaction", "formenctype", "formmethod", "formnovalidate", "formtarget", "height", "list", "max", "maxlength", "min", "minlength", "multiple", "name", "pattern", "placeholder", "popovertarget", "readonly", "required", "size", "src", "step", "type", "value", "width"],
    "ins" => &["cite", "datetime"],
    "label" => &["for", "form"],
    "li" => &["value"],
    "link" => &["as", "crossorigin", "fetchpriority", "href", "hreflang", "integrity", "media", "referrerpolicy", "rel", "sizes", "type"],
    "map" => &["name"],
    "meta" => &["charset", "content", "http-equiv", "name", "property"],
    "meter" => &["form", "high", "low", "max", "min", "optimum", "value"],
    "object" => &["data", "form", "height", "name", "type", "usemap", "width"],
    "ol" => &["reversed", "start", "type"],
    "optgroup" => &["disabled", "label"],
    "option" => &["disabled", "label", "selected", "value"],
    "output" => &["for", "form", "name"],
    "progress" => &["form", "max", "value"],
    "q" => &["cite"],
    "script" => &["async", "crossorigin", "defer", "integrity", "nomodule", "referrerpolicy", "src", "type"],
    "select" => &["autocomplete", "disabled", "form", "multiple", "name", "required", "size"],
    "slot" => &["name"],
    "source" => &["height", "media", "sizes", "src", "srcset", "type", "width"],
    "style" => &["media", "type"],
    "table" => &["border", "cellpadding", "cellspacing", "summary"],
    "td" => &["colspan", "headers", "rowspan"],
    "template" => &["shadowrootmode"],
    "textarea" => &["autocomplete", "cols", "dirname", "disabled", "form", "maxlength", "minlength", "name", "placeholder", "readonly", "required", "rows", "wrap"],
    "th" => &["abbr", "colspan", "headers", "rowspan", "scope"],
    "time" => &["datetime"],
    "track" => &["default", "kind", "label", "src", "srclang"],
    "video" => &["autoplay", "controls", "crossorigin", "height", "loop", "muted", "playsinline", "poster", "preload", "src", "width"],
};

// =============================================================================
// SVG
// =============================================================================

static SVG_TAGS: phf::Set<&'static str> = phf_set! {
    "svg", "g", "defs", "symbol", "use", "path", "circle", "ellipse", "line", "polygon",
    "polyline", "rect", "text", "tspan", "textPath", "clipPath", "mask", "pattern",
    "marker", "linearGradient", "radialGradient", "stop", "filter", "image",
    "foreignObject", "title", "desc",
};

static SVG_ATTRIBUTES: phf::Set<&'static str> = phf_set! {
    "viewBox", "preserveAspectRatio", "version", "xmlns:xlink", "href", "xlink:href",
    "x", "y", "x1", "y1", "x2", "y2", "cx", "cy", "r", "rx", "ry", "fx", "fy", "d",
    "points", "width", "height", "transform", "fill", "fill-opacity", "fill-rule",
    "clip-rule", "clip-path", "mask", "stroke", "stroke-width", "stroke-linecap",
    "stroke-linejoin", "stroke-dasharray", "stroke-dashoffset", "stroke-miterlimit",
    "stroke-opacity", "opacity", "offset", "stop-color", "stop-opacity",
    "gradientUnits", "gradientTransform", "patternUnits", "markerWidth",
    "markerHeight", "refX", "refY", "orient", "text-anchor", "dominant-baseline",
    "font-size", "font-family", "dx", "dy", "pathLength", "vector-effect",
};

/// Whether `key` is a native attribute of the literal tag `tag`.
///
/// `data-*` and `aria-*` keys, and lowercase `on*` event handler content
/// attributes, are accepted on every tag.
pub fn is_html_attribute(tag: &str, key: &str) -> bool {
    if GLOBAL_ATTRIBUTES.contains(key) {
        return true;
    }
    if key.starts_with("data-") || key.starts_with("aria-") {
        return true;
    }
    if let Some(event) = key.strip_prefix("on") {
        if !event.is_empty() && event.bytes().all(|b| b.is_ascii_lowercase()) {
            return true;
        }
    }
    if ELEMENT_ATTRIBUTES
        .get(tag)
        .is_some_and(|attrs| attrs.contains(&key))
    {
        return true;
    }
    SVG_TAGS.contains(tag) && SVG_ATTRIBUTES.contains(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_and_prefixed() {
        assert!(is_html_attribute("div", "class"));
        assert!(is_html_attribute("div", "id"));
        assert!(is_html_attribute("section", "data-user"));
        assert!(is_html_attribute("span", "aria-label"));
        assert!(is_html_attribute("div", "onclick"));
        assert!(!is_html_attribute("div", "on"));
    }

    #[test]
    fn test_element_specific() {
        assert!(is_html_attribute("a", "href"));
        assert!(!is_html_attribute("div", "href"));
        assert!(is_html_attribute("input", "placeholder"));
        assert!(is_html_attribute("table", "border"));
        assert!(!is_html_attribute("div", "border"));
    }

    #[test]
    fn test_utilities_are_not_attributes() {
        for key in ["p", "m", "text", "bg", "flex", "hover:text", "w"] {
            assert!(!is_html_attribute("div", key), "{key}");
        }
    }

    #[test]
    fn test_svg() {
        assert!(is_html_attribute("path", "d"));
        assert!(is_html_attribute("svg", "viewBox"));
        assert!(is_html_attribute("path", "fill"));
        assert!(!is_html_attribute("div", "fill"));
    }
}
