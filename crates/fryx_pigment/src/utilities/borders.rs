//! Borders: radius, width and color, divide, outline, ring.

use phf::phf_map;

use super::{is_digits, Utility};
use crate::tables::RADII;
use crate::values::{convert_color, convert_size, merge_value};

const DEFAULT_RADIUS: &str = "0.25rem";

fn corners(position: &str) -> Option<&'static [&'static str]> {
    let corners: &'static [&'static str] = match position {
        "s" => &["start-start", "end-start"],
        "e" => &["start-end", "end-end"],
        "t" => &["top-left", "top-right"],
        "r" => &["top-right", "bottom-right"],
        "b" => &["bottom-right", "bottom-left"],
        "l" => &["top-left", "bottom-left"],
        "ss" => &["start-start"],
        "se" => &["start-end"],
        "ee" => &["end-end"],
        "es" => &["end-start"],
        "tl" => &["top-left"],
        "tr" => &["top-right"],
        "bl" => &["bottom-left"],
        "br" => &["bottom-right"],
        _ => return None,
    };
    Some(corners)
}

fn edges(position: &str) -> Option<&'static [&'static str]> {
    let edges: &'static [&'static str] = match position {
        "x" => &["left", "right"],
        "y" => &["top", "bottom"],
        "s" => &["inline-start"],
        "e" => &["inline-end"],
        "t" => &["top"],
        "r" => &["right"],
        "b" => &["bottom"],
        "l" => &["left"],
        _ => return None,
    };
    Some(edges)
}

/// `N` means `Npx` for widths and offsets; anything else is an arbitrary value.
fn pixels(args: &[String]) -> String {
    match args {
        [n] if is_digits(n) => format!("{}px", n),
        _ => merge_value(args, false),
    }
}

pub(super) fn rounded(u: &mut Utility<'_>) -> bool {
    match u.argc() {
        1 => {
            u.style(format!("border-radius: {};", DEFAULT_RADIUS));
            true
        }
        2 => {
            if let Some(radius) = RADII.get(u.arg(1)).copied() {
                u.style(format!("border-radius: {};", radius));
            } else if let Some(corners) = corners(u.arg(1)) {
                for corner in corners {
                    u.style(format!("border-{}-radius: {};", corner, DEFAULT_RADIUS));
                }
            } else {
                let value = merge_value(u.tail(1), false);
                u.style(format!("border-radius: {};", value));
            }
            true
        }
        _ => {
            let Some(corners) = corners(u.arg(1)) else {
                return false;
            };
            let radius = match (u.argc(), RADII.get(u.arg(2))) {
                (3, Some(radius)) => (*radius).to_string(),
                _ => merge_value(u.tail(2), false),
            };
            for corner in corners {
                u.style(format!("border-{}-radius: {};", corner, radius));
            }
            true
        }
    }
}

pub(super) fn border(u: &mut Utility<'_>) -> bool {
    static BORDERS: phf::Map<&'static str, &'static str> = phf_map! {
        "border-collapse" => "border-collapse: collapse;",
        "border-separate" => "border-collapse: separate;",
        "border-solid" => "border-style: solid;",
        "border-dashed" => "border-style: dashed;",
        "border-dotted" => "border-style: dotted;",
        "border-double" => "border-style: double;",
        "border-hidden" => "border-style: hidden;",
        "border-none" => "border-style: none;",
    };
    if u.lookup(&BORDERS) {
        return true;
    }

    if u.argc() > 2 && u.arg(1) == "spacing" {
        return border_spacing(u);
    }

    if u.argc() == 1 {
        u.style("border-width: 1px;");
        return true;
    }
    if let Some(color) = convert_color(u.tail(1)) {
        u.style(format!("border-color: {};", color));
        return true;
    }
    if u.argc() == 2 {
        if let Some(edges) = edges(u.arg(1)) {
            for edge in edges {
                u.style(format!("border-{}-width: 1px;", edge));
            }
        } else {
            let width = pixels(u.tail(1));
            u.style(format!("border-width: {};", width));
        }
        return true;
    }

    let Some(edges) = edges(u.arg(1)) else {
        return false;
    };
    if let Some(color) = convert_color(u.tail(2)) {
        for edge in edges {
            u.style(format!("border-{}-color: {};", edge, color));
        }
        return true;
    }
    let width = pixels(u.tail(2));
    for edge in edges {
        u.style(format!("border-{}-width: {};", edge, width));
    }
    true
}

/// `border-spacing-2`, `border-spacing-x-4`.
fn border_spacing(u: &mut Utility<'_>) -> bool {
    match (u.argc(), u.arg(2)) {
        (4, axis @ ("x" | "y")) => {
            let declaration = format!(
                "--fry-border-spacing-{}: {};",
                axis,
                convert_size(u.arg(3), false)
            );
            u.style(declaration);
        }
        (3, size) => {
            let size = convert_size(size, false);
            u.style(format!("--fry-border-spacing-x: {};", size));
            u.style(format!("--fry-border-spacing-y: {};", size));
        }
        _ => return false,
    }
    u.style("border-spacing: var(--fry-border-spacing-x) var(--fry-border-spacing-y);");
    true
}

/// Borders between direct children.
pub(super) fn divide(u: &mut Utility<'_>) -> bool {
    static DIVIDES: phf::Map<&'static str, &'static str> = phf_map! {
        "divide-solid" => "border-style: solid;",
        "divide-dashed" => "border-style: dashed;",
        "divide-dotted" => "border-style: dotted;",
        "divide-double" => "border-style: double;",
        "divide-none" => "border-style: none;",
    };
    u.target_children();
    if u.lookup(&DIVIDES) {
        return true;
    }
    if u.argc() == 1 {
        return false;
    }
    if let Some(color) = convert_color(u.tail(1)) {
        u.style(format!("border-color: {};", color));
        return true;
    }

    let axis = match u.arg(1) {
        "x" => "x",
        "y" => "y",
        _ => return false,
    };
    let width = match u.argc() {
        2 => "1px".to_string(),
        _ if u.arg(2) == "reverse" => {
            u.style(format!("--fry-divide-{}-reverse: 1;", axis));
            return true;
        }
        _ => pixels(u.tail(2)),
    };
    let (before, after) = if axis == "x" {
        ("left", "right")
    } else {
        ("top", "bottom")
    };
    u.style(format!("--fry-divide-{}-reverse: 0;", axis));
    u.style(format!(
        "border-{}-width: calc({} * calc(1 - var(--fry-divide-{}-reverse)));",
        before, width, axis
    ));
    u.style(format!(
        "border-{}-width: calc({} * var(--fry-divide-{}-reverse));",
        after, width, axis
    ));
    true
}

pub(super) fn outline(u: &mut Utility<'_>) -> bool {
    static OUTLINES: phf::Map<&'static str, &'static str> = phf_map! {
        "outline-none" => "outline: 2px solid transparent; outline-offset: 2px;",
        "outline" => "outline-style: solid;",
        "outline-dashed" => "outline-style: dashed;",
        "outline-dotted" => "outline-style: dotted;",
        "outline-double" => "outline-style: double;",
    };
    if u.lookup(&OUTLINES) {
        return true;
    }
    if let Some(color) = convert_color(u.tail(1)) {
        u.style(format!("outline-color: {};", color));
        return true;
    }
    if u.argc() > 2 && u.arg(1) == "offset" {
        let offset = pixels(u.tail(2));
        u.style(format!("outline-offset: {};", offset));
        return true;
    }
    let width = pixels(u.tail(1));
    u.style(format!("outline-width: {};", width));
    true
}

pub(super) fn ring(u: &mut Utility<'_>) -> bool {
    if u.argc() == 2 && u.arg(1) == "inset" {
        u.style("--fry-ring-inset: inset;");
        return true;
    }
    if let Some(color) = convert_color(u.tail(1)) {
        u.style(format!("--fry-ring-color: {};", color));
        return true;
    }
    if u.argc() > 2 && u.arg(1) == "offset" {
        if let Some(color) = convert_color(u.tail(2)) {
            u.style(format!("--fry-ring-offset-color: {};", color));
        } else {
            let width = pixels(u.tail(2));
            u.style(format!("--fry-ring-offset-width: {};", width));
        }
        return true;
    }

    let width = if u.argc() == 1 {
        "3px".to_string()
    } else {
        pixels(u.tail(1))
    };
    u.style("--fry-ring-offset-shadow: var(--fry-ring-inset) 0 0 0 var(--fry-ring-offset-width) var(--fry-ring-offset-color);");
    u.style(format!(
        "--fry-ring-shadow: var(--fry-ring-inset) 0 0 0 calc({} + var(--fry-ring-offset-width)) var(--fry-ring-color);",
        width
    ));
    u.style("box-shadow: var(--fry-ring-offset-shadow), var(--fry-ring-shadow), var(--fry-shadow, 0 0 #0000);");
    true
}

#[cfg(test)]
mod tests {
    use crate::utilities::test_support::{style, styles};

    #[test]
    fn test_rounded() {
        assert_eq!(style("rounded"), "border-radius: 0.25rem;");
        assert_eq!(style("rounded-lg"), "border-radius: 0.5rem;");
        assert_eq!(
            style("rounded-t"),
            "border-top-left-radius: 0.25rem; border-top-right-radius: 0.25rem;"
        );
        assert_eq!(style("rounded-br-full"), "border-bottom-right-radius: 9999px;");
        assert_eq!(style("rounded-ss-3px"), "border-start-start-radius: 3px;");
        assert_eq!(style("rounded-5px"), "border-radius: 5px;");
        assert_eq!(styles("rounded-q-lg"), None);
    }

    #[test]
    fn test_border_width_and_color() {
        assert_eq!(style("border"), "border-width: 1px;");
        assert_eq!(style("border-2"), "border-width: 2px;");
        assert_eq!(style("border-x"), "border-left-width: 1px; border-right-width: 1px;");
        assert_eq!(style("border-t-4"), "border-top-width: 4px;");
        assert_eq!(style("border-gray-200"), "border-color: rgb(229 231 235);");
        assert_eq!(style("border-b-black"), "border-bottom-color: rgb(0 0 0);");
        assert_eq!(style("border-dashed"), "border-style: dashed;");
        assert_eq!(styles("border-q-4"), None);
    }

    #[test]
    fn test_border_spacing() {
        assert_eq!(
            style("border-spacing-2"),
            "--fry-border-spacing-x: 0.5rem; --fry-border-spacing-y: 0.5rem; border-spacing: var(--fry-border-spacing-x) var(--fry-border-spacing-y);"
        );
        assert_eq!(
            styles("border-spacing-y-1").unwrap()[0],
            "--fry-border-spacing-y: 0.25rem;"
        );
    }

    #[test]
    fn test_divide() {
        let rule = crate::resolve("divide", "y");
        assert_eq!(rule.selector, ".divide-y > :not([hidden]) ~ :not([hidden])");
        assert_eq!(
            rule.styles,
            vec![
                "--fry-divide-y-reverse: 0;",
                "border-top-width: calc(1px * calc(1 - var(--fry-divide-y-reverse)));",
                "border-bottom-width: calc(1px * var(--fry-divide-y-reverse));",
            ]
        );
        assert_eq!(style("divide-x-reverse"), "--fry-divide-x-reverse: 1;");
        assert_eq!(style("divide-slate-900"), "border-color: rgb(15 23 42);");
        assert_eq!(styles("divide-z"), None);
    }

    #[test]
    fn test_outline() {
        assert_eq!(
            style("outline-none"),
            "outline: 2px solid transparent; outline-offset: 2px;"
        );
        assert_eq!(style("outline-2"), "outline-width: 2px;");
        assert_eq!(style("outline-offset-4"), "outline-offset: 4px;");
        assert_eq!(style("outline-blue-500"), "outline-color: rgb(59 130 246);");
    }

    #[test]
    fn test_ring() {
        let ring = styles("ring").unwrap();
        assert_eq!(ring.len(), 3);
        assert!(ring[1].contains("calc(3px + var(--fry-ring-offset-width))"));
        assert!(style("ring-2").contains("calc(2px + var(--fry-ring-offset-width))"));
        assert_eq!(style("ring-inset"), "--fry-ring-inset: inset;");
        assert_eq!(style("ring-blue-500"), "--fry-ring-color: rgb(59 130 246);");
        assert_eq!(style("ring-offset-2"), "--fry-ring-offset-width: 2px;");
        assert_eq!(style("ring-offset-white"), "--fry-ring-offset-color: rgb(255 255 255);");
    }
}
