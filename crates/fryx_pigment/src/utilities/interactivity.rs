//! Interactivity, SVG and accessibility.

use phf::phf_map;

use super::Utility;
use crate::values::{convert_color, merge_value};

/// `accent-*`, `caret-*` and `fill-*` take a color and nothing else.
pub(super) fn color_property(u: &mut Utility<'_>) -> bool {
    let property = match u.name() {
        "accent" => "accent-color",
        "caret" => "caret-color",
        _ => "fill",
    };
    if u.argc() < 2 {
        return false;
    }
    match convert_color(u.tail(1)) {
        Some(color) => {
            u.style(format!("{}: {};", property, color));
            true
        }
        None => false,
    }
}

pub(super) fn appearance(u: &mut Utility<'_>) -> bool {
    if u.argc() == 2 && u.arg(1) == "none" {
        u.style("appearance: none;");
        return true;
    }
    false
}

pub(super) fn cursor(u: &mut Utility<'_>) -> bool {
    if u.argc() == 1 {
        return false;
    }
    let value = merge_value(u.tail(1), false);
    u.style(format!("cursor: {};", value));
    true
}

pub(super) fn pointer(u: &mut Utility<'_>) -> bool {
    static POINTER: phf::Map<&'static str, &'static str> = phf_map! {
        "pointer-events-none" => "pointer-events: none;",
        "pointer-events-auto" => "pointer-events: auto;",
    };
    u.lookup(&POINTER)
}

pub(super) fn resize(u: &mut Utility<'_>) -> bool {
    static RESIZE: phf::Map<&'static str, &'static str> = phf_map! {
        "resize-none" => "resize: none;",
        "resize-y" => "resize: vertical;",
        "resize-x" => "resize: horizontal;",
        "resize" => "resize: both;",
    };
    u.lookup(&RESIZE)
}

/// `scroll-smooth`, and scroll margin and padding as `scroll-m-4`, `scroll-px-2`.
pub(super) fn scroll(u: &mut Utility<'_>) -> bool {
    match (u.argc(), u.arg(1)) {
        (2, "auto") => {
            u.style("scroll-behavior: auto;");
            return true;
        }
        (2, "smooth") => {
            u.style("scroll-behavior: smooth;");
            return true;
        }
        (3, spacing) if spacing.starts_with('m') || spacing.starts_with('p') => {}
        _ => return false,
    }

    let mut args = super::args(&[u.arg(1), u.arg(2)]);
    if u.neg {
        args[0].insert(0, '-');
    }
    let first = u.rule.styles.len();
    if !u.redirect(args) {
        return false;
    }
    for style in &mut u.rule.styles[first..] {
        style.insert_str(0, "scroll-");
    }
    true
}

pub(super) fn snap(u: &mut Utility<'_>) -> bool {
    static SNAP: phf::Map<&'static str, &'static str> = phf_map! {
        "snap-start" => "scroll-snap-align: start;",
        "snap-end" => "scroll-snap-align: end;",
        "snap-center" => "scroll-snap-align: center;",
        "snap-align-none" => "scroll-snap-align: none;",
        "snap-normal" => "scroll-snap-stop: normal;",
        "snap-always" => "scroll-snap-stop: always;",
        "snap-none" => "scroll-snap-type: none;",
        "snap-x" => "scroll-snap-type: x var(--fry-scroll-snap-strictness);",
        "snap-y" => "scroll-snap-type: y var(--fry-scroll-snap-strictness);",
        "snap-both" => "scroll-snap-type: both var(--fry-scroll-snap-strictness);",
        "snap-mandatory" => "--fry-scroll-snap-strictness: mandatory;",
        "snap-proximity" => "--fry-scroll-snap-strictness: proximity;",
    };
    u.lookup(&SNAP)
}

pub(super) fn touch(u: &mut Utility<'_>) -> bool {
    static TOUCH: phf::Map<&'static str, &'static str> = phf_map! {
        "touch-auto" => "touch-action: auto;",
        "touch-none" => "touch-action: none;",
        "touch-pan-x" => "touch-action: pan-x;",
        "touch-pan-left" => "touch-action: pan-left;",
        "touch-pan-right" => "touch-action: pan-right;",
        "touch-pan-y" => "touch-action: pan-y;",
        "touch-pan-up" => "touch-action: pan-up;",
        "touch-pan-down" => "touch-action: pan-down;",
        "touch-pinch-zoom" => "touch-action: pinch-zoom;",
        "touch-manipulation" => "touch-action: manipulation;",
    };
    u.lookup(&TOUCH)
}

pub(super) fn select(u: &mut Utility<'_>) -> bool {
    static SELECT: phf::Map<&'static str, &'static str> = phf_map! {
        "select-none" => "user-select: none;",
        "select-text" => "user-select: text;",
        "select-all" => "user-select: all;",
        "select-auto" => "user-select: auto;",
    };
    u.lookup(&SELECT)
}

pub(super) fn will(u: &mut Utility<'_>) -> bool {
    static WILL: phf::Map<&'static str, &'static str> = phf_map! {
        "will-change-auto" => "will-change: auto;",
        "will-change-scroll" => "will-change: scroll-position;",
        "will-change-contents" => "will-change: contents;",
        "will-change-transform" => "will-change: transform;",
    };
    u.lookup(&WILL)
}

/// Stroke color, or stroke width for anything that is not a color.
pub(super) fn stroke(u: &mut Utility<'_>) -> bool {
    if u.argc() == 1 {
        return false;
    }
    match convert_color(u.tail(1)) {
        Some(color) => u.style(format!("stroke: {};", color)),
        None => {
            let width = merge_value(u.tail(1), false);
            u.style(format!("stroke-width: {};", width));
        }
    }
    true
}

pub(super) fn sr(u: &mut Utility<'_>) -> bool {
    static SR: phf::Map<&'static str, &'static str> = phf_map! {
        "sr-only" => "position: absolute; width: 1px; height: 1px; padding: 0; margin: -1px; overflow: hidden; clip: rect(0, 0, 0, 0); white-space: nowrap; border-width: 0;",
    };
    u.lookup(&SR)
}

#[cfg(test)]
mod tests {
    use crate::utilities::test_support::{style, styles};

    #[test]
    fn test_color_properties() {
        assert_eq!(style("accent-pink-500"), "accent-color: rgb(236 72 153);");
        assert_eq!(style("caret-black"), "caret-color: rgb(0 0 0);");
        assert_eq!(style("fill-current"), "fill: currentColor;");
        assert_eq!(style("fill-none"), "fill: none;");
        assert_eq!(styles("fill-nothing"), None);
        assert_eq!(styles("caret"), None);
    }

    #[test]
    fn test_scroll_spacing() {
        assert_eq!(style("scroll-smooth"), "scroll-behavior: smooth;");
        assert_eq!(style("scroll-m-4"), "scroll-margin: 1rem;");
        assert_eq!(
            style("scroll-px-2"),
            "scroll-padding-left: 0.5rem; scroll-padding-right: 0.5rem;"
        );
        assert_eq!(style("-scroll-mt-2"), "scroll-margin-top: -0.5rem;");
        assert_eq!(styles("scroll-q-2"), None);
    }

    #[test]
    fn test_tables() {
        assert_eq!(style("cursor-pointer"), "cursor: pointer;");
        assert_eq!(style("pointer-events-none"), "pointer-events: none;");
        assert_eq!(style("resize"), "resize: both;");
        assert_eq!(style("resize-y"), "resize: vertical;");
        assert_eq!(
            style("snap-x"),
            "scroll-snap-type: x var(--fry-scroll-snap-strictness);"
        );
        assert_eq!(style("touch-pan-x"), "touch-action: pan-x;");
        assert_eq!(style("select-none"), "user-select: none;");
        assert_eq!(style("will-change-transform"), "will-change: transform;");
        assert_eq!(style("appearance-none"), "appearance: none;");
    }

    #[test]
    fn test_stroke_and_screen_reader() {
        assert_eq!(style("stroke-sky-500"), "stroke: rgb(14 165 233);");
        assert_eq!(style("stroke-2"), "stroke-width: 2;");
        assert_eq!(styles("sr-only").map(|s| s.len()), Some(9));
    }
}
