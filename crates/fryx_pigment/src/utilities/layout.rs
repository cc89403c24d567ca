//! Layout: display, box model switches, positioning, overflow, visibility.

use phf::phf_map;

use super::Utility;
use crate::tables::{BREAKPOINTS, COLUMN_WIDTHS};
use crate::values::{convert_size, merge_value};

pub(super) fn aspect(u: &mut Utility<'_>) -> bool {
    if u.argc() != 2 {
        return false;
    }
    let value = match u.arg(1) {
        "auto" => "auto".to_string(),
        "square" => "1 / 1".to_string(),
        "video" => "16 / 9".to_string(),
        ratio => ratio.replace('/', " / "),
    };
    u.style(format!("aspect-ratio: {};", value));
    true
}

pub(super) fn container(u: &mut Utility<'_>) -> bool {
    if u.argc() != 1 {
        return false;
    }
    u.style("width: 100%;");
    for width in BREAKPOINTS {
        u.addon(
            format!("@media (min-width: {}px)", width),
            format!("max-width: {}px;", width),
        );
    }
    true
}

pub(super) fn columns(u: &mut Utility<'_>) -> bool {
    if u.argc() != 2 {
        return false;
    }
    let arg = u.arg(1);
    let value = COLUMN_WIDTHS.get(arg).copied().unwrap_or(arg).to_string();
    u.style(format!("columns: {};", value));
    true
}

pub(super) fn breaks(u: &mut Utility<'_>) -> bool {
    static BREAKS: phf::Map<&'static str, &'static str> = phf_map! {
        "break-after-auto" => "break-after: auto;",
        "break-after-avoid" => "break-after: avoid;",
        "break-after-all" => "break-after: all;",
        "break-after-avoid-page" => "break-after: avoid-page;",
        "break-after-page" => "break-after: page;",
        "break-after-left" => "break-after: left;",
        "break-after-right" => "break-after: right;",
        "break-after-column" => "break-after: column;",
        "break-before-auto" => "break-before: auto;",
        "break-before-avoid" => "break-before: avoid;",
        "break-before-all" => "break-before: all;",
        "break-before-avoid-page" => "break-before: avoid-page;",
        "break-before-page" => "break-before: page;",
        "break-before-left" => "break-before: left;",
        "break-before-right" => "break-before: right;",
        "break-before-column" => "break-before: column;",
        "break-inside-auto" => "break-inside: auto;",
        "break-inside-avoid" => "break-inside: avoid;",
        "break-inside-avoid-page" => "break-inside: avoid-page;",
        "break-inside-avoid-column" => "break-inside: avoid-column;",
        // word breaking
        "break-normal" => "overflow-wrap: normal; word-break: normal;",
        "break-words" => "overflow-wrap: break-word;",
        "break-all" => "word-break: break-all;",
        "break-keep" => "word-break: keep-all;",
    };
    u.lookup(&BREAKS)
}

pub(super) fn boxes(u: &mut Utility<'_>) -> bool {
    static BOXES: phf::Map<&'static str, &'static str> = phf_map! {
        "box-decoration-clone" => "box-decoration-break: clone;",
        "box-decoration-slice" => "box-decoration-break: slice;",
        "box-border" => "box-sizing: border-box;",
        "box-content" => "box-sizing: content-box;",
    };
    u.lookup(&BOXES)
}

pub(super) fn display(u: &mut Utility<'_>) -> bool {
    static DISPLAY: phf::Map<&'static str, &'static str> = phf_map! {
        "block" => "display: block;",
        "inline" => "display: inline;",
        "inline-block" => "display: inline-block;",
        "inline-flex" => "display: inline-flex;",
        "inline-table" => "display: inline-table;",
        "inline-grid" => "display: inline-grid;",
        "flow-root" => "display: flow-root;",
        "contents" => "display: contents;",
        "hidden" => "display: none;",
    };
    u.lookup(&DISPLAY)
}

pub(super) fn table(u: &mut Utility<'_>) -> bool {
    static TABLE: phf::Map<&'static str, &'static str> = phf_map! {
        "table" => "display: table;",
        "table-caption" => "display: table-caption;",
        "table-cell" => "display: table-cell;",
        "table-column" => "display: table-column;",
        "table-column-group" => "display: table-column-group;",
        "table-footer-group" => "display: table-footer-group;",
        "table-header-group" => "display: table-header-group;",
        "table-row-group" => "display: table-row-group;",
        "table-row" => "display: table-row;",
        "table-auto" => "table-layout: auto;",
        "table-fixed" => "table-layout: fixed;",
    };
    u.lookup(&TABLE)
}

pub(super) fn caption(u: &mut Utility<'_>) -> bool {
    static CAPTION: phf::Map<&'static str, &'static str> = phf_map! {
        "caption-top" => "caption-side: top;",
        "caption-bottom" => "caption-side: bottom;",
    };
    u.lookup(&CAPTION)
}

pub(super) fn list(u: &mut Utility<'_>) -> bool {
    static LIST: phf::Map<&'static str, &'static str> = phf_map! {
        "list-item" => "display: list-item;",
        "list-image-none" => "list-style-image: none;",
        "list-inside" => "list-style-position: inside;",
        "list-outside" => "list-style-position: outside;",
        "list-none" => "list-style-type: none;",
        "list-disc" => "list-style-type: disc;",
        "list-decimal" => "list-style-type: decimal;",
    };
    if u.argc() == 1 {
        return false;
    }
    if u.lookup(&LIST) {
        return true;
    }
    if u.arg(1) == "image" {
        let value = merge_value(u.tail(2), false);
        u.style(format!("list-style-image: {};", value));
    } else {
        let value = merge_value(u.tail(1), false);
        u.style(format!("list-style-type: {};", value));
    }
    true
}

pub(super) fn float(u: &mut Utility<'_>) -> bool {
    static FLOAT: phf::Map<&'static str, &'static str> = phf_map! {
        "float-right" => "float: right;",
        "float-left" => "float: left;",
        "float-none" => "float: none;",
    };
    u.lookup(&FLOAT)
}

pub(super) fn clear(u: &mut Utility<'_>) -> bool {
    static CLEAR: phf::Map<&'static str, &'static str> = phf_map! {
        "clear-left" => "clear: left;",
        "clear-right" => "clear: right;",
        "clear-both" => "clear: both;",
        "clear-none" => "clear: none;",
    };
    u.lookup(&CLEAR)
}

pub(super) fn isolation(u: &mut Utility<'_>) -> bool {
    static ISOLATION: phf::Map<&'static str, &'static str> = phf_map! {
        "isolate" => "isolation: isolate;",
        "isolation-auto" => "isolation: auto;",
    };
    u.lookup(&ISOLATION)
}

pub(super) fn object(u: &mut Utility<'_>) -> bool {
    static OBJECT: phf::Map<&'static str, &'static str> = phf_map! {
        "object-contain" => "object-fit: contain;",
        "object-cover" => "object-fit: cover;",
        "object-fill" => "object-fit: fill;",
        "object-none" => "object-fit: none;",
        "object-scale-down" => "object-fit: scale-down;",
        "object-bottom" => "object-position: bottom;",
        "object-center" => "object-position: center;",
        "object-left" => "object-position: left;",
        "object-left-bottom" => "object-position: left bottom;",
        "object-left-top" => "object-position: left top;",
        "object-right" => "object-position: right;",
        "object-right-bottom" => "object-position: right bottom;",
        "object-right-top" => "object-position: right top;",
        "object-top" => "object-position: top;",
    };
    u.lookup(&OBJECT)
}

pub(super) fn overflow(u: &mut Utility<'_>) -> bool {
    if u.argc() == 2 && is_overflow_keyword(u.arg(1)) {
        let value = u.arg(1).to_string();
        u.style(format!("overflow: {};", value));
        return true;
    }
    if u.argc() == 3 && matches!(u.arg(1), "x" | "y") && is_overflow_keyword(u.arg(2)) {
        let (axis, value) = (u.arg(1).to_string(), u.arg(2).to_string());
        u.style(format!("overflow-{}: {};", axis, value));
        return true;
    }
    false
}

fn is_overflow_keyword(value: &str) -> bool {
    matches!(value, "auto" | "hidden" | "clip" | "visible" | "scroll")
}

pub(super) fn overscroll(u: &mut Utility<'_>) -> bool {
    let keyword = |v: &str| matches!(v, "auto" | "contain" | "none");
    if u.argc() == 2 && keyword(u.arg(1)) {
        let value = u.arg(1).to_string();
        u.style(format!("overscroll-behavior: {};", value));
        return true;
    }
    if u.argc() == 3 && matches!(u.arg(1), "x" | "y") && keyword(u.arg(2)) {
        let (axis, value) = (u.arg(1).to_string(), u.arg(2).to_string());
        u.style(format!("overscroll-behavior-{}: {};", axis, value));
        return true;
    }
    false
}

pub(super) fn position(u: &mut Utility<'_>) -> bool {
    if u.argc() != 1 || u.neg {
        return false;
    }
    let value = u.arg(0).to_string();
    u.style(format!("position: {};", value));
    true
}

pub(super) fn inset(u: &mut Utility<'_>) -> bool {
    let (axis, value) = match u.argc() {
        2 => (None, u.arg(1)),
        3 if matches!(u.arg(1), "x" | "y") => (Some(u.arg(1) == "x"), u.arg(2)),
        _ => return false,
    };
    let value = convert_size(value, u.neg);
    match axis {
        None => u.style(format!("inset: {};", value)),
        Some(true) => {
            u.style(format!("left: {};", value));
            u.style(format!("right: {};", value));
        }
        Some(false) => {
            u.style(format!("top: {};", value));
            u.style(format!("bottom: {};", value));
        }
    }
    true
}

/// `start-*`, `end-*`, `top-*`, `right-*`, `bottom-*`, `left-*`.
pub(super) fn offset(u: &mut Utility<'_>) -> bool {
    if u.argc() != 2 {
        return false;
    }
    let property = match u.name() {
        "start" => "inset-inline-start",
        "end" => "inset-inline-end",
        "top" => "top",
        "right" => "right",
        "bottom" => "bottom",
        _ => "left",
    };
    let value = convert_size(u.arg(1), u.neg);
    u.style(format!("{}: {};", property, value));
    true
}

pub(super) fn visibility(u: &mut Utility<'_>) -> bool {
    static VISIBILITY: phf::Map<&'static str, &'static str> = phf_map! {
        "visible" => "visibility: visible;",
        "invisible" => "visibility: hidden;",
        "collapse" => "visibility: collapse;",
    };
    u.lookup(&VISIBILITY)
}

pub(super) fn z(u: &mut Utility<'_>) -> bool {
    if u.argc() != 2 {
        return false;
    }
    let value = if u.neg {
        format!("-{}", u.arg(1))
    } else {
        u.arg(1).to_string()
    };
    u.style(format!("z-index: {};", value));
    true
}

#[cfg(test)]
mod tests {
    use crate::utilities::test_support::{style, styles};

    #[test]
    fn test_display() {
        assert_eq!(style("block"), "display: block;");
        assert_eq!(style("inline-flex"), "display: inline-flex;");
        assert_eq!(style("hidden"), "display: none;");
        assert_eq!(style("flow-root"), "display: flow-root;");
        assert_eq!(styles("block-x"), None);
    }

    #[test]
    fn test_aspect_and_columns() {
        assert_eq!(style("aspect-video"), "aspect-ratio: 16 / 9;");
        assert_eq!(style("aspect-4/3"), "aspect-ratio: 4 / 3;");
        assert_eq!(style("columns-sm"), "columns: 24rem;");
        assert_eq!(style("columns-3"), "columns: 3;");
    }

    #[test]
    fn test_break_normal_has_two_declarations() {
        assert_eq!(
            styles("break-normal"),
            Some(vec![
                "overflow-wrap: normal;".to_string(),
                "word-break: normal;".to_string()
            ])
        );
    }

    #[test]
    fn test_positioning() {
        assert_eq!(style("absolute"), "position: absolute;");
        assert_eq!(style("inset-0"), "inset: 0px;");
        assert_eq!(style("inset-x-4"), "left: 1rem; right: 1rem;");
        assert_eq!(style("-top-2"), "top: -0.5rem;");
        assert_eq!(style("start-1/2"), "inset-inline-start: 50%;");
        assert_eq!(style("-z-10"), "z-index: -10;");
        assert_eq!(styles("inset-z-4"), None);
    }

    #[test]
    fn test_overflow() {
        assert_eq!(style("overflow-hidden"), "overflow: hidden;");
        assert_eq!(style("overflow-y-auto"), "overflow-y: auto;");
        assert_eq!(style("overscroll-x-none"), "overscroll-behavior-x: none;");
        assert_eq!(styles("overflow-sideways"), None);
    }

    #[test]
    fn test_list() {
        assert_eq!(style("list-disc"), "list-style-type: disc;");
        assert_eq!(style("list-square"), "list-style-type: square;");
        assert_eq!(styles("list"), None);
    }
}
