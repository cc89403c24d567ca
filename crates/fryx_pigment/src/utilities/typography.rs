//! Typography: fonts, text color and size, decoration and wrapping.

use phf::phf_map;

use super::{is_digits, Utility};
use crate::tables::{FONT_MONO, FONT_SANS, FONT_SERIF, FONT_SIZES, LETTER_SPACINGS, LINE_HEIGHTS};
use crate::values::{convert_color, convert_size, merge_value};

pub(super) fn font(u: &mut Utility<'_>) -> bool {
    static WEIGHTS: phf::Map<&'static str, &'static str> = phf_map! {
        "font-thin" => "font-weight: 100;",
        "font-extralight" => "font-weight: 200;",
        "font-light" => "font-weight: 300;",
        "font-normal" => "font-weight: 400;",
        "font-medium" => "font-weight: 500;",
        "font-semibold" => "font-weight: 600;",
        "font-bold" => "font-weight: 700;",
        "font-extrabold" => "font-weight: 800;",
        "font-black" => "font-weight: 900;",
    };
    if u.argc() < 2 {
        return false;
    }
    let family = match (u.argc(), u.arg(1)) {
        (2, "sans") => Some(FONT_SANS),
        (2, "serif") => Some(FONT_SERIF),
        (2, "mono") => Some(FONT_MONO),
        _ => None,
    };
    if let Some(family) = family {
        u.style(format!("font-family: {};", family));
        return true;
    }
    if u.lookup(&WEIGHTS) {
        return true;
    }
    let value = merge_value(u.tail(1), false);
    if is_digits(&value) {
        u.style(format!("font-weight: {};", value));
    } else {
        u.style(format!("font-family: {};", value));
    }
    true
}

/// Text overflow, alignment, color, and size in that order of precedence.
pub(super) fn text(u: &mut Utility<'_>) -> bool {
    static TEXT: phf::Map<&'static str, &'static str> = phf_map! {
        "text-ellipsis" => "text-overflow: ellipsis;",
        "text-clip" => "text-overflow: clip;",
        "text-left" => "text-align: left;",
        "text-center" => "text-align: center;",
        "text-right" => "text-align: right;",
        "text-justify" => "text-align: justify;",
        "text-start" => "text-align: start;",
        "text-end" => "text-align: end;",
        "text-wrap" => "text-wrap: wrap;",
        "text-nowrap" => "text-wrap: nowrap;",
        "text-balance" => "text-wrap: balance;",
        "text-pretty" => "text-wrap: pretty;",
    };
    if u.lookup(&TEXT) {
        return true;
    }
    if u.argc() < 2 {
        return false;
    }
    if let Some(color) = convert_color(u.tail(1)) {
        u.style(format!("color: {};", color));
        return true;
    }
    if u.argc() == 2 {
        if let Some((size, height)) = FONT_SIZES.get(u.arg(1)).copied() {
            u.style(format!("font-size: {};", size));
            u.style(format!("line-height: {};", height));
            return true;
        }
    }
    let size = merge_value(u.tail(1), false);
    u.style(format!("font-size: {};", size));
    true
}

pub(super) fn smoothing(u: &mut Utility<'_>) -> bool {
    match (u.argc(), u.name(), u.arg(1)) {
        (1, "antialiased", _) => {
            u.style("-webkit-font-smoothing: antialiased;");
            u.style("-moz-osx-font-smoothing: grayscale;");
            true
        }
        (2, "subpixel", "antialiased") => {
            u.style("-webkit-font-smoothing: auto;");
            u.style("-moz-osx-font-smoothing: auto;");
            true
        }
        _ => false,
    }
}

pub(super) fn italic(u: &mut Utility<'_>) -> bool {
    if u.argc() != 1 {
        return false;
    }
    u.style("font-style: italic;");
    true
}

pub(super) fn not(u: &mut Utility<'_>) -> bool {
    static NOT: phf::Map<&'static str, &'static str> = phf_map! {
        "not-italic" => "font-style: normal;",
        "not-sr-only" => "position: static; width: auto; height: auto; padding: 0; margin: 0; overflow: visible; clip: auto; white-space: normal;",
    };
    u.lookup(&NOT)
}

/// `font-variant-numeric` switches, plus `normal-case`.
pub(super) fn numeric(u: &mut Utility<'_>) -> bool {
    static NUMERIC: phf::Map<&'static str, &'static str> = phf_map! {
        "normal-nums" => "font-variant-numeric: normal;",
        "normal-case" => "text-transform: none;",
        "ordinal" => "font-variant-numeric: ordinal;",
        "slashed-zero" => "font-variant-numeric: slashed-zero;",
        "lining-nums" => "font-variant-numeric: lining-nums;",
        "oldstyle-nums" => "font-variant-numeric: oldstyle-nums;",
        "proportional-nums" => "font-variant-numeric: proportional-nums;",
        "tabular-nums" => "font-variant-numeric: tabular-nums;",
        "diagonal-fractions" => "font-variant-numeric: diagonal-fractions;",
        "stacked-fractions" => "font-variant-numeric: stacked-fractions;",
    };
    u.lookup(&NUMERIC)
}

pub(super) fn tracking(u: &mut Utility<'_>) -> bool {
    if u.argc() != 2 {
        return false;
    }
    let arg = u.arg(1);
    let spacing = LETTER_SPACINGS.get(arg).copied().unwrap_or(arg);
    let spacing = if u.neg && !spacing.starts_with('-') {
        format!("-{}", spacing)
    } else {
        spacing.to_string()
    };
    u.style(format!("letter-spacing: {};", spacing));
    true
}

/// `line-through` and `line-clamp-*`.
pub(super) fn line(u: &mut Utility<'_>) -> bool {
    if u.argc() == 2 && u.arg(1) == "through" {
        u.style("text-decoration-line: line-through;");
        return true;
    }
    if u.argc() != 3 || u.arg(1) != "clamp" {
        return false;
    }
    match u.arg(2) {
        "none" => {
            u.style("overflow: visible;");
            u.style("display: block;");
            u.style("-webkit-box-orient: horizontal;");
            u.style("-webkit-line-clamp: none;");
            true
        }
        lines if is_digits(lines) => {
            let clamp = format!("-webkit-line-clamp: {};", lines);
            u.style("overflow: hidden;");
            u.style("display: -webkit-box;");
            u.style("-webkit-box-orient: vertical;");
            u.style(clamp);
            true
        }
        _ => false,
    }
}

pub(super) fn leading(u: &mut Utility<'_>) -> bool {
    if u.argc() != 2 {
        return false;
    }
    let height = match LINE_HEIGHTS.get(u.arg(1)) {
        Some(height) => (*height).to_string(),
        None => convert_size(u.arg(1), false),
    };
    u.style(format!("line-height: {};", height));
    true
}

pub(super) fn underline(u: &mut Utility<'_>) -> bool {
    if u.argc() == 1 {
        u.style("text-decoration-line: underline;");
        return true;
    }
    if u.argc() < 3 || u.arg(1) != "offset" {
        return false;
    }
    let offset = match (u.argc(), u.arg(2)) {
        (3, "auto") => "auto".to_string(),
        (3, n) if is_digits(n) => format!("{}px", n),
        _ => merge_value(u.tail(2), false),
    };
    u.style(format!("text-underline-offset: {};", offset));
    true
}

pub(super) fn overline(u: &mut Utility<'_>) -> bool {
    if u.argc() != 1 {
        return false;
    }
    u.style("text-decoration-line: overline;");
    true
}

pub(super) fn no(u: &mut Utility<'_>) -> bool {
    if u.argc() == 2 && u.arg(1) == "underline" {
        u.style("text-decoration-line: none;");
        return true;
    }
    false
}

/// Decoration style, color, then thickness.
pub(super) fn decoration(u: &mut Utility<'_>) -> bool {
    static STYLES: phf::Map<&'static str, &'static str> = phf_map! {
        "decoration-solid" => "text-decoration-style: solid;",
        "decoration-double" => "text-decoration-style: double;",
        "decoration-dotted" => "text-decoration-style: dotted;",
        "decoration-dashed" => "text-decoration-style: dashed;",
        "decoration-wavy" => "text-decoration-style: wavy;",
        "decoration-auto" => "text-decoration-thickness: auto;",
        "decoration-from-font" => "text-decoration-thickness: from-font;",
    };
    if u.argc() < 2 {
        return false;
    }
    if u.lookup(&STYLES) {
        return true;
    }
    if let Some(color) = convert_color(u.tail(1)) {
        u.style(format!("text-decoration-color: {};", color));
        return true;
    }
    let thickness = if u.argc() == 2 && is_digits(u.arg(1)) {
        format!("{}px", u.arg(1))
    } else {
        merge_value(u.tail(1), false)
    };
    u.style(format!("text-decoration-thickness: {};", thickness));
    true
}

pub(super) fn transform_case(u: &mut Utility<'_>) -> bool {
    if u.argc() != 1 {
        return false;
    }
    let case = u.name().to_string();
    u.style(format!("text-transform: {};", case));
    true
}

pub(super) fn truncate(u: &mut Utility<'_>) -> bool {
    if u.argc() != 1 {
        return false;
    }
    u.style("overflow: hidden;");
    u.style("text-overflow: ellipsis;");
    u.style("white-space: nowrap;");
    true
}

pub(super) fn indent(u: &mut Utility<'_>) -> bool {
    let size = match u.argc() {
        1 => return false,
        2 => convert_size(u.arg(1), u.neg),
        _ => merge_value(u.tail(1), u.neg),
    };
    u.style(format!("text-indent: {};", size));
    true
}

pub(super) fn align(u: &mut Utility<'_>) -> bool {
    if u.argc() < 2 {
        return false;
    }
    let value = merge_value(u.tail(1), false);
    u.style(format!("vertical-align: {};", value));
    true
}

pub(super) fn whitespace(u: &mut Utility<'_>) -> bool {
    static WHITESPACE: phf::Map<&'static str, &'static str> = phf_map! {
        "whitespace-normal" => "white-space: normal;",
        "whitespace-nowrap" => "white-space: nowrap;",
        "whitespace-pre" => "white-space: pre;",
        "whitespace-pre-line" => "white-space: pre-line;",
        "whitespace-pre-wrap" => "white-space: pre-wrap;",
        "whitespace-break-spaces" => "white-space: break-spaces;",
    };
    u.lookup(&WHITESPACE)
}

pub(super) fn hyphens(u: &mut Utility<'_>) -> bool {
    static HYPHENS: phf::Map<&'static str, &'static str> = phf_map! {
        "hyphens-none" => "hyphens: none;",
        "hyphens-manual" => "hyphens: manual;",
        "hyphens-auto" => "hyphens: auto;",
    };
    u.lookup(&HYPHENS)
}

#[cfg(test)]
mod tests {
    use crate::utilities::test_support::{style, styles};

    #[test]
    fn test_font() {
        assert_eq!(style("font-bold"), "font-weight: 700;");
        assert_eq!(style("font-550"), "font-weight: 550;");
        assert!(style("font-mono").starts_with("font-family: ui-monospace"));
        assert_eq!(style("font-Inter"), "font-family: Inter;");
        assert_eq!(styles("font"), None);
    }

    #[test]
    fn test_text_precedence() {
        assert_eq!(style("text-center"), "text-align: center;");
        assert_eq!(style("text-red-500"), "color: rgb(239 68 68);");
        assert_eq!(style("text-white/50"), "color: rgb(255 255 255 / 0.5);");
        assert_eq!(style("text-lg"), "font-size: 1.125rem; line-height: 1.75rem;");
        assert_eq!(style("text-14px"), "font-size: 14px;");
        assert_eq!(styles("text"), None);
    }

    #[test]
    fn test_font_variants_and_smoothing() {
        assert_eq!(
            style("antialiased"),
            "-webkit-font-smoothing: antialiased; -moz-osx-font-smoothing: grayscale;"
        );
        assert_eq!(
            style("subpixel-antialiased"),
            "-webkit-font-smoothing: auto; -moz-osx-font-smoothing: auto;"
        );
        assert_eq!(style("tabular-nums"), "font-variant-numeric: tabular-nums;");
        assert_eq!(style("normal-case"), "text-transform: none;");
        assert_eq!(style("not-italic"), "font-style: normal;");
        assert_eq!(styles("not-sr-only").map(|s| s.len()), Some(8));
    }

    #[test]
    fn test_spacing_and_height() {
        assert_eq!(style("tracking-wide"), "letter-spacing: 0.025em;");
        assert_eq!(style("-tracking-2px"), "letter-spacing: -2px;");
        assert_eq!(style("leading-snug"), "line-height: 1.375;");
        assert_eq!(style("leading-6"), "line-height: 1.5rem;");
    }

    #[test]
    fn test_line_clamp() {
        assert_eq!(style("line-through"), "text-decoration-line: line-through;");
        assert_eq!(
            style("line-clamp-3"),
            "overflow: hidden; display: -webkit-box; -webkit-box-orient: vertical; -webkit-line-clamp: 3;"
        );
        assert_eq!(styles("line-clamp-x"), None);
    }

    #[test]
    fn test_decoration() {
        assert_eq!(style("underline"), "text-decoration-line: underline;");
        assert_eq!(style("underline-offset-4"), "text-underline-offset: 4px;");
        assert_eq!(style("no-underline"), "text-decoration-line: none;");
        assert_eq!(style("decoration-wavy"), "text-decoration-style: wavy;");
        assert_eq!(
            style("decoration-sky-500"),
            "text-decoration-color: rgb(14 165 233);"
        );
        assert_eq!(style("decoration-2"), "text-decoration-thickness: 2px;");
        assert_eq!(style("uppercase"), "text-transform: uppercase;");
    }

    #[test]
    fn test_wrapping() {
        assert_eq!(
            style("truncate"),
            "overflow: hidden; text-overflow: ellipsis; white-space: nowrap;"
        );
        assert_eq!(style("-indent-4"), "text-indent: -1rem;");
        assert_eq!(style("align-text-top"), "vertical-align: text-top;");
        assert_eq!(style("whitespace-pre-wrap"), "white-space: pre-wrap;");
        assert_eq!(styles("hyphens-maybe"), None);
    }
}
