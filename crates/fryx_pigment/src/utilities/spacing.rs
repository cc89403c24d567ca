//! Padding, margin, space-between and sizing.

use fryx_carton::smallvec;
use phf::phf_map;

use super::Utility;
use crate::values::convert_size;

/// `p-4`, `m-4`, and the split spelling `p-x-4` which re-dispatches as `px-4`.
pub(super) fn box_spacing(u: &mut Utility<'_>) -> bool {
    let property = if u.name() == "p" { "padding" } else { "margin" };
    match u.argc() {
        2 => {
            // padding cannot be negative
            let size = convert_size(u.arg(1), u.neg && property == "margin");
            u.style(format!("{}: {};", property, size));
            true
        }
        3 if u.arg(1).len() == 1 && "xysetrbl".contains(u.arg(1)) => {
            let args = smallvec![format!("{}{}", u.arg(0), u.arg(1)), u.arg(2).to_string()];
            u.redirect(args)
        }
        _ => false,
    }
}

fn sides(side: char) -> &'static [&'static str] {
    match side {
        'x' => &["left", "right"],
        'y' => &["top", "bottom"],
        's' => &["inline-start"],
        'e' => &["inline-end"],
        't' => &["top"],
        'r' => &["right"],
        'b' => &["bottom"],
        _ => &["left"],
    }
}

fn side_of(u: &Utility<'_>) -> char {
    u.name().chars().nth(1).unwrap_or('l')
}

/// `px-*`, `py-*`, `ps-*`, ... Padding never goes negative.
pub(super) fn padding(u: &mut Utility<'_>) -> bool {
    if u.argc() != 2 {
        return false;
    }
    let size = convert_size(u.arg(1), false);
    for side in sides(side_of(u)) {
        u.style(format!("padding-{}: {};", side, size));
    }
    true
}

/// `mx-*`, `my-*`, `ms-*`, ...
pub(super) fn margin(u: &mut Utility<'_>) -> bool {
    if u.argc() != 2 {
        return false;
    }
    let size = convert_size(u.arg(1), u.neg);
    for side in sides(side_of(u)) {
        u.style(format!("margin-{}: {};", side, size));
    }
    true
}

/// `space-x-4`, `space-y-2`, `space-x-reverse`: margins between direct children.
pub(super) fn space(u: &mut Utility<'_>) -> bool {
    if u.argc() != 3 || !matches!(u.arg(1), "x" | "y") {
        return false;
    }
    let axis = u.arg(1).to_string();
    u.target_children();
    if u.arg(2) == "reverse" {
        u.style(format!("--fry-space-{}-reverse: 1;", axis));
        return true;
    }
    let size = convert_size(u.arg(2), u.neg);
    let (after, before) = if axis == "x" {
        ("right", "left")
    } else {
        ("bottom", "top")
    };
    u.style(format!("--fry-space-{}-reverse: 0;", axis));
    u.style(format!(
        "margin-{}: calc({} * var(--fry-space-{}-reverse));",
        after, size, axis
    ));
    u.style(format!(
        "margin-{}: calc({} * calc(1 - var(--fry-space-{}-reverse)));",
        before, size, axis
    ));
    true
}

/// `w-*` and `h-*`.
pub(super) fn size(u: &mut Utility<'_>) -> bool {
    if u.argc() != 2 {
        return false;
    }
    let (property, screen) = if u.name() == "w" {
        ("width", "100vw")
    } else {
        ("height", "100vh")
    };
    let value = if u.arg(1) == "screen" {
        screen.to_string()
    } else {
        convert_size(u.arg(1), false)
    };
    u.style(format!("{}: {};", property, value));
    true
}

/// `min-w-*`, `min-h-*`, `max-w-*`, `max-h-*`.
pub(super) fn size_bound(u: &mut Utility<'_>) -> bool {
    static NAMED: phf::Map<&'static str, &'static str> = phf_map! {
        "min-h-screen" => "min-height: 100vh;",
        "min-w-screen" => "min-width: 100vw;",
        "max-w-none" => "max-width: none;",
        "max-w-prose" => "max-width: 65ch;",
        "max-w-screen-sm" => "max-width: 640px;",
        "max-w-screen-md" => "max-width: 768px;",
        "max-w-screen-lg" => "max-width: 1024px;",
        "max-w-screen-xl" => "max-width: 1280px;",
        "max-w-screen-2xl" => "max-width: 1536px;",
        "max-h-none" => "max-height: none;",
        "max-h-screen" => "max-height: 100vh;",
    };
    if u.lookup(&NAMED) {
        return true;
    }
    if u.argc() != 3 {
        return false;
    }
    let dimension = match u.arg(1) {
        "w" => "width",
        "h" => "height",
        _ => return false,
    };
    let bound = if u.name() == "min" { "min" } else { "max" };
    let value = convert_size(u.arg(2), false);
    u.style(format!("{}-{}: {};", bound, dimension, value));
    true
}

#[cfg(test)]
mod tests {
    use crate::utilities::test_support::{style, styles};

    #[test]
    fn test_padding() {
        assert_eq!(style("p-4"), "padding: 1rem;");
        assert_eq!(style("px-2"), "padding-left: 0.5rem; padding-right: 0.5rem;");
        assert_eq!(style("pt-px"), "padding-top: 1px;");
        assert_eq!(style("ps-1.5"), "padding-inline-start: 0.375rem;");
        assert_eq!(style("p-x-4"), "padding-left: 1rem; padding-right: 1rem;");
        assert_eq!(styles("p-q-4"), None);
    }

    #[test]
    fn test_margin() {
        assert_eq!(style("m-auto"), "margin: auto;");
        assert_eq!(style("-m-4"), "margin: -1rem;");
        assert_eq!(style("-my-1"), "margin-top: -0.25rem; margin-bottom: -0.25rem;");
        assert_eq!(style("-m-y-1"), "margin-top: -0.25rem; margin-bottom: -0.25rem;");
        assert_eq!(style("me-8"), "margin-inline-end: 2rem;");
    }

    #[test]
    fn test_space_targets_children() {
        let rule = crate::resolve("", "space-x-4");
        assert_eq!(rule.selector, ".space-x-4 > :not([hidden]) ~ :not([hidden])");
        assert_eq!(
            rule.styles,
            vec![
                "--fry-space-x-reverse: 0;",
                "margin-right: calc(1rem * var(--fry-space-x-reverse));",
                "margin-left: calc(1rem * calc(1 - var(--fry-space-x-reverse)));",
            ]
        );
        assert_eq!(style("space-y-reverse"), "--fry-space-y-reverse: 1;");
    }

    #[test]
    fn test_sizing() {
        assert_eq!(style("w-1/2"), "width: 50%;");
        assert_eq!(style("w-screen"), "width: 100vw;");
        assert_eq!(style("h-64"), "height: 16rem;");
        assert_eq!(style("min-h-screen"), "min-height: 100vh;");
        assert_eq!(style("max-w-prose"), "max-width: 65ch;");
        assert_eq!(style("max-w-md"), "max-width: 28rem;");
        assert_eq!(style("min-w-0"), "min-width: 0px;");
        assert_eq!(styles("max-q-4"), None);
    }
}
