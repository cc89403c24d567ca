//! Transitions, animation and transforms.

use fryx_carton::format_number;
use phf::phf_map;

use super::{is_digits, Utility};
use crate::values::{convert_size, merge_value};

const TRANSFORM: &str = "translate(var(--fry-translate-x), var(--fry-translate-y)) rotate(var(--fry-rotate)) skewX(var(--fry-skew-x)) skewY(var(--fry-skew-y)) scaleX(var(--fry-scale-x)) scaleY(var(--fry-scale-y))";

const GPU_TRANSFORM: &str = "translate3d(var(--fry-translate-x), var(--fry-translate-y), 0) rotate(var(--fry-rotate)) skewX(var(--fry-skew-x)) skewY(var(--fry-skew-y)) scaleX(var(--fry-scale-x)) scaleY(var(--fry-scale-y))";

pub(super) fn transition(u: &mut Utility<'_>) -> bool {
    static PROPERTIES: phf::Map<&'static str, &'static str> = phf_map! {
        "transition-all" => "transition-property: all;",
        "transition" => "transition-property: color, background-color, border-color, text-decoration-color, fill, stroke, opacity, box-shadow, transform, filter, backdrop-filter;",
        "transition-colors" => "transition-property: color, background-color, border-color, text-decoration-color, fill, stroke;",
        "transition-opacity" => "transition-property: opacity;",
        "transition-shadow" => "transition-property: box-shadow;",
        "transition-transform" => "transition-property: transform;",
    };
    if u.argc() == 2 && u.arg(1) == "none" {
        u.style("transition-property: none;");
        return true;
    }
    if !u.lookup(&PROPERTIES) {
        let property = merge_value(u.tail(1), false);
        u.style(format!("transition-property: {};", property));
    }
    u.style("transition-timing-function: cubic-bezier(0.4, 0, 0.2, 1);");
    u.style("transition-duration: 150ms;");
    true
}

/// `duration-300` and `delay-150`, in milliseconds.
pub(super) fn timing(u: &mut Utility<'_>) -> bool {
    if u.argc() != 2 || !is_digits(u.arg(1)) {
        return false;
    }
    let property = if u.name() == "duration" {
        "transition-duration"
    } else {
        "transition-delay"
    };
    let declaration = format!("{}: {}ms;", property, u.arg(1));
    u.style(declaration);
    true
}

pub(super) fn ease(u: &mut Utility<'_>) -> bool {
    static EASINGS: phf::Map<&'static str, &'static str> = phf_map! {
        "ease-linear" => "transition-timing-function: linear;",
        "ease-in" => "transition-timing-function: cubic-bezier(0.4, 0, 1, 1);",
        "ease-out" => "transition-timing-function: cubic-bezier(0, 0, 0.2, 1);",
        "ease-in-out" => "transition-timing-function: cubic-bezier(0.4, 0, 0.2, 1);",
    };
    if u.argc() == 1 {
        return false;
    }
    if !u.lookup(&EASINGS) {
        let timing = merge_value(u.tail(1), false);
        u.style(format!("transition-timing-function: {};", timing));
    }
    true
}

/// `animate-spin` and friends also pull their `@keyframes` into the output.
pub(super) fn animate(u: &mut Utility<'_>) -> bool {
    if u.argc() == 1 {
        return false;
    }
    let builtin = match (u.argc(), u.arg(1)) {
        (2, "none") => Some(("animation: none;", None)),
        (2, "spin") => Some(("animation: spin 1s linear infinite;", Some("spin"))),
        (2, "ping") => Some((
            "animation: ping 1s cubic-bezier(0, 0, 0.2, 1) infinite;",
            Some("ping"),
        )),
        (2, "pulse") => Some((
            "animation: pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite;",
            Some("pulse"),
        )),
        (2, "bounce") => Some(("animation: bounce 1s infinite;", Some("bounce"))),
        _ => None,
    };
    match builtin {
        Some((declaration, frames)) => {
            u.style(declaration);
            u.rule.keyframes = frames;
        }
        None => {
            let animation = merge_value(u.tail(1), false);
            u.style(format!("animation: {};", animation));
        }
    }
    true
}

/// `scale-50`, `scale-x-150`; percentages of the natural size.
pub(super) fn scale(u: &mut Utility<'_>) -> bool {
    let (axes, percent) = match (u.argc(), u.arg(1)) {
        (2, n) if is_digits(n) => ("xy", n),
        (3, axis @ ("x" | "y")) if is_digits(u.arg(2)) => (axis, u.arg(2)),
        _ => return false,
    };
    let factor = format_number(percent.parse::<f64>().unwrap_or(100.0) / 100.0);
    let factor = if u.neg { format!("-{}", factor) } else { factor };
    let axes = axes.to_string();
    for axis in axes.chars() {
        u.style(format!("--fry-scale-{}: {};", axis, factor));
    }
    u.style(format!("transform: {};", TRANSFORM));
    true
}

pub(super) fn rotate(u: &mut Utility<'_>) -> bool {
    if u.argc() != 2 || !is_digits(u.arg(1)) {
        return false;
    }
    let sign = if u.neg { "-" } else { "" };
    let declaration = format!("--fry-rotate: {}{}deg;", sign, u.arg(1));
    u.style(declaration);
    u.style(format!("transform: {};", TRANSFORM));
    true
}

pub(super) fn translate(u: &mut Utility<'_>) -> bool {
    let axis = match (u.argc(), u.arg(1)) {
        (3, "x") => 'x',
        (3, "y") => 'y',
        _ => return false,
    };
    let size = convert_size(u.arg(2), u.neg);
    u.style(format!("--fry-translate-{}: {};", axis, size));
    u.style(format!("transform: {};", TRANSFORM));
    true
}

pub(super) fn skew(u: &mut Utility<'_>) -> bool {
    let axis = match (u.argc(), u.arg(1)) {
        (3, "x") => 'x',
        (3, "y") => 'y',
        _ => return false,
    };
    if !is_digits(u.arg(2)) {
        return false;
    }
    let sign = if u.neg { "-" } else { "" };
    let declaration = format!("--fry-skew-{}: {}{}deg;", axis, sign, u.arg(2));
    u.style(declaration);
    u.style(format!("transform: {};", TRANSFORM));
    true
}

pub(super) fn origin(u: &mut Utility<'_>) -> bool {
    static ORIGINS: phf::Map<&'static str, &'static str> = phf_map! {
        "origin-center" => "transform-origin: center;",
        "origin-top" => "transform-origin: top;",
        "origin-top-right" => "transform-origin: top right;",
        "origin-right" => "transform-origin: right;",
        "origin-bottom-right" => "transform-origin: bottom right;",
        "origin-bottom" => "transform-origin: bottom;",
        "origin-bottom-left" => "transform-origin: bottom left;",
        "origin-left" => "transform-origin: left;",
        "origin-top-left" => "transform-origin: top left;",
    };
    if u.argc() == 1 {
        return false;
    }
    if !u.lookup(&ORIGINS) {
        let value = merge_value(u.tail(1), false);
        u.style(format!("transform-origin: {};", value));
    }
    true
}

pub(super) fn transform(u: &mut Utility<'_>) -> bool {
    match (u.argc(), u.arg(1)) {
        (2, "none") => u.style("transform: none;"),
        (2, "gpu") => u.style(format!("transform: {};", GPU_TRANSFORM)),
        _ => return false,
    }
    true
}
