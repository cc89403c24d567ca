//! Backgrounds and gradient color stops.

use phf::phf_map;

use super::Utility;
use crate::values::{convert_color, is_percent, merge_value, transparent_stop};

static BACKGROUNDS: phf::Map<&'static str, &'static str> = phf_map! {
    "bg-blend-normal" => "background-blend-mode: normal;",
    "bg-blend-multiply" => "background-blend-mode: multiply;",
    "bg-blend-screen" => "background-blend-mode: screen;",
    "bg-blend-overlay" => "background-blend-mode: overlay;",
    "bg-blend-darken" => "background-blend-mode: darken;",
    "bg-blend-lighten" => "background-blend-mode: lighten;",
    "bg-blend-color-dodge" => "background-blend-mode: color-dodge;",
    "bg-blend-color-burn" => "background-blend-mode: color-burn;",
    "bg-blend-hard-light" => "background-blend-mode: hard-light;",
    "bg-blend-soft-light" => "background-blend-mode: soft-light;",
    "bg-blend-difference" => "background-blend-mode: difference;",
    "bg-blend-exclusion" => "background-blend-mode: exclusion;",
    "bg-blend-hue" => "background-blend-mode: hue;",
    "bg-blend-saturation" => "background-blend-mode: saturation;",
    "bg-blend-color" => "background-blend-mode: color;",
    "bg-blend-luminosity" => "background-blend-mode: luminosity;",
    "bg-fixed" => "background-attachment: fixed;",
    "bg-local" => "background-attachment: local;",
    "bg-scroll" => "background-attachment: scroll;",
    "bg-clip-border" => "background-clip: border-box;",
    "bg-clip-padding" => "background-clip: padding-box;",
    "bg-clip-content" => "background-clip: content-box;",
    "bg-clip-text" => "background-clip: text;",
    "bg-origin-border" => "background-origin: border-box;",
    "bg-origin-padding" => "background-origin: padding-box;",
    "bg-origin-content" => "background-origin: content-box;",
    "bg-bottom" => "background-position: bottom;",
    "bg-center" => "background-position: center;",
    "bg-left" => "background-position: left;",
    "bg-left-bottom" => "background-position: left bottom;",
    "bg-left-top" => "background-position: left top;",
    "bg-right" => "background-position: right;",
    "bg-right-bottom" => "background-position: right bottom;",
    "bg-right-top" => "background-position: right top;",
    "bg-top" => "background-position: top;",
    "bg-repeat" => "background-repeat: repeat;",
    "bg-no-repeat" => "background-repeat: no-repeat;",
    "bg-repeat-x" => "background-repeat: repeat-x;",
    "bg-repeat-y" => "background-repeat: repeat-y;",
    "bg-repeat-round" => "background-repeat: round;",
    "bg-repeat-space" => "background-repeat: space;",
    "bg-auto" => "background-size: auto;",
    "bg-cover" => "background-size: cover;",
    "bg-contain" => "background-size: contain;",
    "bg-none" => "background-image: none;",
    "bg-gradient-to-t" => "background-image: linear-gradient(to top, var(--fry-gradient-stops));",
    "bg-gradient-to-tr" => "background-image: linear-gradient(to top right, var(--fry-gradient-stops));",
    "bg-gradient-to-r" => "background-image: linear-gradient(to right, var(--fry-gradient-stops));",
    "bg-gradient-to-br" => "background-image: linear-gradient(to bottom right, var(--fry-gradient-stops));",
    "bg-gradient-to-b" => "background-image: linear-gradient(to bottom, var(--fry-gradient-stops));",
    "bg-gradient-to-bl" => "background-image: linear-gradient(to bottom left, var(--fry-gradient-stops));",
    "bg-gradient-to-l" => "background-image: linear-gradient(to left, var(--fry-gradient-stops));",
    "bg-gradient-to-tl" => "background-image: linear-gradient(to top left, var(--fry-gradient-stops));",
};

/// Named background settings first, then color, then the arbitrary
/// `bg-pos-*`, `bg-size-*` and `bg-img-*` forms.
pub(super) fn bg(u: &mut Utility<'_>) -> bool {
    if u.lookup(&BACKGROUNDS) {
        return true;
    }
    if u.argc() < 2 {
        return false;
    }
    if let Some(color) = convert_color(u.tail(1)) {
        u.style(format!("background-color: {};", color));
        return true;
    }
    if u.argc() < 3 {
        return false;
    }
    let property = match u.arg(1) {
        "pos" => "background-position",
        "size" => "background-size",
        "img" => "background-image",
        _ => return false,
    };
    let value = merge_value(u.tail(2), false);
    u.style(format!("{}: {};", property, value));
    true
}

/// A lone percentage argument positions the stop instead of coloring it.
fn stop_position(u: &mut Utility<'_>, stop: &str) -> bool {
    if u.argc() == 2 && is_percent(u.arg(1)) {
        let position = u.arg(1).to_string();
        u.style(format!("--fry-gradient-{}-position: {};", stop, position));
        return true;
    }
    false
}

pub(super) fn from(u: &mut Utility<'_>) -> bool {
    if u.argc() < 2 {
        return false;
    }
    if stop_position(u, "from") {
        return true;
    }
    let Some(color) = convert_color(u.tail(1)) else {
        return false;
    };
    let transparent = transparent_stop(&color);
    u.style(format!(
        "--fry-gradient-from: {} var(--fry-gradient-from-position);",
        color
    ));
    u.style(format!(
        "--fry-gradient-to: {} var(--fry-gradient-to-position);",
        transparent
    ));
    u.style("--fry-gradient-stops: var(--fry-gradient-from), var(--fry-gradient-to);");
    true
}

pub(super) fn via(u: &mut Utility<'_>) -> bool {
    if u.argc() < 2 {
        return false;
    }
    if stop_position(u, "via") {
        return true;
    }
    let Some(color) = convert_color(u.tail(1)) else {
        return false;
    };
    let transparent = transparent_stop(&color);
    u.style(format!(
        "--fry-gradient-to: {} var(--fry-gradient-to-position);",
        transparent
    ));
    u.style(format!(
        "--fry-gradient-stops: var(--fry-gradient-from), {} var(--fry-gradient-via-position), var(--fry-gradient-to);",
        color
    ));
    true
}

pub(super) fn to(u: &mut Utility<'_>) -> bool {
    if u.argc() < 2 {
        return false;
    }
    if stop_position(u, "to") {
        return true;
    }
    let Some(color) = convert_color(u.tail(1)) else {
        return false;
    };
    u.style(format!(
        "--fry-gradient-to: {} var(--fry-gradient-to-position);",
        color
    ));
    true
}
