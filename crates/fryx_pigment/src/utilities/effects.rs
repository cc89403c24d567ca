//! Effects: shadows, opacity, blending, filters and backdrop filters.

use fryx_carton::{format_number, parse_digits};
use phf::phf_map;

use super::Utility;
use crate::tables::{BLURS, DROP_SHADOWS, SHADOWS};
use crate::values::{convert_color, merge_value};

const FILTER: &str = "var(--fry-blur) var(--fry-brightness) var(--fry-contrast) var(--fry-grayscale) var(--fry-hue-rotate) var(--fry-invert) var(--fry-saturate) var(--fry-sepia) var(--fry-drop-shadow)";

const BACKDROP_FILTER: &str = "var(--fry-backdrop-blur) var(--fry-backdrop-brightness) var(--fry-backdrop-contrast) var(--fry-backdrop-grayscale) var(--fry-backdrop-hue-rotate) var(--fry-backdrop-invert) var(--fry-backdrop-opacity) var(--fry-backdrop-saturate) var(--fry-backdrop-sepia)";

pub(super) fn shadow(u: &mut Utility<'_>) -> bool {
    if let Some(color) = convert_color(u.tail(1)) {
        u.style(format!("--fry-shadow-color: {};", color));
        u.style("--fry-shadow: var(--fry-shadow-colored);");
        return true;
    }
    let size = match u.argc() {
        1 => "nm",
        2 if u.arg(1) != "nm" => u.arg(1),
        _ => "",
    };
    match SHADOWS.get(size).copied() {
        Some((plain, colored)) => {
            u.style(format!("--fry-shadow: {};", plain));
            u.style(format!("--fry-shadow-colored: {};", colored));
            u.style("box-shadow: var(--fry-ring-offset-shadow, 0 0 #0000), var(--fry-ring-shadow, 0 0 #0000), var(--fry-shadow);");
        }
        None => {
            let value = merge_value(u.tail(1), false);
            u.style(format!("box-shadow: {};", value));
        }
    }
    true
}

/// `N/100` for a digit argument within `0..=max`.
fn fraction(args: &[String], max: u32) -> Option<String> {
    match args {
        [_, n] => parse_digits(n)
            .filter(|n| *n <= max)
            .map(|n| format_number(f64::from(n) / 100.0)),
        _ => None,
    }
}

/// `N%` within `0..=100`, defaulting to `100%` without an argument.
fn percent(args: &[String]) -> Option<String> {
    match args {
        [_] => Some("100%".to_string()),
        [_, n] => parse_digits(n).filter(|n| *n <= 100).map(|n| format!("{}%", n)),
        _ => None,
    }
}

/// A filter function call for `args` (`["blur", "md"]`), as the custom
/// property suffix it is stored under and the call itself.
fn filter_call(args: &[String], negative: bool) -> Option<(&'static str, String)> {
    let name = args.first()?.trim_start_matches('-');
    let call = match name {
        "blur" => {
            let named = match args {
                [_] => BLURS.get("nm"),
                [_, size] => BLURS.get(size.as_str()),
                _ => None,
            };
            let size = match named {
                Some(size) => (*size).to_string(),
                None => merge_value(&args[1..], false),
            };
            ("blur", format!("blur({})", size))
        }
        "brightness" => ("brightness", format!("brightness({})", fraction(args, 200)?)),
        "contrast" => ("contrast", format!("contrast({})", fraction(args, 200)?)),
        "saturate" => ("saturate", format!("saturate({})", fraction(args, 200)?)),
        "opacity" => ("opacity", format!("opacity({})", fraction(args, 100)?)),
        "grayscale" => ("grayscale", format!("grayscale({})", percent(args)?)),
        "invert" => ("invert", format!("invert({})", percent(args)?)),
        "sepia" => ("sepia", format!("sepia({})", percent(args)?)),
        "hue" => {
            let degrees = match args {
                [_, rotate, n] if rotate == "rotate" => parse_digits(n).filter(|n| *n <= 360)?,
                _ => return None,
            };
            let sign = if negative { "-" } else { "" };
            ("hue-rotate", format!("hue-rotate({}{}deg)", sign, degrees))
        }
        _ => return None,
    };
    Some(call)
}

pub(super) fn opacity(u: &mut Utility<'_>) -> bool {
    let Some(value) = fraction(u.tail(0), 100) else {
        return false;
    };
    u.style(format!("opacity: {};", value));
    true
}

pub(super) fn mix(u: &mut Utility<'_>) -> bool {
    static BLENDS: phf::Map<&'static str, &'static str> = phf_map! {
        "mix-blend-normal" => "mix-blend-mode: normal;",
        "mix-blend-multiply" => "mix-blend-mode: multiply;",
        "mix-blend-screen" => "mix-blend-mode: screen;",
        "mix-blend-overlay" => "mix-blend-mode: overlay;",
        "mix-blend-darken" => "mix-blend-mode: darken;",
        "mix-blend-lighten" => "mix-blend-mode: lighten;",
        "mix-blend-color-dodge" => "mix-blend-mode: color-dodge;",
        "mix-blend-color-burn" => "mix-blend-mode: color-burn;",
        "mix-blend-hard-light" => "mix-blend-mode: hard-light;",
        "mix-blend-soft-light" => "mix-blend-mode: soft-light;",
        "mix-blend-difference" => "mix-blend-mode: difference;",
        "mix-blend-exclusion" => "mix-blend-mode: exclusion;",
        "mix-blend-hue" => "mix-blend-mode: hue;",
        "mix-blend-saturation" => "mix-blend-mode: saturation;",
        "mix-blend-color" => "mix-blend-mode: color;",
        "mix-blend-luminosity" => "mix-blend-mode: luminosity;",
        "mix-blend-plus-lighter" => "mix-blend-mode: plus-lighter;",
    };
    u.lookup(&BLENDS)
}

/// `blur-md`, `brightness-150`, `-hue-rotate-90`, ...
pub(super) fn filter_function(u: &mut Utility<'_>) -> bool {
    let Some((variable, call)) = filter_call(u.tail(0), u.neg) else {
        return false;
    };
    u.style(format!("--fry-{}: {};", variable, call));
    u.style(format!("filter: {};", FILTER));
    true
}

/// `drop-shadow`, `drop-shadow-lg`, `drop-shadow-0_0_2px_red`.
pub(super) fn drop_shadow(u: &mut Utility<'_>) -> bool {
    if u.argc() < 2 || u.arg(1) != "shadow" {
        return false;
    }
    let layers: Vec<String> = match u.argc() {
        2 => layers_of("nm"),
        3 if DROP_SHADOWS.contains_key(u.arg(2)) => layers_of(u.arg(2)),
        3 => vec![merge_value(u.tail(2), false)],
        4 => u.tail(2).iter().map(|layer| layer.replace('_', " ")).collect(),
        _ => return false,
    };
    let mut declaration = String::from("--fry-drop-shadow:");
    for layer in &layers {
        declaration.push_str(&format!(" drop-shadow({})", layer));
    }
    declaration.push(';');
    u.style(declaration);
    u.style(format!("filter: {};", FILTER));
    true
}

fn layers_of(size: &str) -> Vec<String> {
    match DROP_SHADOWS.get(size).copied() {
        Some((first, Some(second))) => vec![first.to_string(), second.to_string()],
        Some((first, None)) => vec![first.to_string()],
        None => Vec::new(),
    }
}

pub(super) fn filter(u: &mut Utility<'_>) -> bool {
    if u.argc() == 2 && u.arg(1) == "none" {
        u.style("filter: none;");
        return true;
    }
    false
}

/// `backdrop-blur-sm`, `backdrop-opacity-50`, `backdrop-filter-none`, ...
pub(super) fn backdrop(u: &mut Utility<'_>) -> bool {
    if u.argc() == 3 && u.arg(1) == "filter" && u.arg(2) == "none" {
        u.style("-webkit-backdrop-filter: none;");
        u.style("backdrop-filter: none;");
        return true;
    }
    if u.argc() < 2 {
        return false;
    }
    let Some((variable, call)) = filter_call(u.tail(1), u.neg) else {
        return false;
    };
    u.style(format!("--fry-backdrop-{}: {};", variable, call));
    u.style(format!("-webkit-backdrop-filter: {};", BACKDROP_FILTER));
    u.style(format!("backdrop-filter: {};", BACKDROP_FILTER));
    true
}
