//! Flexbox and grid.

use phf::phf_map;

use super::{is_digits, Utility};
use crate::values::{convert_size, merge_value};

pub(super) fn flex(u: &mut Utility<'_>) -> bool {
    static FLEX: phf::Map<&'static str, &'static str> = phf_map! {
        "flex" => "display: flex;",
        "flex-row" => "flex-direction: row;",
        "flex-row-reverse" => "flex-direction: row-reverse;",
        "flex-col" => "flex-direction: column;",
        "flex-col-reverse" => "flex-direction: column-reverse;",
        "flex-wrap" => "flex-wrap: wrap;",
        "flex-wrap-reverse" => "flex-wrap: wrap-reverse;",
        "flex-nowrap" => "flex-wrap: nowrap;",
        "flex-1" => "flex: 1 1 0%;",
        "flex-auto" => "flex: 1 1 auto;",
        "flex-initial" => "flex: 0 1 auto;",
        "flex-none" => "flex: none;",
    };
    if u.lookup(&FLEX) {
        return true;
    }
    // flex-2-1-0%
    if u.argc() == 4 && is_digits(u.arg(1)) && is_digits(u.arg(2)) {
        let value = format!("{} {} {}", u.arg(1), u.arg(2), u.arg(3));
        u.style(format!("flex: {};", value));
        return true;
    }
    false
}

pub(super) fn grid(u: &mut Utility<'_>) -> bool {
    static GRID: phf::Map<&'static str, &'static str> = phf_map! {
        "grid" => "display: grid;",
        "grid-cols-none" => "grid-template-columns: none;",
        "grid-rows-none" => "grid-template-rows: none;",
        "grid-flow-row" => "grid-auto-flow: row;",
        "grid-flow-col" => "grid-auto-flow: column;",
        "grid-flow-dense" => "grid-auto-flow: dense;",
        "grid-flow-row-dense" => "grid-auto-flow: row dense;",
        "grid-flow-col-dense" => "grid-auto-flow: column dense;",
    };
    if u.lookup(&GRID) {
        return true;
    }
    if u.argc() < 3 {
        return false;
    }
    let property = match u.arg(1) {
        "cols" => "grid-template-columns",
        "rows" => "grid-template-rows",
        _ => return false,
    };
    let value = if u.argc() == 3 && is_digits(u.arg(2)) {
        format!("repeat({}, minmax(0, 1fr))", u.arg(2))
    } else {
        merge_value(u.tail(2), false)
    };
    u.style(format!("{}: {};", property, value));
    true
}

pub(super) fn basis(u: &mut Utility<'_>) -> bool {
    if u.argc() != 2 {
        return false;
    }
    let value = convert_size(u.arg(1), false);
    u.style(format!("flex-basis: {};", value));
    true
}

/// `grow`, `grow-0`, `shrink`, `shrink-0`.
pub(super) fn grow_shrink(u: &mut Utility<'_>) -> bool {
    let property = if u.name() == "grow" {
        "flex-grow"
    } else {
        "flex-shrink"
    };
    let value = match u.argc() {
        1 => "1".to_string(),
        2 if is_digits(u.arg(1)) => u.arg(1).to_string(),
        _ => return false,
    };
    u.style(format!("{}: {};", property, value));
    true
}

pub(super) fn order(u: &mut Utility<'_>) -> bool {
    if u.argc() != 2 {
        return false;
    }
    let value = match u.arg(1) {
        "first" => "-9999".to_string(),
        "last" => "9999".to_string(),
        "none" => "0".to_string(),
        n if is_digits(n) && u.neg => format!("-{}", n),
        n if is_digits(n) => n.to_string(),
        _ => return false,
    };
    u.style(format!("order: {};", value));
    true
}

/// `col-*` and `row-*` grid placement.
pub(super) fn placement(u: &mut Utility<'_>) -> bool {
    static PLACEMENT: phf::Map<&'static str, &'static str> = phf_map! {
        "col-auto" => "grid-column: auto;",
        "col-span-full" => "grid-column: 1 / -1;",
        "col-start-auto" => "grid-column-start: auto;",
        "col-end-auto" => "grid-column-end: auto;",
        "row-auto" => "grid-row: auto;",
        "row-span-full" => "grid-row: 1 / -1;",
        "row-start-auto" => "grid-row-start: auto;",
        "row-end-auto" => "grid-row-end: auto;",
    };
    if u.argc() < 2 {
        return false;
    }
    if u.lookup(&PLACEMENT) {
        return true;
    }
    let property = if u.name() == "col" {
        "grid-column"
    } else {
        "grid-row"
    };
    let style = match (u.argc(), u.arg(1)) {
        (3, "span") if is_digits(u.arg(2)) => {
            format!("{}: span {} / span {};", property, u.arg(2), u.arg(2))
        }
        (3, side @ ("start" | "end")) if is_digits(u.arg(2)) => {
            format!("{}-{}: {};", property, side, u.arg(2))
        }
        _ => format!("{}: {};", property, merge_value(u.tail(1), false)),
    };
    u.style(style);
    true
}

/// `auto-cols-*` and `auto-rows-*`.
pub(super) fn auto(u: &mut Utility<'_>) -> bool {
    static AUTO: phf::Map<&'static str, &'static str> = phf_map! {
        "auto-cols-auto" => "grid-auto-columns: auto;",
        "auto-cols-min" => "grid-auto-columns: min-content;",
        "auto-cols-max" => "grid-auto-columns: max-content;",
        "auto-cols-fr" => "grid-auto-columns: minmax(0, 1fr);",
        "auto-rows-auto" => "grid-auto-rows: auto;",
        "auto-rows-min" => "grid-auto-rows: min-content;",
        "auto-rows-max" => "grid-auto-rows: max-content;",
        "auto-rows-fr" => "grid-auto-rows: minmax(0, 1fr);",
    };
    if u.lookup(&AUTO) {
        return true;
    }
    if u.argc() < 3 {
        return false;
    }
    let property = match u.arg(1) {
        "cols" => "grid-auto-columns",
        "rows" => "grid-auto-rows",
        _ => return false,
    };
    let value = merge_value(u.tail(2), false);
    u.style(format!("{}: {};", property, value));
    true
}

pub(super) fn gap(u: &mut Utility<'_>) -> bool {
    let (property, value) = match (u.argc(), u.arg(1)) {
        (2, value) => ("gap", value),
        (3, "x") => ("column-gap", u.arg(2)),
        (3, "y") => ("row-gap", u.arg(2)),
        _ => return false,
    };
    let value = convert_size(value, false);
    u.style(format!("{}: {};", property, value));
    true
}

pub(super) fn justify(u: &mut Utility<'_>) -> bool {
    static JUSTIFY: phf::Map<&'static str, &'static str> = phf_map! {
        "justify-normal" => "justify-content: normal;",
        "justify-start" => "justify-content: flex-start;",
        "justify-end" => "justify-content: flex-end;",
        "justify-center" => "justify-content: center;",
        "justify-between" => "justify-content: space-between;",
        "justify-around" => "justify-content: space-around;",
        "justify-evenly" => "justify-content: space-evenly;",
        "justify-stretch" => "justify-content: stretch;",
        "justify-items-start" => "justify-items: start;",
        "justify-items-end" => "justify-items: end;",
        "justify-items-center" => "justify-items: center;",
        "justify-items-stretch" => "justify-items: stretch;",
        "justify-self-auto" => "justify-self: auto;",
        "justify-self-start" => "justify-self: start;",
        "justify-self-end" => "justify-self: end;",
        "justify-self-center" => "justify-self: center;",
        "justify-self-stretch" => "justify-self: stretch;",
    };
    u.lookup(&JUSTIFY)
}

/// `content-*`: align-content, or the `content` property of pseudo-elements.
pub(super) fn content(u: &mut Utility<'_>) -> bool {
    static CONTENT: phf::Map<&'static str, &'static str> = phf_map! {
        "content-normal" => "align-content: normal;",
        "content-center" => "align-content: center;",
        "content-start" => "align-content: flex-start;",
        "content-end" => "align-content: flex-end;",
        "content-between" => "align-content: space-between;",
        "content-around" => "align-content: space-around;",
        "content-evenly" => "align-content: space-evenly;",
        "content-baseline" => "align-content: baseline;",
        "content-stretch" => "align-content: stretch;",
        "content-none" => "content: none;",
    };
    if u.lookup(&CONTENT) {
        return true;
    }
    if u.argc() > 1 {
        let value = merge_value(u.tail(1), false);
        u.style(format!("content: {};", value));
        return true;
    }
    false
}

pub(super) fn items(u: &mut Utility<'_>) -> bool {
    static ITEMS: phf::Map<&'static str, &'static str> = phf_map! {
        "items-start" => "align-items: flex-start;",
        "items-end" => "align-items: flex-end;",
        "items-center" => "align-items: center;",
        "items-baseline" => "align-items: baseline;",
        "items-stretch" => "align-items: stretch;",
    };
    u.lookup(&ITEMS)
}

pub(super) fn align_self(u: &mut Utility<'_>) -> bool {
    static SELF: phf::Map<&'static str, &'static str> = phf_map! {
        "self-auto" => "align-self: auto;",
        "self-start" => "align-self: flex-start;",
        "self-end" => "align-self: flex-end;",
        "self-center" => "align-self: center;",
        "self-baseline" => "align-self: baseline;",
        "self-stretch" => "align-self: stretch;",
    };
    u.lookup(&SELF)
}

pub(super) fn place(u: &mut Utility<'_>) -> bool {
    static PLACE: phf::Map<&'static str, &'static str> = phf_map! {
        "place-content-center" => "place-content: center;",
        "place-content-start" => "place-content: start;",
        "place-content-end" => "place-content: end;",
        "place-content-between" => "place-content: space-between;",
        "place-content-around" => "place-content: space-around;",
        "place-content-evenly" => "place-content: space-evenly;",
        "place-content-baseline" => "place-content: baseline;",
        "place-content-stretch" => "place-content: stretch;",
        "place-items-start" => "place-items: start;",
        "place-items-end" => "place-items: end;",
        "place-items-center" => "place-items: center;",
        "place-items-baseline" => "place-items: baseline;",
        "place-items-stretch" => "place-items: stretch;",
        "place-self-auto" => "place-self: auto;",
        "place-self-start" => "place-self: start;",
        "place-self-end" => "place-self: end;",
        "place-self-center" => "place-self: center;",
        "place-self-stretch" => "place-self: stretch;",
    };
    u.lookup(&PLACE)
}
