//! Utility handlers.
//!
//! Each handler receives the utility name and arguments (`["text", "red",
//! "500"]`), appends declarations to the rule and reports whether the
//! arguments formed a valid utility. Most handlers first try an exact table
//! of whole-utility spellings and fall back to arbitrary values.
//!
//! Handlers are grouped by topic:
//!
//! - **layout**: display, positioning, overflow, visibility, z-index
//! - **flexgrid**: flexbox and grid placement and alignment
//! - **spacing**: padding, margin, space-between, width and height
//! - **typography**: fonts, text color and size, decoration, wrapping
//! - **backgrounds**: backgrounds and gradient stops
//! - **borders**: radius, width, color, divide, outline, ring
//! - **effects**: shadows, opacity, blending, filters, backdrop filters
//! - **motion**: transitions, animation, transforms
//! - **interactivity**: cursor, scrolling, selection, SVG, accessibility

mod backgrounds;
mod borders;
mod effects;
mod flexgrid;
mod interactivity;
mod layout;
mod motion;
mod spacing;
mod typography;

use fryx_carton::SmallVec;

use crate::rule::CssRule;

pub(crate) type Args = SmallVec<[String; 4]>;

/// Working state of one handler invocation.
pub(crate) struct Utility<'r> {
    rule: &'r mut CssRule,
    args: Args,
    neg: bool,
}

impl<'r> Utility<'r> {
    pub(crate) fn new(rule: &'r mut CssRule, args: Args) -> Self {
        let neg = args.first().is_some_and(|name| name.starts_with('-'));
        Self { rule, args, neg }
    }

    #[inline]
    fn argc(&self) -> usize {
        self.args.len()
    }

    /// Argument `i`, or `""` past the end.
    #[inline]
    fn arg(&self, i: usize) -> &str {
        self.args.get(i).map(String::as_str).unwrap_or("")
    }

    /// Arguments from `from` on.
    #[inline]
    fn tail(&self, from: usize) -> &[String] {
        self.args.get(from..).unwrap_or(&[])
    }

    fn style(&mut self, declaration: impl Into<String>) {
        self.rule.styles.push(declaration.into());
    }

    /// Look the dash-joined utility up in an exact table. A table entry may
    /// hold several `;`-terminated declarations.
    fn lookup(&mut self, table: &phf::Map<&'static str, &'static str>) -> bool {
        let joined = self.args.join("-");
        let Some(block) = table.get(joined.as_str()) else {
            return false;
        };
        for declaration in block.split_inclusive(';') {
            let declaration = declaration.trim();
            if !declaration.is_empty() {
                self.style(declaration);
            }
        }
        true
    }

    /// Re-dispatch with rewritten arguments, e.g. `p-x-4` as `px-4`.
    fn redirect(&mut self, args: Args) -> bool {
        self.args = args;
        self.dispatch()
    }

    /// Add a sibling rule reusing this rule's selector inside `wrapper`.
    fn addon(&mut self, wrapper: String, declaration: String) {
        let mut addon = CssRule::addon();
        addon.wrappers.push(wrapper);
        addon.styles.push(declaration);
        self.rule.addons.push(addon);
    }

    /// Make the rule target the direct children instead of the element.
    fn target_children(&mut self) {
        self.rule
            .selector
            .push_str(" > :not([hidden]) ~ :not([hidden])");
    }

    pub(crate) fn dispatch(&mut self) -> bool {
        let name = match self.args.first() {
            Some(first) if !first.is_empty() => first.strip_prefix('-').unwrap_or(first),
            _ => return false,
        };
        match name {
            // layout
            "aspect" => layout::aspect(self),
            "container" => layout::container(self),
            "columns" => layout::columns(self),
            "break" => layout::breaks(self),
            "box" => layout::boxes(self),
            "block" | "inline" | "flow" | "contents" | "hidden" => layout::display(self),
            "table" => layout::table(self),
            "caption" => layout::caption(self),
            "list" => layout::list(self),
            "float" => layout::float(self),
            "clear" => layout::clear(self),
            "isolate" | "isolation" => layout::isolation(self),
            "object" => layout::object(self),
            "overflow" => layout::overflow(self),
            "overscroll" => layout::overscroll(self),
            "static" | "fixed" | "absolute" | "relative" | "sticky" => layout::position(self),
            "inset" => layout::inset(self),
            "start" | "end" | "top" | "right" | "bottom" | "left" => layout::offset(self),
            "visible" | "invisible" | "collapse" => layout::visibility(self),
            "z" => layout::z(self),
            // flexbox and grid
            "flex" => flexgrid::flex(self),
            "grid" => flexgrid::grid(self),
            "basis" => flexgrid::basis(self),
            "grow" | "shrink" => flexgrid::grow_shrink(self),
            "order" => flexgrid::order(self),
            "col" | "row" => flexgrid::placement(self),
            "auto" => flexgrid::auto(self),
            "gap" => flexgrid::gap(self),
            "justify" => flexgrid::justify(self),
            "content" => flexgrid::content(self),
            "items" => flexgrid::items(self),
            "self" => flexgrid::align_self(self),
            "place" => flexgrid::place(self),
            // spacing and sizing
            "p" | "m" => spacing::box_spacing(self),
            "px" | "py" | "ps" | "pe" | "pt" | "pr" | "pb" | "pl" => spacing::padding(self),
            "mx" | "my" | "ms" | "me" | "mt" | "mr" | "mb" | "ml" => spacing::margin(self),
            "space" => spacing::space(self),
            "w" | "h" => spacing::size(self),
            "min" | "max" => spacing::size_bound(self),
            // typography
            "font" => typography::font(self),
            "text" => typography::text(self),
            "antialiased" | "subpixel" => typography::smoothing(self),
            "italic" => typography::italic(self),
            "not" => typography::not(self),
            "normal" | "ordinal" | "slashed" | "lining" | "oldstyle" | "proportional"
            | "tabular" | "diagonal" | "stacked" => typography::numeric(self),
            "tracking" => typography::tracking(self),
            "line" => typography::line(self),
            "leading" => typography::leading(self),
            "underline" => typography::underline(self),
            "overline" => typography::overline(self),
            "no" => typography::no(self),
            "decoration" => typography::decoration(self),
            "uppercase" | "lowercase" | "capitalize" => typography::transform_case(self),
            "truncate" => typography::truncate(self),
            "indent" => typography::indent(self),
            "align" => typography::align(self),
            "whitespace" => typography::whitespace(self),
            "hyphens" => typography::hyphens(self),
            // backgrounds
            "bg" => backgrounds::bg(self),
            "from" => backgrounds::from(self),
            "via" => backgrounds::via(self),
            "to" => backgrounds::to(self),
            // borders
            "rounded" => borders::rounded(self),
            "border" => borders::border(self),
            "divide" => borders::divide(self),
            "outline" => borders::outline(self),
            "ring" => borders::ring(self),
            // effects and filters
            "shadow" => effects::shadow(self),
            "opacity" => effects::opacity(self),
            "mix" => effects::mix(self),
            "blur" | "brightness" | "contrast" | "grayscale" | "hue" | "invert" | "saturate"
            | "sepia" => effects::filter_function(self),
            "drop" => effects::drop_shadow(self),
            "filter" => effects::filter(self),
            "backdrop" => effects::backdrop(self),
            // transitions, animation, transforms
            "transition" => motion::transition(self),
            "duration" | "delay" => motion::timing(self),
            "ease" => motion::ease(self),
            "animate" => motion::animate(self),
            "scale" => motion::scale(self),
            "rotate" => motion::rotate(self),
            "translate" => motion::translate(self),
            "skew" => motion::skew(self),
            "origin" => motion::origin(self),
            "transform" => motion::transform(self),
            // interactivity, svg, accessibility
            "accent" | "caret" | "fill" => interactivity::color_property(self),
            "appearance" => interactivity::appearance(self),
            "cursor" => interactivity::cursor(self),
            "pointer" => interactivity::pointer(self),
            "resize" => interactivity::resize(self),
            "scroll" => interactivity::scroll(self),
            "snap" => interactivity::snap(self),
            "touch" => interactivity::touch(self),
            "select" => interactivity::select(self),
            "will" => interactivity::will(self),
            "stroke" => interactivity::stroke(self),
            "sr" => interactivity::sr(self),
            _ => false,
        }
    }

    /// The utility name without its negative sign.
    fn name(&self) -> &str {
        let first = self.arg(0);
        first.strip_prefix('-').unwrap_or(first)
    }
}

/// Whether `value` is a non-empty run of ASCII digits.
pub(crate) fn is_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

pub(crate) fn args(parts: &[&str]) -> Args {
    parts.iter().map(|part| part.to_string()).collect()
}
