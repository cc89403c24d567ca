//! Stylesheet prologue.
//!
//! Written once at the top of a freshly generated stylesheet: a small
//! element reset followed by the default values of every `--fry-*` custom
//! property the utilities compose with. Incremental writes never repeat it.

/// Fixed text opening every full stylesheet generation.
pub const PROLOGUE: &str = r#"*,
::before,
::after {
  box-sizing: border-box;
  border-width: 0;
  border-style: solid;
  border-color: rgb(229 231 235);
}

::before,
::after {
  --fry-content: '';
}

html,
:host {
  line-height: 1.5;
  -webkit-text-size-adjust: 100%;
  -moz-tab-size: 4;
  tab-size: 4;
  font-family: ui-sans-serif, system-ui, sans-serif, "Apple Color Emoji", "Segoe UI Emoji", "Segoe UI Symbol", "Noto Color Emoji";
  -webkit-tap-highlight-color: transparent;
}

body {
  margin: 0;
  line-height: inherit;
}

hr {
  height: 0;
  color: inherit;
  border-top-width: 1px;
}

h1,
h2,
h3,
h4,
h5,
h6 {
  font-size: inherit;
  font-weight: inherit;
}

a {
  color: inherit;
  text-decoration: inherit;
}

b,
strong {
  font-weight: bolder;
}

code,
kbd,
samp,
pre {
  font-family: ui-monospace, SFMono-Regular, Menlo, Monaco, Consolas, "Liberation Mono", "Courier New", monospace;
  font-size: 1em;
}

table {
  text-indent: 0;
  border-color: inherit;
  border-collapse: collapse;
}

button,
input,
optgroup,
select,
textarea {
  font-family: inherit;
  font-size: 100%;
  font-weight: inherit;
  line-height: inherit;
  color: inherit;
  margin: 0;
  padding: 0;
}

button,
[type='button'],
[type='reset'],
[type='submit'] {
  -webkit-appearance: button;
  background-color: transparent;
  background-image: none;
}

blockquote,
dl,
dd,
h1,
h2,
h3,
h4,
h5,
h6,
hr,
figure,
p,
pre {
  margin: 0;
}

ol,
ul,
menu {
  list-style: none;
  margin: 0;
  padding: 0;
}

textarea {
  resize: vertical;
}

input::placeholder,
textarea::placeholder {
  opacity: 1;
  color: rgb(156 163 175);
}

button,
[role="button"] {
  cursor: pointer;
}

img,
svg,
video,
canvas,
audio,
iframe,
embed,
object {
  display: block;
  vertical-align: middle;
}

img,
video {
  max-width: 100%;
  height: auto;
}

[hidden] {
  display: none;
}

*,
::before,
::after,
::backdrop {
  --fry-border-spacing-x: 0;
  --fry-border-spacing-y: 0;
  --fry-translate-x: 0;
  --fry-translate-y: 0;
  --fry-rotate: 0;
  --fry-skew-x: 0;
  --fry-skew-y: 0;
  --fry-scale-x: 1;
  --fry-scale-y: 1;
  --fry-scroll-snap-strictness: proximity;
  --fry-gradient-from-position:  ;
  --fry-gradient-via-position:  ;
  --fry-gradient-to-position:  ;
  --fry-ring-inset:  ;
  --fry-ring-offset-width: 0px;
  --fry-ring-offset-color: #fff;
  --fry-ring-color: rgb(59 130 246 / 0.5);
  --fry-ring-offset-shadow: 0 0 #0000;
  --fry-ring-shadow: 0 0 #0000;
  --fry-shadow: 0 0 #0000;
  --fry-shadow-colored: 0 0 #0000;
  --fry-blur:  ;
  --fry-brightness:  ;
  --fry-contrast:  ;
  --fry-grayscale:  ;
  --fry-hue-rotate:  ;
  --fry-invert:  ;
  --fry-saturate:  ;
  --fry-sepia:  ;
  --fry-drop-shadow:  ;
  --fry-backdrop-blur:  ;
  --fry-backdrop-brightness:  ;
  --fry-backdrop-contrast:  ;
  --fry-backdrop-grayscale:  ;
  --fry-backdrop-hue-rotate:  ;
  --fry-backdrop-invert:  ;
  --fry-backdrop-opacity:  ;
  --fry-backdrop-saturate:  ;
  --fry-backdrop-sepia:  ;
}

"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prologue_defines_composed_properties() {
        for property in [
            "--fry-ring-offset-width",
            "--fry-shadow",
            "--fry-scale-x",
            "--fry-gradient-from-position",
            "--fry-backdrop-sepia",
            "--fry-scroll-snap-strictness",
        ] {
            assert!(PROLOGUE.contains(&format!("  {}:", property)), "{property}");
        }
        assert!(PROLOGUE.ends_with("}\n\n"));
    }
}
