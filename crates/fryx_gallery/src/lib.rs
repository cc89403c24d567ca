//! # fryx_gallery
//!
//! Gallery - Where compiled Fryx components are hung for display.
//!
//! ## Name Origin
//!
//! A **gallery** is the room where finished pieces are shown to visitors.
//! Here, element trees built by compiled server code are rendered into HTML
//! for one page request, each component instance numbered and every client
//! value marked so the browser can hydrate it.
//!
//! ## Features
//!
//! - [`Element`] trees with tag and component names, rendered per [`Page`]
//! - [`ClientEmbed`] markers with first-claim-wins ownership
//! - `data-fryclass` / `data-fryid` / `data-fryembed` hydration attributes
//! - Bootstrap `<script>` tags for components with client scripts
//! - HTML serialization and a full page shell
//!
//! ## Usage
//!
//! ```
//! use fryx_gallery::{props, ClientEmbed, Component, Element, Page, Props, RenderOptions, Value};
//!
//! let counter = Component::new("Counter", |_| {
//!     Ok(Element::tag("button", props([
//!         ("@click", ClientEmbed::new(0).into()),
//!         ("children", Value::List(vec!["+".into()])),
//!     ])))
//! });
//!
//! let options = RenderOptions::default();
//! let mut page = Page::new(&options);
//! let html = Element::component(counter, Props::new()).render(&mut page).unwrap();
//! assert_eq!(
//!     html.to_string(),
//!     r#"<button data-fryembed="1/0-event-click" data-fryclass="Counter" data-fryid="1">+</button>"#
//! );
//! ```

pub mod document;
pub mod element;
pub mod embed;
pub mod errors;
mod html;
pub mod options;
pub mod page;
mod render;
pub mod value;

pub use document::html_document;
pub use element::{
    Component, Element, ElementName, CALL_CLIENT_SCRIPT_KEY, CHILDREN_KEY, CLIENT_EMBED_ATTR,
    COMPONENT_ATTR, COMPONENT_ID_ATTR,
};
pub use embed::ClientEmbed;
pub use errors::RenderError;
pub use options::{PageOptions, RenderOptions};
pub use page::Page;
pub use value::{props, Props, Value};
