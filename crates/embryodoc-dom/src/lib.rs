//! Plain-data document tree for declarative static pages.
//!
//! Pages are described as a tree of [`Node`]s carrying style modifiers, then
//! serialized to an HTML fragment by [`render_fragment`].

pub mod node;
pub mod page;
pub mod render;
pub mod style;

pub use node::{Node, NodeKind, Region};
pub use page::{Page, PageError, StaticPage};
pub use render::render_fragment;
pub use style::{Edge, Font, FontWeight, Style, StyleKey};
