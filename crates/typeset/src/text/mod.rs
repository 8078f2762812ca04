//! The Text primitive: a polymorphic, theme-sized text element.
//!
//! ## Props
//!
//! | Prop | Rust | Default |
//! |------|------|---------|
//! | `as` | [`Tag`] (22 inline/text-level tags) | `p` |
//! | `size` | [`Size`], or per breakpoint via [`Responsive`](typeset_render::Responsive) | `default` |
//! | `variant` | [`Variant`] | `default` |
//! | `id`, `role`, `className` | `Option<String>` | none |
//! | `style` | [`InlineStyle`], passed through raw | none |
//! | `dataAttributes` | ordered `(name, value)` pairs | empty |
//! | `aria-*` | [`AriaAttributes`] | none |
//! | style props | [`StyleProps`](typeset_render::StyleProps) | none |
//!
//! ## Precedence
//!
//! - Caller style props override the size/variant styles for the same key.
//! - `className` is appended to the computed class, never replacing it.
//! - Custom attributes are applied last and override built-in attributes
//!   with the same name.

mod props;
mod render;
mod resolve;
mod size;
mod tag;
mod validate;

pub use props::{AriaAttribute, AriaAttributes, InlineStyle, TextProps};
pub use render::{
    render_text, render_text_into, ElementHandle, RenderContext, RenderedElement, TextRenderer,
};
pub use resolve::{resolve_size_styles, text_size_style};
pub use size::{Size, Variant};
pub use tag::Tag;
pub use validate::{validate_props, PropWarning, ValidatedProps};
