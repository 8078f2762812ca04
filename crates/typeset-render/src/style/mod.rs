//! Style values, style-property objects and the class-name stylesheet.
//!
//! ## Layers
//!
//! - [`StyleValue`]: a single number or keyword
//! - [`StyleProps`]: an open, key-ordered mapping of properties; merged left
//!   to right with later layers winning
//! - [`StyleObject`]: a base layer plus per-[`Breakpoint`] layers
//! - [`StyleSheet`]: turns a style object into one class name and the CSS
//!   rules behind it
//!
//! Property names are validated with [`validate_property`] and keyword values
//! with [`validate_value`] before any CSS is generated from them.

mod css;
mod error;
mod object;
mod props;
mod sheet;
mod value;
mod vocabulary;

pub(crate) use css::is_identifier;
pub use css::{validate_property, validate_props, validate_value};
pub use error::StylesheetError;
pub use object::{Breakpoint, StyleObject};
pub use props::{shorthand_longhands, StyleProps};
pub use sheet::{StyleSheet, DEFAULT_CLASS_PREFIX};
pub use value::StyleValue;
pub use vocabulary::is_style_prop;
