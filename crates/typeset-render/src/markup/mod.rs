//! HTML host elements: ordered attribute lists and the markup engine.

mod attributes;
mod engine;

pub use attributes::{is_valid_attribute_name, AttributeList};
pub use engine::{Element, MarkupEngine};
