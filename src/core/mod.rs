//! Action schema and captured configuration values

pub mod fields;
pub mod values;

// Re-export main types for convenience
pub use fields::{ActionDefinition, ActionField, FieldKind};
pub use values::AskAiValues;
