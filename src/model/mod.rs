// File: ./src/model/mod.rs
// Aggregates the split model files
pub mod item;
pub mod parser;

pub use item::{Item, KeyId, ModifierKey, SelectionMode};
pub use parser::{load_checklist, parse_checklist, parse_checklist_json};
