//! Value Objects
//!
//! Small immutable types shared by services and the application layer.

mod imported_file;
mod selection;

pub use imported_file::{ImportedFile, SkippedFile};
pub use selection::IndexSelection;
