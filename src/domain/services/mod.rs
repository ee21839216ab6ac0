//! Domain Services
//!
//! Each step of the harness pipeline lives here as a small, independently
//! testable unit. The generate use case sequences them.

pub mod config_patcher;
pub mod discovery;
pub mod importer;
pub mod normalizer;
pub mod stub_generator;
pub mod templates;

pub use config_patcher::{patch_manifest, ConfigPatcher};
pub use discovery::{discover_angular_files, is_angular_source, ANGULAR_SUFFIXES};
pub use importer::{FileImporter, ImportReport};
pub use normalizer::{NormalizeOutcome, StructureNormalizer};
pub use stub_generator::{render_stub, stub_kind, stub_path, symbol_name, write_stub, StubKind};
