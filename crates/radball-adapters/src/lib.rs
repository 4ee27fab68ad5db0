//! Infrastructure adapters for Radball.
//!
//! This crate supplies what the core deliberately leaves out: reading
//! payload and export documents, and loading custom message catalogs from
//! TOML files.

pub mod catalog_loader;
pub mod documents;
pub mod error;

// Re-export commonly used adapters
pub use catalog_loader::{FilesystemCatalogLoader, load_catalog_file};
pub use documents::{
    DocumentSource, parse_entity_inputs, read_entity_inputs, read_league_group_export,
};
pub use error::AdapterError;
