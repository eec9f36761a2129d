//! Species, loot and zone catalog.
//!
//! The catalog is built once at startup (from the built-in tables or a JSON
//! file) and is read-only afterwards.

mod data;
mod registry;
mod types;

pub use data::{default_loot, default_species, SIMPLE_SPECIES};
pub use registry::Catalog;
pub use types::*;
