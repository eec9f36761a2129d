//! Fishing zones and the position → zone resolver.
//!
//! Local zones (ponds, creeks) are checked before geographic regions, and
//! anything outside both falls through to the open ocean.

mod data;
mod resolver;

pub use data::*;
pub use resolver::ZoneTable;
