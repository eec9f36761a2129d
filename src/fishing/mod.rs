//! Catch resolution: what bites, how big it is, and what it is worth.

pub mod generation;
pub mod logic;
pub mod types;

pub use generation::*;
pub use logic::*;
pub use types::*;
