//! The reeling minigame.
//!
//! ```text
//!  0.0 ─────────────────────────────── 1.0
//!          [ bar ]          ◆ marker
//! ```
//!
//! The fish marker moves along a track following a movement pattern. The
//! player holds reel to push the capture bar right and releases to let it
//! sink back. Progress fills while the marker is inside the bar and drains
//! otherwise. 100 lands the fish, 0 loses it.

pub mod logic;
pub mod patterns;
pub mod types;

pub use logic::*;
pub use patterns::*;
pub use types::*;
