//! Bobber jig physics while waiting for a bite.
//!
//! Purely visual: the depth drives the jig indicator and nothing else.

use crate::core::constants::{JIG_BOUNCE_DAMPING, JIG_DEPTH_MAX, JIG_GRAVITY, JIG_IMPULSE};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct JigState {
    /// 0.0 at the surface, `JIG_DEPTH_MAX` at the bottom of the range.
    pub depth: f64,
    pub velocity: f64,
}

impl JigState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances one tick and returns the new depth.
    pub fn step(&mut self, jig: bool) -> f64 {
        self.velocity += JIG_GRAVITY;
        if jig {
            self.velocity += JIG_IMPULSE;
        }
        self.depth += self.velocity;

        if self.depth > JIG_DEPTH_MAX {
            self.depth = JIG_DEPTH_MAX;
            self.velocity = -self.velocity * JIG_BOUNCE_DAMPING;
        } else if self.depth < 0.0 {
            self.depth = 0.0;
            self.velocity = -self.velocity * JIG_BOUNCE_DAMPING;
        }
        self.depth
    }
}
