//! Cast charging and landing geometry.

use glam::{DVec3, IVec3};

use crate::core::constants::CAST_POWER_MAX;
use crate::core::types::Pose;
use crate::host::{Block, Terrain};

/// Adds one tick of charge. Power wraps to 0 on reaching the max.
pub fn charge_power(power: f64, increment: f64) -> f64 {
    let next = power + increment;
    if next >= CAST_POWER_MAX {
        0.0
    } else {
        next
    }
}

/// Where the bobber comes down for a cast of `power` with a rod reaching
/// `max_distance` blocks.
pub fn landing_position(pose: &Pose, power: f64, max_distance: f64) -> DVec3 {
    let distance = (power / CAST_POWER_MAX) * max_distance;
    pose.eye + pose.forward.normalize_or_zero() * distance
}

/// Walks down from the landing block looking for water.
///
/// The first non-air block decides: water is a valid landing spot, anything
/// solid fails the cast. Giving up after `max_depth` blocks also fails.
pub fn find_water(terrain: &impl Terrain, landing: DVec3, max_depth: u32) -> Option<IVec3> {
    let start = landing.floor().as_ivec3();
    let max_depth = i32::try_from(max_depth).unwrap_or(i32::MAX);
    for depth in 0..=max_depth {
        let position = IVec3::new(start.x, start.y.saturating_sub(depth), start.z);
        match terrain.block_at(position) {
            Block::Air => continue,
            Block::Water => return Some(position),
            Block::Solid => return None,
        }
    }
    None
}

/// Centre of the top face of a water block, where the bobber floats.
pub fn bobber_position(water: IVec3) -> DVec3 {
    water.as_dvec3() + DVec3::new(0.5, 1.0, 0.5)
}
