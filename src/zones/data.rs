//! Zone definitions and the built-in zone table.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::catalog::SpeciesId;

/// Closed set of zones known to the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoneId {
    StarterPond,
    MillPond,
    WillowCreek,
    RiverBend,
    CoralReef,
    DeepTrench,
    OpenOcean,
}

impl ZoneId {
    pub const ALL: [ZoneId; 7] = [
        ZoneId::StarterPond,
        ZoneId::MillPond,
        ZoneId::WillowCreek,
        ZoneId::RiverBend,
        ZoneId::CoralReef,
        ZoneId::DeepTrench,
        ZoneId::OpenOcean,
    ];

    /// Snake-case key, matching the serde representation.
    pub fn key(self) -> &'static str {
        match self {
            ZoneId::StarterPond => "starter_pond",
            ZoneId::MillPond => "mill_pond",
            ZoneId::WillowCreek => "willow_creek",
            ZoneId::RiverBend => "river_bend",
            ZoneId::CoralReef => "coral_reef",
            ZoneId::DeepTrench => "deep_trench",
            ZoneId::OpenOcean => "open_ocean",
        }
    }

    pub fn from_key(key: &str) -> Option<ZoneId> {
        Self::ALL.into_iter().find(|id| id.key() == key)
    }
}

/// Which resolution pass a zone belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoneScope {
    /// Pond-scale areas, checked first.
    Local,
    /// Large regions, checked when no local zone matches.
    Geographic,
    /// The catch-all zone. Never loaded from data.
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub id: ZoneId,
    pub name: String,
    pub center: DVec3,
    pub radius: f64,
    pub depth: f64,
    pub difficulty: u8,
    pub scope: ZoneScope,
    /// When non-empty, only these species can bite here.
    #[serde(default)]
    pub allow_list: Vec<SpeciesId>,
}

impl Zone {
    /// The fallback zone: everywhere that is not inside another zone.
    pub fn open_ocean() -> Self {
        Self {
            id: ZoneId::OpenOcean,
            name: "Open Ocean".to_string(),
            center: DVec3::ZERO,
            radius: f64::INFINITY,
            depth: 40.0,
            difficulty: 3,
            scope: ZoneScope::Fallback,
            allow_list: Vec::new(),
        }
    }

    /// Horizontal containment test; the y coordinate is ignored.
    pub fn contains(&self, position: DVec3) -> bool {
        if self.radius.is_infinite() {
            return true;
        }
        let dx = position.x - self.center.x;
        let dz = position.z - self.center.z;
        dx * dx + dz * dz <= self.radius * self.radius
    }

    pub fn allows(&self, species: SpeciesId) -> bool {
        self.allow_list.is_empty() || self.allow_list.contains(&species)
    }
}

fn zone(
    id: ZoneId,
    name: &str,
    center: (f64, f64, f64),
    radius: f64,
    depth: f64,
    difficulty: u8,
    scope: ZoneScope,
    allow_list: &[SpeciesId],
) -> Zone {
    Zone {
        id,
        name: name.to_string(),
        center: DVec3::new(center.0, center.1, center.2),
        radius,
        depth,
        difficulty,
        scope,
        allow_list: allow_list.to_vec(),
    }
}

/// Returns the built-in zones in declaration order, excluding the fallback.
pub fn default_zones() -> Vec<Zone> {
    vec![
        // Local: pond and creek scale
        zone(
            ZoneId::StarterPond,
            "Starter Pond",
            (0.0, 62.0, 0.0),
            12.0,
            3.0,
            1,
            ZoneScope::Local,
            &[
                SpeciesId::Bluegill,
                SpeciesId::Minnow,
                SpeciesId::Perch,
                SpeciesId::Carp,
                SpeciesId::SunkenLoot,
            ],
        ),
        zone(
            ZoneId::MillPond,
            "Mill Pond",
            (150.0, 62.0, -40.0),
            20.0,
            5.0,
            2,
            ZoneScope::Local,
            &[],
        ),
        zone(
            ZoneId::WillowCreek,
            "Willow Creek",
            (-120.0, 63.0, 80.0),
            15.0,
            2.0,
            2,
            ZoneScope::Local,
            &[],
        ),
        // Geographic: regions
        zone(
            ZoneId::RiverBend,
            "River Bend",
            (0.0, 62.0, 400.0),
            200.0,
            8.0,
            3,
            ZoneScope::Geographic,
            &[],
        ),
        zone(
            ZoneId::CoralReef,
            "Coral Reef",
            (900.0, 62.0, 0.0),
            300.0,
            15.0,
            4,
            ZoneScope::Geographic,
            &[],
        ),
        zone(
            ZoneId::DeepTrench,
            "Deep Trench",
            (-900.0, 62.0, -900.0),
            250.0,
            60.0,
            5,
            ZoneScope::Geographic,
            &[],
        ),
    ]
}
