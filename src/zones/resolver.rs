//! Position → zone resolution.

use glam::DVec3;
use std::collections::HashSet;

use super::data::{default_zones, Zone, ZoneId, ZoneScope};
use crate::core::error::{FishingError, Result};

/// Static zone table, split into resolution passes.
///
/// Read-only after construction; resolving the same position always yields
/// the same zone.
#[derive(Debug, Clone)]
pub struct ZoneTable {
    local: Vec<Zone>,
    geographic: Vec<Zone>,
    fallback: Zone,
}

impl Default for ZoneTable {
    fn default() -> Self {
        Self {
            local: default_zones()
                .into_iter()
                .filter(|z| z.scope == ZoneScope::Local)
                .collect(),
            geographic: default_zones()
                .into_iter()
                .filter(|z| z.scope == ZoneScope::Geographic)
                .collect(),
            fallback: Zone::open_ocean(),
        }
    }
}

impl ZoneTable {
    /// Builds a table from loaded zones, preserving declaration order within
    /// each pass. The fallback ocean is always synthesized.
    pub fn new(zones: Vec<Zone>) -> Result<Self> {
        let mut seen = HashSet::new();
        let mut local = Vec::new();
        let mut geographic = Vec::new();

        for zone in zones {
            if zone.id == ZoneId::OpenOcean {
                return Err(FishingError::InvalidCatalog(format!(
                    "zone {:?} cannot be declared as the fallback",
                    zone.id
                )));
            }
            if !seen.insert(zone.id) {
                return Err(FishingError::InvalidCatalog(format!(
                    "duplicate zone {:?}",
                    zone.id
                )));
            }
            if !(zone.radius > 0.0) || !zone.radius.is_finite() {
                return Err(FishingError::InvalidCatalog(format!(
                    "zone {:?} has invalid radius {}",
                    zone.id, zone.radius
                )));
            }
            match zone.scope {
                ZoneScope::Local => local.push(zone),
                ZoneScope::Geographic => geographic.push(zone),
                ZoneScope::Fallback => {
                    return Err(FishingError::InvalidCatalog(format!(
                        "zone {:?} cannot be declared as the fallback",
                        zone.id
                    )))
                }
            }
        }

        Ok(Self {
            local,
            geographic,
            fallback: Zone::open_ocean(),
        })
    }

    /// Local zones first, then geographic, then the open ocean. First match
    /// in declaration order wins.
    pub fn resolve(&self, position: DVec3) -> &Zone {
        self.local
            .iter()
            .chain(self.geographic.iter())
            .find(|zone| zone.contains(position))
            .unwrap_or(&self.fallback)
    }

    pub fn zone(&self, id: ZoneId) -> Result<&Zone> {
        self.iter()
            .find(|zone| zone.id == id)
            .ok_or(FishingError::UnknownZone(id))
    }

    /// All zones in resolution order, fallback last.
    pub fn iter(&self) -> impl Iterator<Item = &Zone> {
        self.local
            .iter()
            .chain(self.geographic.iter())
            .chain(std::iter::once(&self.fallback))
    }

    /// Loaded zones without the synthesized fallback.
    pub fn declared(&self) -> Vec<Zone> {
        self.local
            .iter()
            .chain(self.geographic.iter())
            .cloned()
            .collect()
    }

    pub fn fallback(&self) -> &Zone {
        &self.fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pond(id: ZoneId, x: f64, radius: f64, scope: ZoneScope) -> Zone {
        Zone {
            id,
            name: format!("{:?}", id),
            center: DVec3::new(x, 60.0, 0.0),
            radius,
            depth: 2.0,
            difficulty: 1,
            scope,
            allow_list: Vec::new(),
        }
    }

    #[test]
    fn test_local_beats_geographic() {
        let table = ZoneTable::new(vec![
            pond(ZoneId::RiverBend, 0.0, 500.0, ZoneScope::Geographic),
            pond(ZoneId::MillPond, 10.0, 5.0, ZoneScope::Local),
        ])
        .unwrap();
        assert_eq!(table.resolve(DVec3::new(10.0, 0.0, 0.0)).id, ZoneId::MillPond);
        assert_eq!(table.resolve(DVec3::new(100.0, 0.0, 0.0)).id, ZoneId::RiverBend);
    }

    #[test]
    fn test_first_declared_wins_on_overlap() {
        let table = ZoneTable::new(vec![
            pond(ZoneId::MillPond, 0.0, 10.0, ZoneScope::Local),
            pond(ZoneId::WillowCreek, 5.0, 10.0, ZoneScope::Local),
        ])
        .unwrap();
        assert_eq!(table.resolve(DVec3::new(3.0, 0.0, 0.0)).id, ZoneId::MillPond);
        assert_eq!(table.resolve(DVec3::new(14.0, 0.0, 0.0)).id, ZoneId::WillowCreek);
    }

    #[test]
    fn test_falls_back_to_open_ocean() {
        let table = ZoneTable::default();
        let zone = table.resolve(DVec3::new(5000.0, 62.0, 5000.0));
        assert_eq!(zone.id, ZoneId::OpenOcean);
        assert!(zone.radius.is_infinite());
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let table = ZoneTable::default();
        for &(x, z) in &[(0.0, 0.0), (150.0, -40.0), (900.0, 10.0), (7777.0, 3.0)] {
            let position = DVec3::new(x, 62.0, z);
            let first = table.resolve(position).id;
            for _ in 0..5 {
                assert_eq!(table.resolve(position).id, first);
            }
        }
    }

    #[test]
    fn test_default_table_layout() {
        let table = ZoneTable::default();
        assert_eq!(table.resolve(DVec3::new(1.0, 62.0, 1.0)).id, ZoneId::StarterPond);
        assert_eq!(table.resolve(DVec3::new(0.0, 62.0, 300.0)).id, ZoneId::RiverBend);
        assert_eq!(table.iter().count(), ZoneId::ALL.len());
        assert_eq!(table.iter().last().map(|z| z.id), Some(ZoneId::OpenOcean));
    }

    #[test]
    fn test_zone_lookup() {
        let table = ZoneTable::new(vec![pond(ZoneId::MillPond, 0.0, 10.0, ZoneScope::Local)])
            .unwrap();
        assert!(table.zone(ZoneId::MillPond).is_ok());
        assert!(table.zone(ZoneId::OpenOcean).is_ok());
        assert!(matches!(
            table.zone(ZoneId::CoralReef),
            Err(FishingError::UnknownZone(ZoneId::CoralReef))
        ));
    }

    #[test]
    fn test_rejects_duplicate_and_fallback() {
        let dup = ZoneTable::new(vec![
            pond(ZoneId::MillPond, 0.0, 10.0, ZoneScope::Local),
            pond(ZoneId::MillPond, 50.0, 10.0, ZoneScope::Local),
        ]);
        assert!(matches!(dup, Err(FishingError::InvalidCatalog(_))));

        let fallback = ZoneTable::new(vec![pond(ZoneId::OpenOcean, 0.0, 10.0, ZoneScope::Local)]);
        assert!(matches!(fallback, Err(FishingError::InvalidCatalog(_))));

        let infinite = ZoneTable::new(vec![pond(
            ZoneId::MillPond,
            0.0,
            f64::INFINITY,
            ZoneScope::Local,
        )]);
        assert!(matches!(infinite, Err(FishingError::InvalidCatalog(_))));
    }
}
