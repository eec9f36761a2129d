//! The validated, read-only catalog.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use super::data::{default_loot, default_species};
use super::types::{LootEntry, Species, SpeciesId};
use crate::core::error::{FishingError, Result};
use crate::zones::{Zone, ZoneTable};

/// On-disk catalog shape.
#[derive(Debug, Serialize, Deserialize)]
struct CatalogFile {
    species: Vec<Species>,
    #[serde(default)]
    loot: Vec<LootEntry>,
    #[serde(default)]
    zones: Vec<Zone>,
}

#[derive(Debug, Clone)]
pub struct Catalog {
    species: Vec<Species>,
    loot: Vec<LootEntry>,
    zones: ZoneTable,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            species: default_species(),
            loot: default_loot(),
            zones: ZoneTable::default(),
        }
    }
}

impl Catalog {
    pub fn new(species: Vec<Species>, loot: Vec<LootEntry>, zones: ZoneTable) -> Result<Self> {
        let catalog = Self {
            species,
            loot,
            zones,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;
        let zones = ZoneTable::new(file.zones)?;
        Self::new(file.species, file.loot, zones)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn to_json(&self) -> Result<String> {
        let file = CatalogFile {
            species: self.species.clone(),
            loot: self.loot.clone(),
            zones: self.zones.declared(),
        };
        Ok(serde_json::to_string_pretty(&file)?)
    }

    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for species in &self.species {
            if !seen.insert(species.id) {
                return Err(invalid(format!("duplicate species {:?}", species.id)));
            }
            if !(species.min_weight > 0.0) || !species.max_weight.is_finite() {
                return Err(invalid(format!(
                    "{:?} needs a positive, finite weight range",
                    species.id
                )));
            }
            if species.max_weight < species.min_weight {
                return Err(invalid(format!(
                    "{:?} max weight {} is below min weight {}",
                    species.id, species.max_weight, species.min_weight
                )));
            }
            if !(species.base_chance >= 0.0) || species.zone_chances.values().any(|c| !(*c >= 0.0))
            {
                return Err(invalid(format!("{:?} has a negative chance", species.id)));
            }
        }

        let mut seen_loot = HashSet::new();
        for entry in &self.loot {
            if !seen_loot.insert(entry.id) {
                return Err(invalid(format!("duplicate loot {:?}", entry.id)));
            }
            if !(entry.chance >= 0.0) {
                return Err(invalid(format!("loot {:?} has a negative chance", entry.id)));
            }
        }

        if self.loot.is_empty() && self.species.iter().any(|s| s.is_loot) {
            return Err(invalid(
                "a loot entry is present but the loot table is empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn species(&self, id: SpeciesId) -> Result<&Species> {
        self.species
            .iter()
            .find(|s| s.id == id)
            .ok_or(FishingError::UnknownSpecies(id))
    }

    /// All species in roll order.
    pub fn all_species(&self) -> &[Species] {
        &self.species
    }

    pub fn loot_table(&self) -> &[LootEntry] {
        &self.loot
    }

    pub fn zones(&self) -> &ZoneTable {
        &self.zones
    }
}

fn invalid(message: String) -> FishingError {
    FishingError::InvalidCatalog(message)
}
