use thiserror::Error;

use crate::catalog::SpeciesId;
use crate::core::types::PlayerId;
use crate::zones::ZoneId;

#[derive(Error, Debug)]
pub enum FishingError {
    #[error("Unknown species: {0:?}")]
    UnknownSpecies(SpeciesId),

    #[error("Unknown zone: {0:?}")]
    UnknownZone(ZoneId),

    #[error("Unknown player: {0}")]
    UnknownPlayer(PlayerId),

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FishingError>;
