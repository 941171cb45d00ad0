//! Reading sources

pub mod embedded;

use synop_core::StationReading;
use thiserror::Error;

/// Errors a reading source can fail with.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("malformed station data: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("duplicate station id {0}")]
    DuplicateStation(String),
}

/// A provider of station readings.
///
/// The full system would fetch these from the IMGW API on a schedule; the
/// dashboard only requires that the set arrives once at startup and that
/// station ids are unique within it.
pub trait ReadingSource {
    fn load(&self) -> Result<Vec<StationReading>, SourceError>;

    fn source_name(&self) -> &str;
}

/// Uniqueness check shared by all sources: station id is the dataset key.
pub(crate) fn ensure_unique_ids(readings: &[StationReading]) -> Result<(), SourceError> {
    let mut seen = std::collections::HashSet::new();
    for reading in readings {
        if !seen.insert(reading.station_id.as_str()) {
            return Err(SourceError::DuplicateStation(reading.station_id.clone()));
        }
    }
    Ok(())
}
