//! Embedded snapshot of the IMGW synop feed

use synop_core::StationReading;
use tracing::info;

use super::{ensure_unique_ids, ReadingSource, SourceError};

/// One observation per station, coordinates taken from the IMGW station
/// registry. This stands in for the live feed: the dashboard perturbs these
/// values on refresh instead of fetching new ones.
const STATIONS_JSON: &str = include_str!("../../data/stations.json");

#[derive(Debug, Default)]
pub struct EmbeddedSource;

impl EmbeddedSource {
    pub fn new() -> Self {
        Self
    }
}

impl ReadingSource for EmbeddedSource {
    fn load(&self) -> Result<Vec<StationReading>, SourceError> {
        let readings: Vec<StationReading> = serde_json::from_str(STATIONS_JSON)?;
        ensure_unique_ids(&readings)?;
        info!(
            stations = readings.len(),
            source = self.source_name(),
            "seed dataset loaded"
        );
        Ok(readings)
    }

    fn source_name(&self) -> &str {
        "embedded-imgw-snapshot"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_dataset_loads() {
        let readings = EmbeddedSource::new().load().unwrap();
        assert_eq!(readings.len(), 8);
        assert_eq!(readings[0].name, "Białystok");
        assert_eq!(readings[7].name, "Gdańsk");
    }

    #[test]
    fn seed_observation_fields_all_parse() {
        for reading in EmbeddedSource::new().load().unwrap() {
            assert!(reading.temperature_value().is_some(), "{}", reading.name);
            assert!(reading.humidity_value().is_some(), "{}", reading.name);
            assert!(reading.pressure_value().is_some(), "{}", reading.name);
            assert!(reading.wind_speed_value().is_some(), "{}", reading.name);
            assert!(reading.precipitation_value().is_some(), "{}", reading.name);
        }
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let readings = EmbeddedSource::new().load().unwrap();
        let mut doubled = readings.clone();
        doubled.extend(readings);
        assert!(matches!(
            ensure_unique_ids(&doubled),
            Err(SourceError::DuplicateStation(_))
        ));
    }
}
