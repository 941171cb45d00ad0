//! Map marker projection

use egui::Color32;
use synop_core::StationReading;

use super::TempBucket;

/// Everything the map panel needs to draw one station marker.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerDescriptor {
    pub station_id: String,
    pub lat: f64,
    pub lon: f64,
    pub color: Color32,
    pub popup: PopupInfo,
}

/// Popup content, kept as the raw feed strings; the panel adds units.
#[derive(Debug, Clone, PartialEq)]
pub struct PopupInfo {
    pub name: String,
    pub temperature: String,
    pub humidity: String,
    pub pressure: String,
    pub wind_speed: String,
    pub precipitation: String,
    pub hour: String,
}

/// Project the full dataset to marker descriptors.
///
/// The map always reflects the full dataset, unaffected by filter or sort;
/// the panel replaces its marker set wholesale with the result, which is
/// equivalent to clearing and redrawing every marker.
pub fn project_markers(readings: &[StationReading]) -> Vec<MarkerDescriptor> {
    readings
        .iter()
        .map(|r| MarkerDescriptor {
            station_id: r.station_id.clone(),
            lat: r.lat,
            lon: r.lon,
            color: TempBucket::for_temperature(r.temperature_value()).color(),
            popup: PopupInfo {
                name: r.name.clone(),
                temperature: r.temperature.clone(),
                humidity: r.humidity.clone(),
                pressure: r.pressure.clone(),
                wind_speed: r.wind_speed.clone(),
                precipitation: r.precipitation.clone(),
                hour: r.hour.clone(),
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(id: &str, name: &str, temp: &str) -> StationReading {
        StationReading {
            station_id: id.to_string(),
            name: name.to_string(),
            date: "2025-08-13".to_string(),
            hour: "18".to_string(),
            temperature: temp.to_string(),
            wind_speed: "2".to_string(),
            wind_direction: "90".to_string(),
            humidity: "55.0".to_string(),
            precipitation: "0".to_string(),
            pressure: "1019.5".to_string(),
            lat: 52.2,
            lon: 21.0,
        }
    }

    #[test]
    fn one_marker_per_reading() {
        let readings = vec![
            reading("1", "Warszawa", "24.8"),
            reading("2", "Kraków", "31.0"),
        ];
        let markers = project_markers(&readings);
        assert_eq!(markers.len(), 2);
        assert_eq!(markers[0].popup.name, "Warszawa");
        assert_eq!(markers[0].color, TempBucket::Mild.color());
        assert_eq!(markers[1].color, TempBucket::Hot.color());
    }

    #[test]
    fn reprojection_replaces_removed_stations() {
        let mut readings = vec![
            reading("1", "Warszawa", "24.8"),
            reading("2", "Kraków", "25.1"),
        ];
        let before = project_markers(&readings);
        assert_eq!(before.len(), 2);

        readings.remove(0);
        let after = project_markers(&readings);
        assert_eq!(after.len(), 1);
        assert_eq!(after[0].station_id, "2");
    }

    #[test]
    fn popup_carries_the_observation_fields() {
        let markers = project_markers(&[reading("1", "Gdańsk", "19.5")]);
        let popup = &markers[0].popup;
        assert_eq!(popup.temperature, "19.5");
        assert_eq!(popup.humidity, "55.0");
        assert_eq!(popup.pressure, "1019.5");
        assert_eq!(popup.wind_speed, "2");
        assert_eq!(popup.precipitation, "0");
        assert_eq!(popup.hour, "18");
    }
}
