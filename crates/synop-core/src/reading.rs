//! Station reading model

use serde::{Deserialize, Deserializer};

/// Column identifiers understood by [`StationReading::value_of`].
///
/// These are the ids the table headers report on click; anything else is
/// treated as a missing value by the sort.
pub mod columns {
    pub const NAME: &str = "name";
    pub const TEMPERATURE: &str = "temperature";
    pub const HUMIDITY: &str = "humidity";
    pub const PRESSURE: &str = "pressure";
    pub const WIND_SPEED: &str = "wind_speed";
    pub const PRECIPITATION: &str = "precipitation";
    pub const MEASURED_AT: &str = "measured_at";
}

/// One synoptic observation from one weather station.
///
/// Field names follow the IMGW feed schema. Observation values are kept
/// exactly as the feed delivers them (decimal strings or bare numbers) and
/// parsed on read; a value that fails to parse reads as `None` rather than
/// failing the whole record. Identity and spatial fields are fixed at
/// creation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StationReading {
    #[serde(rename = "id_stacji", deserialize_with = "string_or_number")]
    pub station_id: String,

    #[serde(rename = "stacja")]
    pub name: String,

    #[serde(rename = "data_pomiaru")]
    pub date: String,

    #[serde(rename = "godzina_pomiaru", deserialize_with = "string_or_number")]
    pub hour: String,

    #[serde(rename = "temperatura", deserialize_with = "string_or_number")]
    pub temperature: String,

    #[serde(rename = "predkosc_wiatru", deserialize_with = "string_or_number")]
    pub wind_speed: String,

    #[serde(rename = "kierunek_wiatru", deserialize_with = "string_or_number")]
    pub wind_direction: String,

    #[serde(rename = "wilgotnosc_wzgledna", deserialize_with = "string_or_number")]
    pub humidity: String,

    #[serde(rename = "suma_opadu", deserialize_with = "string_or_number")]
    pub precipitation: String,

    #[serde(rename = "cisnienie", deserialize_with = "string_or_number")]
    pub pressure: String,

    pub lat: f64,
    pub lon: f64,
}

impl StationReading {
    pub fn temperature_value(&self) -> Option<f64> {
        parse_decimal(&self.temperature)
    }

    pub fn humidity_value(&self) -> Option<f64> {
        parse_decimal(&self.humidity)
    }

    pub fn pressure_value(&self) -> Option<f64> {
        parse_decimal(&self.pressure)
    }

    pub fn wind_speed_value(&self) -> Option<f64> {
        parse_decimal(&self.wind_speed)
    }

    pub fn precipitation_value(&self) -> Option<f64> {
        parse_decimal(&self.precipitation)
    }

    /// Combined observation timestamp as displayed in the table and export,
    /// e.g. `2025-08-13 18:00`.
    pub fn measured_at(&self) -> String {
        format!("{} {}:00", self.date, self.hour)
    }

    /// Raw value for a sortable column id, `None` for unknown columns.
    ///
    /// Unknown ids are not an error: the sort treats them as a column whose
    /// values are all missing, which leaves the view order untouched.
    pub fn value_of(&self, column: &str) -> Option<String> {
        match column {
            columns::NAME => Some(self.name.clone()),
            columns::TEMPERATURE => Some(self.temperature.clone()),
            columns::HUMIDITY => Some(self.humidity.clone()),
            columns::PRESSURE => Some(self.pressure.clone()),
            columns::WIND_SPEED => Some(self.wind_speed.clone()),
            columns::PRECIPITATION => Some(self.precipitation.clone()),
            columns::MEASURED_AT => Some(self.measured_at()),
            _ => None,
        }
    }
}

fn parse_decimal(raw: &str) -> Option<f64> {
    let value: f64 = raw.trim().parse().ok()?;
    value.is_finite().then_some(value)
}

/// Accept both `"20.3"` and `20.3` for a field and keep it as a string.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        String(String),
        Number(f64),
    }

    Ok(match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::String(s) => s,
        StringOrNumber::Number(n) => n.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> StationReading {
        serde_json::from_str(
            r#"{
                "id_stacji": "12375",
                "stacja": "Warszawa",
                "data_pomiaru": "2025-08-13",
                "godzina_pomiaru": "18",
                "temperatura": "24.8",
                "predkosc_wiatru": "3",
                "kierunek_wiatru": "90",
                "wilgotnosc_wzgledna": "55.2",
                "suma_opadu": "0",
                "cisnienie": "1019.5",
                "lat": 52.2297,
                "lon": 21.0122
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn parses_decimal_strings_on_read() {
        let reading = sample();
        assert_eq!(reading.temperature_value(), Some(24.8));
        assert_eq!(reading.humidity_value(), Some(55.2));
        assert_eq!(reading.pressure_value(), Some(1019.5));
    }

    #[test]
    fn accepts_bare_numbers_for_observation_fields() {
        let reading: StationReading = serde_json::from_str(
            r#"{
                "id_stacji": 12115,
                "stacja": "Gdańsk",
                "data_pomiaru": "2025-08-13",
                "godzina_pomiaru": 18,
                "temperatura": 19.5,
                "predkosc_wiatru": 4,
                "kierunek_wiatru": 280,
                "wilgotnosc_wzgledna": 72.1,
                "suma_opadu": 0,
                "cisnienie": 1022.1,
                "lat": 54.352,
                "lon": 18.6466
            }"#,
        )
        .unwrap();
        assert_eq!(reading.station_id, "12115");
        assert_eq!(reading.hour, "18");
        assert_eq!(reading.temperature_value(), Some(19.5));
    }

    #[test]
    fn malformed_field_reads_as_none() {
        let mut reading = sample();
        reading.temperature = "n/a".to_string();
        assert_eq!(reading.temperature_value(), None);
    }

    #[test]
    fn measured_at_combines_date_and_hour() {
        assert_eq!(sample().measured_at(), "2025-08-13 18:00");
    }

    #[test]
    fn unknown_column_has_no_value() {
        assert_eq!(sample().value_of("wind_chill"), None);
        assert_eq!(
            sample().value_of(columns::TEMPERATURE),
            Some("24.8".to_string())
        );
    }
}
