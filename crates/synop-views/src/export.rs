//! CSV export of the current table view

use anyhow::Result;
use chrono::NaiveDate;
use synop_core::StationReading;
use tracing::info;

/// Header row of the download format. Text columns are quoted per row, the
/// numeric ones stay bare, so spreadsheet imports type them correctly.
pub const CSV_HEADER: &str = "Stacja,Temperatura,Wilgotność,Ciśnienie,Wiatr,Opady,Data pomiaru";

/// Serialize the given view (the filtered+sorted table, not the full set)
/// to the download bytes: UTF-8 with a byte-order marker, station name and
/// the combined measurement timestamp quoted, numeric fields bare.
pub fn export_csv(view: &[&StationReading]) -> Vec<u8> {
    let mut lines = Vec::with_capacity(view.len() + 1);
    lines.push(CSV_HEADER.to_string());
    for r in view {
        lines.push(format!(
            "\"{}\",{},{},{},{},{},\"{}\"",
            r.name,
            r.temperature,
            r.humidity,
            r.pressure,
            r.wind_speed,
            r.precipitation,
            r.measured_at(),
        ));
    }

    // BOM keeps Excel from misreading the Polish diacritics.
    let mut bytes = vec![0xEF, 0xBB, 0xBF];
    bytes.extend_from_slice(lines.join("\n").as_bytes());
    bytes
}

pub fn export_file_name(date: NaiveDate) -> String {
    format!("weather_data_{}.csv", date.format("%Y-%m-%d"))
}

/// Full save flow: dialog, then write. Reads the view, mutates nothing.
/// Returns false when the user dismissed the dialog.
pub fn save_with_dialog(view: &[&StationReading], date: NaiveDate) -> Result<bool> {
    let Some(path) = rfd::FileDialog::new()
        .set_title("Eksport danych pogodowych")
        .add_filter("CSV", &["csv"])
        .set_file_name(&export_file_name(date))
        .save_file()
    else {
        return Ok(false);
    };

    std::fs::write(&path, export_csv(view))?;
    info!(path = %path.display(), rows = view.len(), "table view exported");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(name: &str, temp: &str) -> StationReading {
        StationReading {
            station_id: name.to_string(),
            name: name.to_string(),
            date: "2025-08-13".to_string(),
            hour: "18".to_string(),
            temperature: temp.to_string(),
            wind_speed: "3".to_string(),
            wind_direction: "90".to_string(),
            humidity: "55.2".to_string(),
            precipitation: "0".to_string(),
            pressure: "1019.5".to_string(),
            lat: 52.0,
            lon: 19.0,
        }
    }

    #[test]
    fn n_readings_produce_n_plus_one_lines() {
        let a = reading("Warszawa", "24.8");
        let b = reading("Kraków", "25.1");
        let bytes = export_csv(&[&a, &b]);

        let text = std::str::from_utf8(&bytes[3..]).unwrap();
        let lines: Vec<&str> = text.split('\n').collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], CSV_HEADER);
    }

    #[test]
    fn starts_with_utf8_bom() {
        let bytes = export_csv(&[]);
        assert_eq!(&bytes[..3], &[0xEF, 0xBB, 0xBF]);
    }

    #[test]
    fn text_fields_quoted_numeric_fields_bare() {
        let a = reading("Warszawa", "24.8");
        let bytes = export_csv(&[&a]);
        let text = std::str::from_utf8(&bytes[3..]).unwrap();
        assert_eq!(
            text.split('\n').nth(1).unwrap(),
            "\"Warszawa\",24.8,55.2,1019.5,3,0,\"2025-08-13 18:00\""
        );
    }

    #[test]
    fn file_name_carries_the_iso_date() {
        let date = NaiveDate::from_ymd_opt(2025, 8, 13).unwrap();
        assert_eq!(export_file_name(date), "weather_data_2025-08-13.csv");
    }
}
