//! Table row projection

use synop_core::StationReading;

use super::TempBucket;

/// One rendered table row, display strings plus the temperature bucket that
/// tints the temperature cell.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub name: String,
    pub temperature: String,
    pub humidity: String,
    pub pressure: String,
    pub wind_speed: String,
    pub precipitation: String,
    pub measured_at: String,
    pub temp_bucket: TempBucket,
}

/// Project the filtered+sorted view to rows, one per reading, in view order.
pub fn project_rows(view: &[&StationReading]) -> Vec<TableRow> {
    view.iter()
        .map(|r| TableRow {
            name: r.name.clone(),
            temperature: r.temperature.clone(),
            humidity: r.humidity.clone(),
            pressure: r.pressure.clone(),
            wind_speed: r.wind_speed.clone(),
            precipitation: r.precipitation.clone(),
            measured_at: r.measured_at(),
            temp_bucket: TempBucket::for_temperature(r.temperature_value()),
        })
        .collect()
}
