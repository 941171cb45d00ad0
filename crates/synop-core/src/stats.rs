//! Aggregate figures for the dashboard stat tiles

use crate::reading::StationReading;

/// Aggregates recomputed whenever the dataset changes.
///
/// Averages run over the full dataset, never the filtered view; an average
/// is `None` when no reading carries a parseable value for that field.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DashboardStats {
    pub avg_temp: Option<f64>,
    pub avg_humidity: Option<f64>,
    pub avg_pressure: Option<f64>,
    pub count: usize,
}

/// Arithmetic means of temperature, humidity and pressure plus the station
/// count, each mean rounded to one decimal place. Pure function of the
/// reading set; malformed fields are excluded from their average rather than
/// poisoning it.
pub fn compute_stats(readings: &[StationReading]) -> DashboardStats {
    DashboardStats {
        avg_temp: mean(readings.iter().filter_map(|r| r.temperature_value())),
        avg_humidity: mean(readings.iter().filter_map(|r| r.humidity_value())),
        avg_pressure: mean(readings.iter().filter_map(|r| r.pressure_value())),
        count: readings.len(),
    }
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let mut sum = 0.0;
    let mut n = 0usize;
    for v in values {
        sum += v;
        n += 1;
    }
    (n > 0).then(|| round1(sum / n as f64))
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
