//! Chart series projection

use std::collections::BTreeSet;

use synop_core::StationReading;

/// How a series is drawn by the chart panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesKind {
    Line,
    Bar,
    /// Proportional share of the total, one slice per station.
    Share,
}

/// One of the four parallel series. Values align with the labels; a
/// malformed field shows up as `None` and is skipped when drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub name: &'static str,
    pub kind: SeriesKind,
    pub values: Vec<Option<f64>>,
}

/// Payload for the whole charts tab: shared labels plus the four series.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartData {
    /// Station names, dataset order, narrowed to the selection.
    pub labels: Vec<String>,
    pub series: Vec<ChartSeries>,
}

impl ChartData {
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Project readings to chart data, narrowed to the selected station names.
/// An empty selection shows every station.
pub fn project_charts(readings: &[StationReading], selection: &BTreeSet<String>) -> ChartData {
    let shown: Vec<&StationReading> = readings
        .iter()
        .filter(|r| selection.is_empty() || selection.contains(&r.name))
        .collect();

    ChartData {
        labels: shown.iter().map(|r| r.name.clone()).collect(),
        series: vec![
            ChartSeries {
                name: "Temperatura (°C)",
                kind: SeriesKind::Line,
                values: shown.iter().map(|r| r.temperature_value()).collect(),
            },
            ChartSeries {
                name: "Opady (mm)",
                kind: SeriesKind::Bar,
                values: shown.iter().map(|r| r.precipitation_value()).collect(),
            },
            ChartSeries {
                name: "Ciśnienie (hPa)",
                kind: SeriesKind::Line,
                values: shown.iter().map(|r| r.pressure_value()).collect(),
            },
            ChartSeries {
                name: "Wilgotność (%)",
                kind: SeriesKind::Share,
                values: shown.iter().map(|r| r.humidity_value()).collect(),
            },
        ],
    }
}
