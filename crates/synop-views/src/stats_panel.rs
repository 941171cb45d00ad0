//! Dashboard stat tiles

use egui::Ui;
use synop_core::DashboardStats;

/// Four tiles over the full dataset: mean temperature, humidity, pressure
/// and the station count.
pub fn ui(ui: &mut Ui, stats: &DashboardStats) {
    ui.columns(4, |columns| {
        tile(&mut columns[0], "Średnia temperatura", format_value(stats.avg_temp, "°C"));
        tile(&mut columns[1], "Średnia wilgotność", format_value(stats.avg_humidity, "%"));
        tile(&mut columns[2], "Średnie ciśnienie", format_value(stats.avg_pressure, " hPa"));
        tile(&mut columns[3], "Liczba stacji", stats.count.to_string());
    });
}

fn tile(ui: &mut Ui, title: &str, value: String) {
    ui.group(|ui| {
        ui.vertical_centered(|ui| {
            ui.weak(title);
            ui.heading(value);
        });
    });
}

fn format_value(value: Option<f64>, unit: &str) -> String {
    match value {
        Some(v) => format!("{v:.1}{unit}"),
        None => "—".to_string(),
    }
}
