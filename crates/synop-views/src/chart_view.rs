//! Charts panel
//!
//! Four charts fed by one [`ChartData`] payload: temperature and pressure
//! as lines, precipitation as bars, humidity as a share doughnut. The panel
//! keeps stable egui ids and swaps data in place, so an update re-renders
//! the same chart instead of rebuilding it.

use egui::{Align2, Color32, FontId, Pos2, RichText, Sense, Shape, Ui, Vec2};
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoints};

use crate::adapters::chart::{ChartData, ChartSeries, SeriesKind};

/// Palette shared by all four charts, one entry per station slot.
const CHART_PALETTE: &[Color32] = &[
    Color32::from_rgb(0x1F, 0xB8, 0xCD),
    Color32::from_rgb(0xFF, 0xC1, 0x85),
    Color32::from_rgb(0xB4, 0x41, 0x3C),
    Color32::from_rgb(0xEC, 0xEB, 0xD5),
    Color32::from_rgb(0x5D, 0x87, 0x8F),
    Color32::from_rgb(0xDB, 0x45, 0x45),
    Color32::from_rgb(0xD2, 0xBA, 0x4C),
    Color32::from_rgb(0x96, 0x43, 0x25),
];

fn palette_color(index: usize) -> Color32 {
    CHART_PALETTE[index % CHART_PALETTE.len()]
}

#[derive(Default)]
pub struct ChartView {
    data: ChartData,
}

impl ChartView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Swap in new labels and series; chart identity is untouched.
    pub fn update(&mut self, data: ChartData) {
        self.data = data;
    }

    pub fn data(&self) -> &ChartData {
        &self.data
    }

    pub fn ui(&mut self, ui: &mut Ui) {
        if self.data.is_empty() {
            ui.centered_and_justified(|ui| {
                ui.label("Brak stacji do wyświetlenia");
            });
            return;
        }

        let chart_height = (ui.available_height() / 2.0 - 28.0).max(140.0);
        let series = self.data.series.clone();
        let labels = self.data.labels.clone();

        // Two rows of two charts, dataset order: temperature, precipitation,
        // pressure, humidity.
        for (row, pair) in series.chunks(2).enumerate() {
            ui.columns(pair.len(), |columns| {
                for (i, (column, s)) in columns.iter_mut().zip(pair).enumerate() {
                    column.strong(s.name);
                    draw_series(column, chart_height, s, &labels, palette_color(row * 2 + i));
                }
            });
        }
    }
}

fn draw_series(ui: &mut Ui, height: f32, series: &ChartSeries, labels: &[String], color: Color32) {
    match series.kind {
        SeriesKind::Line => line_chart(ui, height, series, labels, color),
        SeriesKind::Bar => bar_chart(ui, height, series, labels, color),
        SeriesKind::Share => share_chart(ui, height, series, labels),
    }
}

fn line_chart(ui: &mut Ui, height: f32, series: &ChartSeries, labels: &[String], color: Color32) {
    let points: PlotPoints = series
        .values
        .iter()
        .enumerate()
        .filter_map(|(i, v)| v.map(|y| [i as f64, y]))
        .collect();

    let name = series.name;
    let hover_labels = labels.to_vec();
    Plot::new(name)
        .height(height)
        .legend(Legend::default())
        .allow_scroll(false)
        .label_formatter(move |_, value| {
            let idx = value.x.round() as usize;
            match hover_labels.get(idx) {
                Some(station) => format!("{station}\n{:.1}", value.y),
                None => format!("{:.1}", value.y),
            }
        })
        .show(ui, |plot_ui| {
            plot_ui.line(Line::new(points).name(name).color(color).width(2.0));
        });
}

fn bar_chart(ui: &mut Ui, height: f32, series: &ChartSeries, labels: &[String], color: Color32) {
    let bars: Vec<Bar> = series
        .values
        .iter()
        .enumerate()
        .filter_map(|(i, v)| {
            v.map(|y| {
                let mut bar = Bar::new(i as f64, y).width(0.7).fill(color);
                if let Some(label) = labels.get(i) {
                    bar = bar.name(label);
                }
                bar
            })
        })
        .collect();

    let name = series.name;
    Plot::new(name)
        .height(height)
        .legend(Legend::default())
        .allow_scroll(false)
        .include_y(0.0)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).name(name));
        });
}

/// Humidity as proportional shares of the selection total, doughnut-style,
/// with a legend alongside. Hand-built from mesh segments; egui_plot has no
/// pie kind.
fn share_chart(ui: &mut Ui, height: f32, series: &ChartSeries, labels: &[String]) {
    let total: f64 = series.values.iter().flatten().sum();

    ui.horizontal(|ui| {
        let side = height.min(ui.available_width() * 0.5);
        let (response, painter) = ui.allocate_painter(Vec2::splat(side), Sense::hover());

        if total <= 0.0 {
            painter.text(
                response.rect.center(),
                Align2::CENTER_CENTER,
                "Brak danych",
                FontId::proportional(12.0),
                Color32::from_gray(140),
            );
            return;
        }

        let center = response.rect.center();
        let outer = side * 0.42;
        let inner = outer * 0.55;

        let mut angle = -std::f32::consts::FRAC_PI_2;
        for (i, value) in series.values.iter().enumerate() {
            let Some(v) = value else { continue };
            let sweep = (*v / total) as f32 * std::f32::consts::TAU;
            painter.add(ring_segment(center, inner, outer, angle, angle + sweep, palette_color(i)));
            angle += sweep;
        }

        ui.vertical(|ui| {
            for (i, (label, value)) in labels.iter().zip(&series.values).enumerate() {
                let Some(v) = value else { continue };
                let share = v / total * 100.0;
                ui.horizontal(|ui| {
                    ui.label(RichText::new("●").color(palette_color(i)));
                    ui.label(format!("{label} ({share:.0}%)"));
                });
            }
        });
    });
}

fn ring_segment(center: Pos2, inner: f32, outer: f32, start: f32, end: f32, color: Color32) -> Shape {
    let mut mesh = egui::epaint::Mesh::default();
    let steps = (((end - start) / 0.05).ceil() as usize).max(2);
    for i in 0..=steps {
        let t = start + (end - start) * i as f32 / steps as f32;
        let dir = Vec2::new(t.cos(), t.sin());
        mesh.colored_vertex(center + dir * outer, color);
        mesh.colored_vertex(center + dir * inner, color);
    }
    for i in 0..steps {
        let base = (i * 2) as u32;
        mesh.add_triangle(base, base + 1, base + 2);
        mesh.add_triangle(base + 1, base + 3, base + 2);
    }
    Shape::mesh(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::chart::project_charts;
    use std::collections::BTreeSet;
    use synop_core::StationReading;

    fn reading(name: &str, temp: &str) -> StationReading {
        StationReading {
            station_id: name.to_string(),
            name: name.to_string(),
            date: "2025-08-13".to_string(),
            hour: "18".to_string(),
            temperature: temp.to_string(),
            wind_speed: "2".to_string(),
            wind_direction: "90".to_string(),
            humidity: "55.2".to_string(),
            precipitation: "0".to_string(),
            pressure: "1019.5".to_string(),
            lat: 52.0,
            lon: 19.0,
        }
    }

    #[test]
    fn update_swaps_data_in_place() {
        let mut view = ChartView::new();
        assert!(view.data().is_empty());

        let readings = vec![reading("Warszawa", "24.8"), reading("Kraków", "25.1")];
        view.update(project_charts(&readings, &BTreeSet::new()));
        assert_eq!(view.data().labels.len(), 2);

        // Second update replaces, not accumulates.
        view.update(project_charts(&readings[..1], &BTreeSet::new()));
        assert_eq!(view.data().labels, vec!["Warszawa"]);
    }

    #[test]
    fn palette_wraps_around() {
        assert_eq!(palette_color(0), palette_color(CHART_PALETTE.len()));
    }
}
