//! Station map panel
//!
//! Painter-based map in the spirit of a slippy-map widget: equirectangular
//! projection around a center/zoom viewport, a graticule as the base layer,
//! one circular marker per station and a popup on hover. There is no tile
//! layer; tile fetching belongs to an online collaborator and the dashboard
//! runs offline.

use egui::{Align2, Color32, FontId, Pos2, Rect, Rounding, Sense, Stroke, Ui};
use synop_core::MapSettings;
use tracing::debug;

use crate::adapters::map::MarkerDescriptor;

/// Center plus half-extent in degrees of longitude; the latitude extent
/// follows from the widget aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Viewport {
    center_lat: f64,
    center_lon: f64,
    span_lon: f64,
}

/// Pixels per degree, cached per widget size like a map widget caches its
/// container size. Stale after the panel was hidden or resized, which is
/// what [`MapView::invalidate_size`] is for.
#[derive(Debug, Clone, Copy)]
struct Projection {
    rect: Rect,
    px_per_deg_lon: f32,
    px_per_deg_lat: f32,
}

impl Projection {
    fn compute(rect: Rect, viewport: &Viewport) -> Self {
        let px_per_deg_lon = rect.width() / (2.0 * viewport.span_lon as f32);
        // One degree of latitude spans more ground than one of longitude at
        // Polish latitudes; keep distances roughly true around the center.
        let px_per_deg_lat = px_per_deg_lon / viewport.center_lat.to_radians().cos() as f32;
        Self {
            rect,
            px_per_deg_lon,
            px_per_deg_lat,
        }
    }

    fn project(&self, viewport: &Viewport, lat: f64, lon: f64) -> Pos2 {
        Pos2::new(
            self.rect.center().x + (lon - viewport.center_lon) as f32 * self.px_per_deg_lon,
            self.rect.center().y - (lat - viewport.center_lat) as f32 * self.px_per_deg_lat,
        )
    }
}

pub struct MapView {
    home: Viewport,
    viewport: Viewport,
    markers: Vec<MarkerDescriptor>,
    marker_radius: f32,
    projection: Option<Projection>,
}

impl MapView {
    pub fn new(settings: &MapSettings) -> Self {
        let home = Viewport {
            center_lat: settings.center_lat,
            center_lon: settings.center_lon,
            span_lon: settings.span,
        };
        Self {
            home,
            viewport: home,
            markers: Vec::new(),
            marker_radius: 7.0,
            projection: None,
        }
    }

    /// Replace the marker set wholesale. Markers for readings no longer
    /// present disappear, new ones appear; there is no per-marker diffing.
    pub fn set_markers(&mut self, markers: Vec<MarkerDescriptor>) {
        debug!(markers = markers.len(), "map markers replaced");
        self.markers = markers;
    }

    /// Drop the cached projection. Called when the panel may have been
    /// resized while hidden; the next frame recomputes against the real
    /// container bounds.
    pub fn invalidate_size(&mut self) {
        self.projection = None;
    }

    /// Back to the configured center and zoom.
    pub fn reset_view(&mut self) {
        self.viewport = self.home;
        self.projection = None;
    }

    pub fn ui(&mut self, ui: &mut Ui) {
        let (rect, response) =
            ui.allocate_exact_size(ui.available_size(), Sense::click_and_drag());
        if !ui.is_rect_visible(rect) {
            return;
        }

        // Pan with drag, zoom with the wheel, double-click recenters.
        if response.dragged() {
            let delta = response.drag_delta();
            if let Some(projection) = self.projection {
                self.viewport.center_lon -= (delta.x / projection.px_per_deg_lon) as f64;
                self.viewport.center_lat += (delta.y / projection.px_per_deg_lat) as f64;
                self.projection = None;
            }
        }
        if response.hovered() {
            let scroll = ui.input(|i| i.scroll_delta.y);
            if scroll != 0.0 {
                let factor = if scroll > 0.0 { 0.85 } else { 1.0 / 0.85 };
                self.viewport.span_lon = (self.viewport.span_lon * factor).clamp(0.5, 60.0);
                self.projection = None;
            }
        }
        if response.double_clicked() {
            self.reset_view();
        }

        let projection = match self.projection {
            Some(p) if p.rect == rect => p,
            _ => {
                let p = Projection::compute(rect, &self.viewport);
                debug!(?rect, "map projection recalculated");
                self.projection = Some(p);
                p
            }
        };

        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, Rounding::same(4.0), Color32::from_rgb(24, 30, 38));
        self.draw_graticule(&painter, rect, &projection);

        if self.markers.is_empty() {
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                "Brak danych stacji",
                FontId::proportional(14.0),
                Color32::from_gray(140),
            );
            return;
        }

        for marker in &self.markers {
            let pos = projection.project(&self.viewport, marker.lat, marker.lon);
            if !rect.contains(pos) {
                continue;
            }
            painter.circle_filled(pos, self.marker_radius, marker.color);
            painter.circle_stroke(pos, self.marker_radius, Stroke::new(2.0, Color32::WHITE));
        }

        // Popup for the marker under the pointer.
        if let Some(pointer) = response.hover_pos() {
            let hovered = self
                .markers
                .iter()
                .map(|m| {
                    let pos = projection.project(&self.viewport, m.lat, m.lon);
                    (m, pos.distance(pointer))
                })
                .filter(|(_, d)| *d <= self.marker_radius + 4.0)
                .min_by(|a, b| a.1.total_cmp(&b.1));

            if let Some((marker, _)) = hovered {
                response.on_hover_ui(|ui| popup_contents(ui, marker));
            }
        }
    }

    fn draw_graticule(&self, painter: &egui::Painter, rect: Rect, projection: &Projection) {
        let span_lat = (rect.height() / 2.0 / projection.px_per_deg_lat) as f64;
        let stroke = Stroke::new(0.5, Color32::from_gray(60));

        let lat_min = (self.viewport.center_lat - span_lat).floor() as i64;
        let lat_max = (self.viewport.center_lat + span_lat).ceil() as i64;
        for lat in lat_min..=lat_max {
            let y = projection.project(&self.viewport, lat as f64, 0.0).y;
            painter.line_segment([Pos2::new(rect.left(), y), Pos2::new(rect.right(), y)], stroke);
            painter.text(
                Pos2::new(rect.left() + 4.0, y),
                Align2::LEFT_CENTER,
                format!("{lat}°"),
                FontId::proportional(9.0),
                Color32::from_gray(110),
            );
        }

        let lon_min = (self.viewport.center_lon - self.viewport.span_lon).floor() as i64;
        let lon_max = (self.viewport.center_lon + self.viewport.span_lon).ceil() as i64;
        for lon in lon_min..=lon_max {
            let x = projection.project(&self.viewport, 0.0, lon as f64).x;
            painter.line_segment([Pos2::new(x, rect.top()), Pos2::new(x, rect.bottom())], stroke);
            painter.text(
                Pos2::new(x, rect.bottom() - 4.0),
                Align2::CENTER_BOTTOM,
                format!("{lon}°"),
                FontId::proportional(9.0),
                Color32::from_gray(110),
            );
        }
    }
}

fn popup_contents(ui: &mut Ui, marker: &MarkerDescriptor) {
    let popup = &marker.popup;
    ui.strong(&popup.name);
    ui.separator();
    egui::Grid::new("station_popup_grid").num_columns(2).show(ui, |ui| {
        ui.label("Temperatura:");
        ui.label(format!("{}°C", popup.temperature));
        ui.end_row();
        ui.label("Wilgotność:");
        ui.label(format!("{}%", popup.humidity));
        ui.end_row();
        ui.label("Ciśnienie:");
        ui.label(format!("{} hPa", popup.pressure));
        ui.end_row();
        ui.label("Wiatr:");
        ui.label(format!("{} m/s", popup.wind_speed));
        ui.end_row();
        ui.label("Opady:");
        ui.label(format!("{} mm", popup.precipitation));
        ui.end_row();
        ui.label("Pomiar:");
        ui.label(format!("{}:00", popup.hour));
        ui.end_row();
    });
}
