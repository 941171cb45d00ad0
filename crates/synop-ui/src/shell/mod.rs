//! Top bar and overlay chrome

use egui::{Align2, Context, TopBottomPanel};
use synop_core::Tab;

/// What the user did in the top bar this frame.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ShellResponse {
    pub selected_tab: Option<Tab>,
    pub refresh_clicked: bool,
    pub export_clicked: bool,
}

/// Render the tab strip plus the status controls. The shell reports clicks;
/// the controller decides what they mean.
pub fn top_bar(
    ctx: &Context,
    active_tab: Tab,
    last_update: Option<&str>,
    refreshing: bool,
) -> ShellResponse {
    let mut response = ShellResponse::default();

    TopBottomPanel::top("shell_top_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.strong("Monitor pogodowy IMGW");
            ui.separator();

            for tab in Tab::ALL {
                if ui.selectable_label(tab == active_tab, tab.label()).clicked() {
                    response.selected_tab = Some(tab);
                }
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Eksport CSV").clicked() {
                    response.export_clicked = true;
                }

                let refresh_button =
                    ui.add_enabled(!refreshing, egui::Button::new("Odśwież"));
                if refresh_button.clicked() {
                    response.refresh_clicked = true;
                }

                if let Some(time) = last_update {
                    ui.weak(format!("Aktualizacja: {time}"));
                }
            });
        });
    });

    response
}

/// Modal-ish overlay shown while the simulated refresh is in flight.
pub fn loading_overlay(ctx: &Context) {
    egui::Window::new("loading_overlay")
        .title_bar(false)
        .resizable(false)
        .collapsible(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Odświeżanie danych pogodowych");
            });
        });
}
