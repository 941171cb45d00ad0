//! Main application entry point

use anyhow::Result;
use eframe::egui;
use tracing::{error, info};

use synop_core::AppSettings;
use synop_data::{EmbeddedSource, ReadingSource};
use synop_ui::Theme;

mod controller;

use controller::DashboardController;

struct SynopApp {
    controller: DashboardController,

    /// Keeps the refresh tasks alive for the lifetime of the window.
    _runtime: tokio::runtime::Runtime,
}

impl SynopApp {
    fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings = AppSettings::default();

        synop_ui::apply_theme(&cc.egui_ctx, &Theme::default());
        cc.egui_ctx
            .set_pixels_per_point(settings.theme.scale_factor);

        let runtime = tokio::runtime::Runtime::new().unwrap();

        // A broken seed degrades to an empty dashboard, never a crash: the
        // shell, table and export stay usable.
        let readings = match EmbeddedSource::new().load() {
            Ok(readings) => readings,
            Err(e) => {
                error!("failed to load seed dataset: {e}");
                Vec::new()
            }
        };

        let controller = DashboardController::new(
            readings,
            settings,
            cc.egui_ctx.clone(),
            runtime.handle().clone(),
        );

        Self {
            controller,
            _runtime: runtime,
        }
    }
}

impl eframe::App for SynopApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.controller.update(ctx);
    }
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting synop dashboard");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 600.0]),
        default_theme: eframe::Theme::Dark,
        persist_window: false,
        ..Default::default()
    };

    eframe::run_native(
        "Monitor pogodowy IMGW",
        options,
        Box::new(|cc| Box::new(SynopApp::new(cc))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run app: {}", e))?;

    Ok(())
}
