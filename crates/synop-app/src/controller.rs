//! View controller
//!
//! Owns the store, the view state and the render panels, and translates
//! every UI event into the matching store mutation plus re-render. Each
//! handler runs to completion on the UI thread, so a mutation and its
//! re-render are atomic with respect to other events; the only background
//! work is the latency sleep of the simulated refresh.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use egui::Context;
use parking_lot::RwLock;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, warn};

use synop_core::{
    compute_stats, AppSettings, DashboardStats, RefreshSchedule, StationReading, StationStore,
    Tab, ViewState,
};
use synop_views::{
    adapters::chart::project_charts, adapters::map::project_markers,
    adapters::table::project_rows, chart_view::ChartView, export, map_view::MapView, stats_panel,
    table_view, TableAction,
};

pub struct DashboardController {
    store: Arc<RwLock<StationStore>>,
    view_state: ViewState,
    settings: AppSettings,
    schedule: RefreshSchedule,
    stats: DashboardStats,

    map: MapView,
    charts: ChartView,
    last_update: Option<String>,

    /// True while the simulated refresh sleeps its latency.
    refresh_pending: Arc<AtomicBool>,
    /// Set by the refresh task once the store changed under us.
    data_dirty: Arc<AtomicBool>,

    egui_ctx: Context,
    runtime: tokio::runtime::Handle,
}

impl DashboardController {
    pub fn new(
        readings: Vec<StationReading>,
        settings: AppSettings,
        egui_ctx: Context,
        runtime: tokio::runtime::Handle,
    ) -> Self {
        let store = StationStore::new(readings);
        let stats = compute_stats(store.all());

        let mut map = MapView::new(&settings.map);
        map.set_markers(project_markers(store.all()));

        let view_state = ViewState::default();
        let mut charts = ChartView::new();
        charts.update(project_charts(store.all(), &view_state.chart_selection));

        let schedule = RefreshSchedule::new(settings.refresh.interval, Instant::now());
        info!(
            interval_secs = schedule.interval().as_secs(),
            stations = stats.count,
            "controller ready"
        );

        Self {
            store: Arc::new(RwLock::new(store)),
            view_state,
            settings,
            schedule,
            stats,
            map,
            charts,
            last_update: None,
            refresh_pending: Arc::new(AtomicBool::new(false)),
            data_dirty: Arc::new(AtomicBool::new(false)),
            egui_ctx,
            runtime,
        }
    }

    pub fn active_tab(&self) -> Tab {
        self.view_state.active_tab
    }

    pub fn stats(&self) -> &DashboardStats {
        &self.stats
    }

    /// One frame of the dashboard: tick the schedule, pick up finished
    /// refreshes, draw the shell and the active tab.
    pub fn update(&mut self, ctx: &Context) {
        if self.schedule.tick_at(Instant::now()) {
            self.request_refresh();
        }

        if self.data_dirty.swap(false, Ordering::SeqCst) {
            self.after_data_change();
            self.last_update = Some(chrono::Local::now().format("%H:%M").to_string());
        }

        let shell = synop_ui::top_bar(
            ctx,
            self.view_state.active_tab,
            self.last_update.as_deref(),
            self.refresh_pending.load(Ordering::SeqCst),
        );
        if let Some(tab) = shell.selected_tab {
            self.switch_tab(tab);
        }
        if shell.refresh_clicked {
            self.request_refresh();
        }
        if shell.export_clicked {
            self.export_current_view();
        }

        egui::CentralPanel::default().show(ctx, |ui| match self.view_state.active_tab {
            Tab::Dashboard => self.dashboard_tab(ui),
            Tab::Table => self.table_tab(ui),
            Tab::Charts => self.charts_tab(ui),
        });

        if self.refresh_pending.load(Ordering::SeqCst) {
            synop_ui::loading_overlay(ctx);
        }
    }

    /// Tab transition with entry side effects. The effects are idempotent,
    /// so a same-tab re-entry is a harmless no-op.
    pub fn switch_tab(&mut self, tab: Tab) {
        if self.view_state.switch_to(tab) {
            debug!(?tab, "tab switched");
        }
        match tab {
            // The map misrenders against stale bounds after being hidden.
            Tab::Dashboard => self.map.invalidate_size(),
            // Charts likewise come back from a hidden container stale.
            Tab::Charts => self.reproject_charts(),
            Tab::Table => {}
        }
    }

    /// Kick off the simulated refresh: sleep the configured latency on the
    /// runtime, then perturb the store and flag the change. At most one
    /// refresh is in flight at a time.
    pub fn request_refresh(&mut self) {
        if self.refresh_pending.swap(true, Ordering::SeqCst) {
            return;
        }
        info!("refresh requested");

        let store = self.store.clone();
        let pending = self.refresh_pending.clone();
        let dirty = self.data_dirty.clone();
        let ctx = self.egui_ctx.clone();
        let latency = self.settings.refresh.simulated_latency;

        self.runtime.spawn(async move {
            tokio::time::sleep(latency).await;
            let mut rng = StdRng::from_entropy();
            store.write().refresh(&mut rng);
            dirty.store(true, Ordering::SeqCst);
            pending.store(false, Ordering::SeqCst);
            ctx.request_repaint();
        });
    }

    /// Re-read the store into every projection after the dataset changed.
    fn after_data_change(&mut self) {
        let store = self.store.read();
        self.stats = compute_stats(store.all());
        self.map.set_markers(project_markers(store.all()));
        self.charts
            .update(project_charts(store.all(), &self.view_state.chart_selection));
    }

    fn reproject_charts(&mut self) {
        let data = {
            let store = self.store.read();
            project_charts(store.all(), &self.view_state.chart_selection)
        };
        self.charts.update(data);
    }

    pub fn set_filter(&mut self, text: &str) {
        self.store.write().set_filter(text);
    }

    pub fn toggle_sort(&mut self, field: &'static str) {
        self.store.write().toggle_sort(field);
    }

    pub fn toggle_chart_station(&mut self, name: &str) {
        self.view_state.toggle_chart_station(name);
        self.reproject_charts();
    }

    pub fn clear_chart_selection(&mut self) {
        self.view_state.clear_chart_selection();
        self.reproject_charts();
    }

    /// Export the filtered+sorted view. Reads state, never mutates it; a
    /// failed save degrades to a log line, not a dialog.
    fn export_current_view(&self) {
        let bytes_written = {
            let store = self.store.read();
            let view = store.filtered();
            export::save_with_dialog(&view, chrono::Local::now().date_naive())
        };
        match bytes_written {
            Ok(true) => {}
            Ok(false) => debug!("export cancelled"),
            Err(e) => warn!("export failed: {e}"),
        }
    }

    fn dashboard_tab(&mut self, ui: &mut egui::Ui) {
        if self.settings.show_stats_strip {
            stats_panel::ui(ui, &self.stats);
            ui.add_space(6.0);
        }
        self.map.ui(ui);
    }

    fn table_tab(&mut self, ui: &mut egui::Ui) {
        let mut search = self.store.read().filter_text().to_string();
        ui.horizontal(|ui| {
            ui.label("Szukaj:");
            let response = ui.add(
                egui::TextEdit::singleline(&mut search).hint_text("nazwa stacji"),
            );
            if response.changed() {
                self.set_filter(&search);
            }
        });
        ui.add_space(4.0);

        let (rows, sort) = {
            let store = self.store.read();
            (project_rows(&store.filtered()), store.sort().cloned())
        };
        if let Some(TableAction::SortBy(field)) = table_view::ui(ui, &rows, sort.as_ref()) {
            self.toggle_sort(field);
        }
    }

    fn charts_tab(&mut self, ui: &mut egui::Ui) {
        let names: Vec<String> = {
            let store = self.store.read();
            store.all().iter().map(|r| r.name.clone()).collect()
        };

        ui.horizontal_wrapped(|ui| {
            ui.label("Stacje:");
            let mut toggled = None;
            for name in &names {
                let selected = self.view_state.chart_selection.contains(name);
                if ui.selectable_label(selected, name).clicked() {
                    toggled = Some(name.clone());
                }
            }
            if let Some(name) = toggled {
                self.toggle_chart_station(&name);
            }
            if !self.view_state.chart_selection.is_empty() && ui.button("Wszystkie").clicked() {
                self.clear_chart_selection();
            }
        });
        ui.add_space(4.0);

        self.charts.ui(ui);
    }
}

impl Drop for DashboardController {
    fn drop(&mut self) {
        // Session teardown is the only way the periodic refresh stops.
        self.schedule.cancel();
        info!("refresh schedule cancelled");
    }
}
