//! View state and application settings

use std::collections::BTreeSet;
use std::time::Duration;

/// Dashboard tabs. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Dashboard,
    Table,
    Charts,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Dashboard, Tab::Table, Tab::Charts];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Dashboard => "Pulpit",
            Tab::Table => "Tabela",
            Tab::Charts => "Wykresy",
        }
    }
}

/// Session-only view state. Recomputed/mutated synchronously from the UI
/// thread, never persisted.
#[derive(Debug, Clone)]
pub struct ViewState {
    pub active_tab: Tab,

    /// Station names narrowing the chart display; empty means show all.
    pub chart_selection: BTreeSet<String>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            active_tab: Tab::Dashboard,
            chart_selection: BTreeSet::new(),
        }
    }
}

impl ViewState {
    /// Activate `tab`. Returns whether the active tab actually changed;
    /// re-selecting the current tab is a no-op re-entry.
    pub fn switch_to(&mut self, tab: Tab) -> bool {
        let changed = self.active_tab != tab;
        self.active_tab = tab;
        changed
    }

    pub fn toggle_chart_station(&mut self, name: &str) {
        if !self.chart_selection.remove(name) {
            self.chart_selection.insert(name.to_string());
        }
    }

    pub fn clear_chart_selection(&mut self) {
        self.chart_selection.clear();
    }
}

/// Application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Simulated-feed refresh behavior
    pub refresh: RefreshSettings,

    /// Station map viewport defaults
    pub map: MapSettings,

    /// Theme settings
    pub theme: ThemeSettings,

    /// Whether the stat tiles strip is shown on the dashboard
    pub show_stats_strip: bool,
}

/// Refresh settings
#[derive(Debug, Clone)]
pub struct RefreshSettings {
    /// Interval of the periodic refresh
    pub interval: Duration,

    /// Artificial delay modeling network latency
    pub simulated_latency: Duration,
}

/// Map settings
#[derive(Debug, Clone)]
pub struct MapSettings {
    pub center_lat: f64,
    pub center_lon: f64,
    /// Half-extent of the initial viewport, in degrees of longitude
    pub span: f64,
}

/// Theme settings
#[derive(Debug, Clone)]
pub struct ThemeSettings {
    /// UI scale factor
    pub scale_factor: f32,

    /// Whether to use dark mode
    pub dark_mode: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            refresh: RefreshSettings {
                interval: Duration::from_secs(60 * 60),
                simulated_latency: Duration::from_secs(1),
            },
            map: MapSettings {
                center_lat: 52.0,
                center_lon: 19.0,
                span: 6.0,
            },
            theme: ThemeSettings {
                scale_factor: 1.0,
                dark_mode: true,
            },
            show_stats_strip: true,
        }
    }
}
