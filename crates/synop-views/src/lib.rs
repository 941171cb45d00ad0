//! Presentation layer for the synop dashboard
//!
//! Split the way the rendering pipeline is split: `adapters` holds the pure
//! projections from store state to render payloads (unit-testable, no UI),
//! the `*_view` modules hold the egui panels that draw those payloads, and
//! `export` serializes the table view for download.

pub mod adapters;
pub mod chart_view;
pub mod export;
pub mod map_view;
pub mod stats_panel;
pub mod table_view;

pub use adapters::{
    chart::{project_charts, ChartData, ChartSeries, SeriesKind},
    map::{project_markers, MarkerDescriptor, PopupInfo},
    table::{project_rows, TableRow},
    TempBucket,
};
pub use chart_view::ChartView;
pub use map_view::MapView;
pub use table_view::TableAction;
