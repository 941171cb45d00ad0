//! Core state and data-presentation logic for the synop dashboard
//!
//! This crate owns the station dataset and everything derived from it:
//! the store with its filtered/sorted view, aggregate statistics, the
//! view state machine and the refresh schedule. It has no UI dependencies
//! so all of it is unit-testable without a rendering environment.

pub mod reading;
pub mod schedule;
pub mod state;
pub mod stats;
pub mod store;

// Re-export commonly used types
pub use reading::{columns, StationReading};
pub use schedule::RefreshSchedule;
pub use state::{AppSettings, MapSettings, RefreshSettings, Tab, ThemeSettings, ViewState};
pub use stats::{compute_stats, DashboardStats};
pub use store::{SortDirection, SortSpec, StationStore};
