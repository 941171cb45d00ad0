//! Data collaborators for the synop dashboard
//!
//! Data acquisition is an external concern: the store is seeded exactly once
//! from a [`ReadingSource`] at startup, and nothing else in the application
//! knows where readings come from. The only source shipped here is an
//! embedded snapshot of the IMGW synop feed.

pub mod sources;

pub use sources::{embedded::EmbeddedSource, ReadingSource, SourceError};
