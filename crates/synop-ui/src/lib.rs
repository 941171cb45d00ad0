//! UI shell for the synop dashboard
//!
//! Theme and chrome only: the tab strip, the status controls and the
//! loading overlay. Everything inside the tabs is rendered by the view
//! crate; the shell just reports what the user clicked.

pub mod shell;
pub mod theme;

pub use shell::{loading_overlay, top_bar, ShellResponse};
pub use theme::{accent_color, apply_theme, Theme};
