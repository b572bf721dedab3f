//! Terminal user interface.
//!
//! Tab-based dashboard: measurement entry and analysis, sample patient
//! history, and static educational content.

pub mod app;
pub mod styles;
pub mod ui;

pub use app::App;
