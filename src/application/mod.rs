//! Application layer: Use cases orchestrating the domain.

pub mod assessment;
pub mod history;

pub use assessment::AssessmentService;
pub use history::{sample_history, HistoryEntry};
