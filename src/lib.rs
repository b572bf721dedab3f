//! # CardioScan
//!
//! LVNC cardiac risk assessment terminal dashboard.
//!
//! This crate provides:
//! - A deterministic threshold-based risk scorer for Left Ventricular
//!   Non-Compaction Cardiomyopathy (LVNC)
//! - A terminal UI for manual measurement entry and result display
//! - Educational reference content and illustrative sample charts
//!
//! ## Architecture
//!
//! - `domain`: Core types (CardiacMeasurement, RiskAssessment) and the scoring function
//! - `application`: Use cases orchestrating the domain (assessment, sample history)
//! - `tui`: Terminal user interface

pub mod application;
pub mod domain;
pub mod tui;

pub use domain::{CardiacMeasurement, RiskAssessment, RiskCategory};

/// Result type for CardioScan operations
pub type Result<T> = std::result::Result<T, CardioScanError>;

/// Main error type for CardioScan
#[derive(Debug, thiserror::Error)]
pub enum CardioScanError {
    #[error("Invalid measurement: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
