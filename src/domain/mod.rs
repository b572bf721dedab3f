//! Domain layer: Core types and the risk scoring function.

pub mod assessment;
pub mod measurement;
pub mod scoring;

pub use assessment::{RiskAssessment, RiskCategory};
pub use measurement::CardiacMeasurement;
pub use scoring::assess;
