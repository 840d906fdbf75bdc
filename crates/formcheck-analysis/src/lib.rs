//! Shooting-form scoring for a single frame.
//!
//! Input is a confidence-filtered COCO pose (17 optional points); output is
//! a [`FormAssessment`] with a 0-100 score, ordered feedback and the raw
//! measurements behind them. Everything here is pure: no I/O, no state kept
//! between frames.

pub mod analyzer;
pub mod angle;
pub mod assessment;
pub mod feedback;
pub mod measurements;
pub mod standards;

pub use analyzer::FormAnalyzer;
pub use angle::joint_angle;
pub use assessment::{FormAssessment, FormMetrics, PoseRejection};
pub use feedback::FormCheck;
pub use standards::{FormStandards, IdealRange, RangeVerdict};
