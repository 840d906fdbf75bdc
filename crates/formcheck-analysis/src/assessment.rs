use crate::feedback::{FULL_BODY_NOT_VISIBLE, SHOOTING_ARM_NOT_DETECTED};
use serde::Serialize;

/// Why a pose could not be graded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoseRejection {
    /// No pose, or fewer than 17 keypoint slots.
    IncompletePose,
    /// Right shoulder, elbow or wrist not detected.
    MissingShootingArm,
}

impl PoseRejection {
    pub fn message(self) -> &'static str {
        match self {
            PoseRejection::IncompletePose => FULL_BODY_NOT_VISIBLE,
            PoseRejection::MissingShootingArm => SHOOTING_ARM_NOT_DETECTED,
        }
    }
}

/// Raw measurements behind a graded frame. Absent values serialize as `null`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FormMetrics {
    pub elbow_angle: Option<f64>,
    pub knee_angle_avg: Option<f64>,
    pub shooting_arc: Option<f64>,
    pub wrist_above_elbow: bool,
}

/// Result of analyzing one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormAssessment {
    pub valid_pose: bool,
    pub feedback: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<FormMetrics>,
    #[serde(skip)]
    pub rejection: Option<PoseRejection>,
}

impl FormAssessment {
    pub fn rejected(reason: PoseRejection) -> Self {
        Self {
            valid_pose: false,
            feedback: vec![reason.message().to_string()],
            score: None,
            metrics: None,
            rejection: Some(reason),
        }
    }

    pub fn graded(score: u8, feedback: Vec<String>, metrics: FormMetrics) -> Self {
        Self {
            valid_pose: true,
            feedback,
            score: Some(score),
            metrics: Some(metrics),
            rejection: None,
        }
    }
}
