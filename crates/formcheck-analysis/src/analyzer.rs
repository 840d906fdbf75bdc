use crate::feedback::{self, FormCheck};
use crate::measurements;
use crate::{FormAssessment, FormMetrics, FormStandards, PoseRejection, RangeVerdict};
use formcheck_base::{log, Vec2};
use formcheck_pose::{KeypointIndex, COCO_KEYPOINT_COUNT};

/// Outcome of one graded check.
struct CheckOutcome {
    passed: bool,
    feedback: Option<String>,
}

impl CheckOutcome {
    fn graded(passed: bool, message: String) -> Self {
        Self {
            passed,
            feedback: Some(message),
        }
    }

    fn unmeasured(check: FormCheck) -> Self {
        Self {
            passed: false,
            feedback: feedback::missing_measurement(check),
        }
    }
}

/// Grades single frames against a fixed set of [`FormStandards`].
///
/// Holds no per-frame state, so one analyzer can serve concurrent requests.
#[derive(Debug, Clone, Default)]
pub struct FormAnalyzer {
    standards: FormStandards,
}

impl FormAnalyzer {
    pub fn new(standards: FormStandards) -> Self {
        Self { standards }
    }

    pub fn standards(&self) -> &FormStandards {
        &self.standards
    }

    /// Grade one confidence-filtered pose.
    ///
    /// `None` (nobody detected) and poses with fewer than 17 slots are
    /// rejected as incomplete; a pose without the right shoulder, elbow and
    /// wrist is rejected as missing the shooting arm. Rejections are ordinary
    /// results with `valid_pose == false`, never errors.
    pub fn analyze(&self, pose: Option<&[Option<Vec2<f32>>]>) -> FormAssessment {
        let pose = match pose {
            Some(pose) if pose.len() >= COCO_KEYPOINT_COUNT => pose,
            _ => return FormAssessment::rejected(PoseRejection::IncompletePose),
        };

        let arm = [
            KeypointIndex::RightShoulder,
            KeypointIndex::RightElbow,
            KeypointIndex::RightWrist,
        ];
        if arm.iter().any(|&i| pose[usize::from(i)].is_none()) {
            return FormAssessment::rejected(PoseRejection::MissingShootingArm);
        }

        let elbow_angle = measurements::elbow_angle(pose);
        let knee_angle_avg = measurements::knee_bend(pose);
        let shooting_arc = measurements::shooting_arc(pose);
        // both points were checked above
        let wrist_above_elbow = measurements::wrist_above_elbow(pose).unwrap_or(false);

        let checks = [
            self.check_elbow(elbow_angle),
            self.check_knees(knee_angle_avg),
            self.check_arc(shooting_arc),
            CheckOutcome::graded(wrist_above_elbow, feedback::wrist_feedback(wrist_above_elbow)),
        ];

        let passed = checks.iter().filter(|c| c.passed).count();
        let score = score_percent(passed, checks.len());
        let feedback = checks.into_iter().filter_map(|c| c.feedback).collect();

        log::debug!(
            "graded pose: {}/4 checks passed, score {} (elbow {:?}, knees {:?})",
            passed,
            score,
            elbow_angle,
            knee_angle_avg
        );

        FormAssessment::graded(
            score,
            feedback,
            FormMetrics {
                elbow_angle,
                knee_angle_avg,
                shooting_arc,
                wrist_above_elbow,
            },
        )
    }

    fn check_elbow(&self, angle: Option<f64>) -> CheckOutcome {
        match graded_angle(angle) {
            Some(angle) => {
                let verdict = self.standards.elbow_angle.classify(angle);
                CheckOutcome::graded(
                    verdict == RangeVerdict::Within,
                    feedback::elbow_feedback(angle, verdict),
                )
            }
            None => CheckOutcome::unmeasured(FormCheck::ElbowAngle),
        }
    }

    fn check_knees(&self, average: Option<f64>) -> CheckOutcome {
        match average {
            Some(average) => {
                let verdict = self.standards.knee_bend.classify(average);
                CheckOutcome::graded(
                    verdict == RangeVerdict::Within,
                    feedback::knee_feedback(verdict),
                )
            }
            None => CheckOutcome::unmeasured(FormCheck::KneeBend),
        }
    }

    fn check_arc(&self, arc: Option<f64>) -> CheckOutcome {
        match graded_angle(arc) {
            Some(arc) => {
                let verdict = self.standards.shooting_arc.classify(arc);
                CheckOutcome::graded(
                    verdict == RangeVerdict::Within,
                    feedback::arc_feedback(verdict),
                )
            }
            None => CheckOutcome::unmeasured(FormCheck::ShootingArc),
        }
    }
}

/// A 0° angle is skipped exactly like a missing one.
fn graded_angle(angle: Option<f64>) -> Option<f64> {
    angle.filter(|&a| a != 0.0)
}

/// `passed / total` as a rounded percentage.
fn score_percent(passed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    ((passed as f64 / total as f64) * 100.0).round() as u8
}
