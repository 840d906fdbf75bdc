use crate::RangeVerdict;

pub const FULL_BODY_NOT_VISIBLE: &str =
    "Cannot detect full body pose. Please ensure your full body is visible.";
pub const SHOOTING_ARM_NOT_DETECTED: &str =
    "Cannot detect shooting arm properly. Please adjust position.";

/// The four graded aspects of a shot, in the order feedback is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormCheck {
    ElbowAngle,
    KneeBend,
    ShootingArc,
    WristPosition,
}

/// What to tell the player when a check's measurement could not be taken.
///
/// Currently nothing: an unmeasurable check is skipped without feedback and
/// without a point.
pub fn missing_measurement(_check: FormCheck) -> Option<String> {
    None
}

pub fn elbow_feedback(angle: f64, verdict: RangeVerdict) -> String {
    match verdict {
        RangeVerdict::Within => "Good elbow alignment".to_string(),
        RangeVerdict::Below => format!(
            "Elbow angle too small ({:.1}°). Try to create an L shape with your arm.",
            angle
        ),
        RangeVerdict::Above => format!(
            "Elbow angle too wide ({:.1}°). Bring your forearm closer to vertical.",
            angle
        ),
    }
}

pub fn knee_feedback(verdict: RangeVerdict) -> String {
    match verdict {
        RangeVerdict::Within => "Good knee bend",
        RangeVerdict::Above => "Bend your knees more for better balance and power",
        RangeVerdict::Below => {
            "Your knees are bent too much. Straighten slightly for better balance."
        }
    }
    .to_string()
}

pub fn arc_feedback(verdict: RangeVerdict) -> String {
    match verdict {
        RangeVerdict::Within => "Good shooting arc",
        RangeVerdict::Below => "Increase your shooting arc for better trajectory",
        RangeVerdict::Above => "Lower your shooting arc slightly for more control",
    }
    .to_string()
}

pub fn wrist_feedback(wrist_above_elbow: bool) -> String {
    if wrist_above_elbow {
        "Good wrist position above elbow".to_string()
    } else {
        "Raise your shooting hand higher, wrist should be above elbow".to_string()
    }
}
