use crate::Pose;
use formcheck_base::Vec2;

/// Keypoints scored below this are treated as not detected.
pub const CONFIDENCE_THRESHOLD: f32 = 0.5;

/// Null out every point whose confidence is strictly below `threshold`.
///
/// `confidences` runs parallel to `points`. The output always has one slot
/// per input point; a point without a matching confidence, or with a NaN
/// confidence, counts as not confident. Points that pass keep their exact
/// coordinates, so filtering an already-filtered pose again changes nothing.
pub fn filter_by_confidence(
    points: &[Option<Vec2<f32>>],
    confidences: &[f32],
    threshold: f32,
) -> Pose {
    points
        .iter()
        .enumerate()
        .map(|(i, point)| {
            // NaN fails `>=`, so an unscored point is dropped rather than kept
            let confident = confidences.get(i).is_some_and(|&c| c >= threshold);
            if confident { *point } else { None }
        })
        .collect()
}
