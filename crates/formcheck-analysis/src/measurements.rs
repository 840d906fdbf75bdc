//! Named measurements taken from a filtered pose.
//!
//! Callers must pass a pose with at least
//! [`COCO_KEYPOINT_COUNT`](formcheck_pose::COCO_KEYPOINT_COUNT) slots.

use crate::joint_angle;
use formcheck_base::Vec2;
use formcheck_pose::KeypointIndex::{self, *};

fn point(pose: &[Option<Vec2<f32>>], index: KeypointIndex) -> Option<Vec2<f32>> {
    pose[usize::from(index)]
}

fn angle_at(
    pose: &[Option<Vec2<f32>>],
    a: KeypointIndex,
    vertex: KeypointIndex,
    c: KeypointIndex,
) -> Option<f64> {
    joint_angle(point(pose, a), point(pose, vertex), point(pose, c))
}

/// Shoulder-elbow-wrist angle of the shooting (right) arm.
pub fn elbow_angle(pose: &[Option<Vec2<f32>>]) -> Option<f64> {
    angle_at(pose, RightShoulder, RightElbow, RightWrist)
}

/// Mean hip-knee-ankle angle over both legs, only when both are measurable.
///
/// A leg folded to exactly 0° counts as unmeasurable.
pub fn knee_bend(pose: &[Option<Vec2<f32>>]) -> Option<f64> {
    let leg = |hip, knee, ankle| angle_at(pose, hip, knee, ankle).filter(|&a| a != 0.0);
    let left = leg(LeftHip, LeftKnee, LeftAnkle)?;
    let right = leg(RightHip, RightKnee, RightAnkle)?;
    Some((left + right) / 2.0)
}

/// Release arc of the shot.
///
/// Measured on the same shoulder-elbow-wrist triplet as [`elbow_angle`] for
/// now. A better estimate needs a vertical or torso reference.
pub fn shooting_arc(pose: &[Option<Vec2<f32>>]) -> Option<f64> {
    angle_at(pose, RightShoulder, RightElbow, RightWrist)
}

/// Right wrist strictly higher in the frame than the right elbow.
///
/// `None` if either point is missing.
pub fn wrist_above_elbow(pose: &[Option<Vec2<f32>>]) -> Option<bool> {
    let wrist = point(pose, RightWrist)?;
    let elbow = point(pose, RightElbow)?;
    // image y grows downward
    Some(wrist.y < elbow.y)
}
