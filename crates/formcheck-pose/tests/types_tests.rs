use formcheck_base::{Rect, Vec2};
use formcheck_pose::{Keypoint, KeypointIndex, LetterboxInfo, PoseDetection, COCO_KEYPOINT_COUNT};

fn detection_with(confidences: [f32; COCO_KEYPOINT_COUNT]) -> PoseDetection {
    PoseDetection {
        bbox: Rect::new(Vec2::new(0.0, 0.0), Vec2::new(100.0, 200.0)),
        confidence: 0.9,
        keypoints: std::array::from_fn(|i| Keypoint {
            position: Vec2::new(i as f32, 2.0 * i as f32),
            confidence: confidences[i],
        }),
    }
}

#[test]
fn test_coco_keypoint_count() {
    assert_eq!(COCO_KEYPOINT_COUNT, 17);
    assert_eq!(KeypointIndex::ALL.len(), COCO_KEYPOINT_COUNT);
}

#[test]
fn test_keypoint_index_values_follow_coco_order() {
    for (i, index) in KeypointIndex::ALL.iter().enumerate() {
        assert_eq!(usize::from(*index), i);
    }
    assert_eq!(usize::from(KeypointIndex::RightShoulder), 6);
    assert_eq!(usize::from(KeypointIndex::RightElbow), 8);
    assert_eq!(usize::from(KeypointIndex::RightWrist), 10);
    assert_eq!(usize::from(KeypointIndex::RightAnkle), 16);
}

#[test]
fn test_keypoint_index_try_from_valid() {
    assert_eq!(KeypointIndex::try_from(0).unwrap(), KeypointIndex::Nose);
    assert_eq!(KeypointIndex::try_from(13).unwrap(), KeypointIndex::LeftKnee);
    assert_eq!(KeypointIndex::try_from(16).unwrap(), KeypointIndex::RightAnkle);
}

#[test]
fn test_keypoint_index_try_from_invalid() {
    let err = KeypointIndex::try_from(17).unwrap_err();
    assert!(err.contains("17"));
    assert!(KeypointIndex::try_from(usize::MAX).is_err());
}

#[test]
fn test_keypoint_index_names() {
    assert_eq!(KeypointIndex::Nose.name(), "nose");
    assert_eq!(KeypointIndex::RightWrist.name(), "right_wrist");
}

#[test]
fn test_pose_detection_keypoint_accessor() {
    let detection = detection_with([1.0; COCO_KEYPOINT_COUNT]);
    let elbow = detection.keypoint(KeypointIndex::RightElbow);
    assert_eq!(elbow.position, Vec2::new(8.0, 16.0));
}

#[test]
fn test_pose_detection_filtered_nulls_low_confidence() {
    let mut confidences = [0.9; COCO_KEYPOINT_COUNT];
    confidences[3] = 0.1;
    confidences[14] = 0.49;
    confidences[15] = 0.5;
    let pose = detection_with(confidences).filtered(0.5);

    assert_eq!(pose.len(), COCO_KEYPOINT_COUNT);
    assert_eq!(pose[3], None);
    assert_eq!(pose[14], None);
    assert_eq!(pose[15], Some(Vec2::new(15.0, 30.0)));
    assert_eq!(pose.iter().filter(|p| p.is_some()).count(), 15);
}

#[test]
fn test_letterbox_unletterbox() {
    let letterbox = LetterboxInfo {
        scale: 0.5,
        pad_x: 0.0,
        pad_y: 80.0,
    };
    assert_eq!(letterbox.unletterbox(Vec2::new(100.0, 180.0)), Vec2::new(200.0, 200.0));
}
