use formcheck_analysis::{FormAssessment, FormMetrics, PoseRejection};
use serde_json::{json, Value};

#[test]
fn test_rejected_serializes_without_score_or_metrics() {
    let value = serde_json::to_value(FormAssessment::rejected(PoseRejection::IncompletePose)).unwrap();
    assert_eq!(
        value,
        json!({
            "valid_pose": false,
            "feedback": ["Cannot detect full body pose. Please ensure your full body is visible."],
        })
    );
}

#[test]
fn test_rejection_reason_is_not_serialized() {
    let value =
        serde_json::to_value(FormAssessment::rejected(PoseRejection::MissingShootingArm)).unwrap();
    let object = value.as_object().unwrap();
    assert!(!object.contains_key("rejection"));
    assert_eq!(object.len(), 2);
}

#[test]
fn test_graded_serializes_metrics_with_nulls() {
    let assessment = FormAssessment::graded(
        50,
        vec!["Good elbow alignment".to_string()],
        FormMetrics {
            elbow_angle: Some(90.0),
            knee_angle_avg: None,
            shooting_arc: Some(90.0),
            wrist_above_elbow: true,
        },
    );
    let value = serde_json::to_value(&assessment).unwrap();

    assert_eq!(value["valid_pose"], Value::Bool(true));
    assert_eq!(value["score"], json!(50));
    assert_eq!(value["feedback"], json!(["Good elbow alignment"]));
    assert_eq!(
        value["metrics"],
        json!({
            "elbow_angle": 90.0,
            "knee_angle_avg": null,
            "shooting_arc": 90.0,
            "wrist_above_elbow": true,
        })
    );
}

#[test]
fn test_rejection_messages() {
    assert!(PoseRejection::IncompletePose.message().contains("full body"));
    assert!(PoseRejection::MissingShootingArm.message().contains("shooting arm"));
}
