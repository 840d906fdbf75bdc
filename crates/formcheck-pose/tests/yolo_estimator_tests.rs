use formcheck_base::{Tensor, Vec2};
use formcheck_pose::yolo::{OUTPUT_ROWS, TARGET_SIZE};
use formcheck_pose::{KeypointIndex, KeypointProvider, PoseError, Session, YoloPoseProvider};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Session that records the input shape it saw and replays a fixed output.
struct FakeSession {
    inputs: Vec<String>,
    outputs: Vec<String>,
    output: Tensor<f32>,
    seen_shapes: Arc<Mutex<Vec<Vec<usize>>>>,
}

impl FakeSession {
    fn new(output: Tensor<f32>) -> Self {
        Self {
            inputs: vec!["images".to_string()],
            outputs: vec!["output0".to_string()],
            output,
            seen_shapes: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl Session for FakeSession {
    fn run(
        &mut self,
        inputs: &[(&str, Tensor<f32>)],
    ) -> Result<HashMap<String, Tensor<f32>>, PoseError> {
        for (name, tensor) in inputs {
            assert_eq!(*name, "images");
            self.seen_shapes.lock().unwrap().push(tensor.shape.clone());
        }
        let mut map = HashMap::new();
        for name in &self.outputs {
            map.insert(name.clone(), self.output.clone());
        }
        Ok(map)
    }

    fn input_names(&self) -> &[String] {
        &self.inputs
    }

    fn output_names(&self) -> &[String] {
        &self.outputs
    }
}

/// Two people in a 640x640 frame; the right one is more confident.
fn two_people() -> Tensor<f32> {
    let columns = [(150.0, 0.55, 0.3), (450.0, 0.92, 0.8)];
    let n = columns.len();
    let mut data = vec![0.0; OUTPUT_ROWS * n];
    for (col, (cx, conf, kp_conf)) in columns.iter().enumerate() {
        let mut values = vec![*cx, 320.0, 100.0, 400.0, *conf];
        for k in 0..17 {
            values.extend_from_slice(&[*cx, 150.0 + k as f32 * 20.0, *kp_conf]);
        }
        for (row, value) in values.iter().enumerate() {
            data[row * n + col] = *value;
        }
    }
    Tensor::new(vec![1, OUTPUT_ROWS, n], data).unwrap()
}

fn frame() -> Tensor<u8> {
    Tensor::new(vec![640, 640, 3], vec![90; 640 * 640 * 3]).unwrap()
}

#[test]
fn test_estimate_returns_all_people_sorted() {
    let mut provider = YoloPoseProvider::new(Box::new(FakeSession::new(two_people())));
    let people = provider.estimate(&frame()).unwrap();

    assert_eq!(people.len(), 2);
    assert_eq!(people[0].confidence, 0.92);
    assert_eq!(people[1].confidence, 0.55);
}

#[test]
fn test_estimate_feeds_letterboxed_input() {
    let session = FakeSession::new(two_people());
    let seen = session.seen_shapes.clone();
    let mut provider = YoloPoseProvider::new(Box::new(session));

    provider.estimate(&frame()).unwrap();
    assert_eq!(*seen.lock().unwrap(), vec![vec![1, 3, TARGET_SIZE, TARGET_SIZE]]);
}

#[test]
fn test_detect_picks_most_confident_person() {
    let mut provider = YoloPoseProvider::new(Box::new(FakeSession::new(two_people())));
    let person = provider.detect(&frame()).unwrap().expect("person expected");

    assert_eq!(person.confidence, 0.92);
    let elbow = person.keypoint(KeypointIndex::RightElbow);
    assert_eq!(elbow.position, Vec2::new(450.0, 310.0));
}

#[test]
fn test_detect_empty_frame_is_none() {
    let empty = Tensor::new(vec![1, OUTPUT_ROWS, 0], vec![]).unwrap();
    let mut provider = YoloPoseProvider::new(Box::new(FakeSession::new(empty)));
    assert!(provider.detect(&frame()).unwrap().is_none());
}

#[test]
fn test_conf_threshold_applies() {
    let mut provider =
        YoloPoseProvider::new(Box::new(FakeSession::new(two_people()))).with_conf_threshold(0.6);
    assert_eq!(provider.conf_threshold(), 0.6);
    assert_eq!(provider.estimate(&frame()).unwrap().len(), 1);
}

#[test]
fn test_builder_defaults_and_name() {
    let provider = YoloPoseProvider::new(Box::new(FakeSession::new(two_people())));
    assert_eq!(provider.conf_threshold(), 0.25);
    assert_eq!(provider.iou_threshold(), 0.45);
    assert_eq!(provider.name(), "YOLOv8s-pose");

    let renamed = provider.with_name("yolo11n-pose").with_iou_threshold(0.7);
    assert_eq!(renamed.name(), "yolo11n-pose");
    assert_eq!(renamed.iou_threshold(), 0.7);
}

#[test]
fn test_session_without_outputs_is_backend_error() {
    let mut session = FakeSession::new(two_people());
    session.outputs.clear();
    let mut provider = YoloPoseProvider::new(Box::new(session));
    assert!(matches!(provider.estimate(&frame()), Err(PoseError::Backend(_))));
}

#[test]
fn test_session_without_inputs_is_backend_error() {
    let mut session = FakeSession::new(two_people());
    session.inputs.clear();
    let mut provider = YoloPoseProvider::new(Box::new(session));
    assert!(matches!(provider.detect(&frame()), Err(PoseError::Backend(_))));
}

#[test]
fn test_bad_frame_shape_is_rejected_before_inference() {
    let session = FakeSession::new(two_people());
    let seen = session.seen_shapes.clone();
    let mut provider = YoloPoseProvider::new(Box::new(session));

    let gray = Tensor::new(vec![8, 8, 1], vec![0u8; 64]).unwrap();
    assert!(matches!(provider.detect(&gray), Err(PoseError::ShapeMismatch { .. })));
    assert!(seen.lock().unwrap().is_empty());
}
