use crate::{KeypointProvider, PoseDetection, PoseError, Session};
use formcheck_base::{log, Tensor};

use super::postprocess::postprocess;
use super::preprocess::preprocess;

/// YOLO pose estimation pipeline
///
/// Integrates preprocessing, model inference and post-processing into a
/// single `estimate()` call. Works with any [`Session`] that accepts a
/// `[1, 3, 640, 640]` input and produces a `[1, 56, N]` output.
pub struct YoloPoseProvider {
    session: Box<dyn Session>,
    name: String,
    conf_threshold: f32,
    iou_threshold: f32,
}

impl YoloPoseProvider {
    /// Wrap an already-loaded session with default thresholds
    /// (conf=0.25, iou=0.45).
    pub fn new(session: Box<dyn Session>) -> Self {
        Self {
            session,
            name: "YOLOv8s-pose".to_string(),
            conf_threshold: 0.25,
            iou_threshold: 0.45,
        }
    }

    /// Load an ONNX model file and wrap it.
    #[cfg(feature = "onnx")]
    pub fn load(path: &std::path::Path, device: crate::Device) -> Result<Self, PoseError> {
        let session = crate::backends::OnnxSession::load(path, device)?;
        Ok(Self::new(Box::new(session)))
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set person confidence threshold (builder pattern)
    pub fn with_conf_threshold(mut self, threshold: f32) -> Self {
        self.conf_threshold = threshold;
        self
    }

    /// Set IoU threshold for NMS (builder pattern)
    pub fn with_iou_threshold(mut self, threshold: f32) -> Self {
        self.iou_threshold = threshold;
        self
    }

    pub fn conf_threshold(&self) -> f32 {
        self.conf_threshold
    }

    pub fn iou_threshold(&self) -> f32 {
        self.iou_threshold
    }

    /// Run pose estimation on an RGB frame with shape `[H, W, 3]`.
    ///
    /// Returns every detected person, sorted by confidence descending.
    pub fn estimate(&mut self, image: &Tensor<u8>) -> Result<Vec<PoseDetection>, PoseError> {
        let (input, letterbox) = preprocess(image)?;

        let input_name = self
            .session
            .input_names()
            .first()
            .ok_or_else(|| PoseError::Backend("model has no inputs".to_string()))?
            .clone();

        let mut outputs = self.session.run(&[(input_name.as_str(), input)])?;

        let output = match self.session.output_names().first() {
            Some(name) => outputs.remove(name),
            None => None,
        }
        .ok_or_else(|| PoseError::Backend("model produced no outputs".to_string()))?;

        let detections = postprocess(&output, &letterbox, self.conf_threshold, self.iou_threshold)?;
        log::debug!("{} detected {} people", self.name, detections.len());

        Ok(detections)
    }
}

impl KeypointProvider for YoloPoseProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn detect(&mut self, image: &Tensor<u8>) -> Result<Option<PoseDetection>, PoseError> {
        // only the most confident person is analyzed
        Ok(self.estimate(image)?.into_iter().next())
    }
}
