use crate::ServerError;
use formcheck_analysis::{FormAnalyzer, FormAssessment};
use formcheck_base::log;
use formcheck_pose::KeypointProvider;
use serde::Serialize;
use std::sync::Mutex;

/// Keypoints and grading for one uploaded frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameAnalysis {
    /// Filtered `[x, y]` per COCO slot in source-image pixels; `None` when
    /// nobody was detected.
    pub keypoints: Option<Vec<Option<[f32; 2]>>>,
    pub analysis: FormAssessment,
}

/// Everything a request handler needs, shared by all connections.
pub struct AppState {
    provider: Mutex<Box<dyn KeypointProvider>>,
    model_name: String,
    analyzer: FormAnalyzer,
    keypoint_threshold: f32,
}

impl AppState {
    pub fn new(
        provider: Box<dyn KeypointProvider>,
        analyzer: FormAnalyzer,
        keypoint_threshold: f32,
    ) -> Self {
        let model_name = provider.name().to_string();
        Self {
            provider: Mutex::new(provider),
            model_name,
            analyzer,
            keypoint_threshold,
        }
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    /// Decode a base64 frame, find the person in it and grade their form.
    ///
    /// Blocks for the duration of model inference; call from the blocking pool.
    pub fn analyze_frame(&self, payload: &str) -> Result<FrameAnalysis, ServerError> {
        let image = formcheck_image::decode_frame(payload)?;
        log::debug!("decoded frame {:?}", image.shape);

        let detection = {
            let mut provider = self
                .provider
                .lock()
                .map_err(|_| ServerError::Task("keypoint provider lock poisoned".into()))?;
            provider.detect(&image)?
        };

        let pose = detection.map(|d| d.filtered(self.keypoint_threshold));
        let analysis = self.analyzer.analyze(pose.as_deref());
        let keypoints = pose.map(|points| {
            points
                .into_iter()
                .map(|p| p.map(|p| [p.x, p.y]))
                .collect()
        });

        Ok(FrameAnalysis {
            keypoints,
            analysis,
        })
    }
}
