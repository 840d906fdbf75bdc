pub mod backends;
pub mod device;
pub mod error;
pub mod filter;
pub mod provider;
pub mod session;
pub mod types;
pub mod yolo;

pub use device::Device;
pub use error::PoseError;
pub use filter::{filter_by_confidence, CONFIDENCE_THRESHOLD};
pub use provider::KeypointProvider;
pub use session::Session;
pub use types::{
    Keypoint, KeypointIndex, LetterboxInfo, Pose, PoseDetection, COCO_KEYPOINT_COUNT,
};
pub use yolo::YoloPoseProvider;

#[cfg(feature = "onnx")]
pub use backends::OnnxSession;
