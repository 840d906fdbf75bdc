use crate::Device;
use std::fmt;

#[derive(Debug)]
pub enum PoseError {
    ShapeMismatch { expected: String, got: String },
    Backend(String),
    ModelLoad(String),
    UnsupportedDevice(Device),
    Tensor(formcheck_base::TensorError),
}

impl fmt::Display for PoseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PoseError::ShapeMismatch { expected, got } => {
                write!(f, "shape mismatch: expected {expected}, got {got}")
            }
            PoseError::Backend(msg) => write!(f, "backend error: {msg}"),
            PoseError::ModelLoad(msg) => write!(f, "model load error: {msg}"),
            PoseError::UnsupportedDevice(device) => write!(f, "unsupported device: {device}"),
            PoseError::Tensor(err) => write!(f, "tensor error: {err}"),
        }
    }
}

impl std::error::Error for PoseError {}

impl From<formcheck_base::TensorError> for PoseError {
    fn from(err: formcheck_base::TensorError) -> Self {
        PoseError::Tensor(err)
    }
}
