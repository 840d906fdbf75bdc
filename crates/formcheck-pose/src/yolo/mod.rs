mod estimator;
mod postprocess;
mod preprocess;

pub use estimator::YoloPoseProvider;
pub use postprocess::{iou, postprocess, OUTPUT_ROWS};
pub use preprocess::{preprocess, TARGET_SIZE};
