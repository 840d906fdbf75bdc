use crate::{PoseDetection, PoseError};
use formcheck_base::Tensor;

/// Anything that can find a person's keypoints in a color frame.
///
/// Implementations are usually a heavyweight model loaded once per process;
/// the analyzer never depends on one directly, so tests can substitute a
/// provider that returns fixed poses.
pub trait KeypointProvider: Send {
    /// Short model name reported by the health endpoint.
    fn name(&self) -> &str;

    /// Detect the most confident person in `image`.
    ///
    /// `image` is an RGB tensor with shape `[H, W, 3]`. Returns `Ok(None)`
    /// when nobody is in the frame.
    fn detect(&mut self, image: &Tensor<u8>) -> Result<Option<PoseDetection>, PoseError>;
}

impl<P: KeypointProvider + ?Sized> KeypointProvider for Box<P> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn detect(&mut self, image: &Tensor<u8>) -> Result<Option<PoseDetection>, PoseError> {
        (**self).detect(image)
    }
}
