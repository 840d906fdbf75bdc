//! Frame decoding for the form checker.
//!
//! Clients upload frames as base64 text (usually a `data:image/jpeg;base64,`
//! URI produced by a browser canvas). This crate turns that text into an
//! 8-bit RGB `Tensor<u8>` in HWC layout: `[height, width, 3]`.

pub mod error;
pub mod payload;

pub use error::ImageError;
pub use payload::{decode_base64_image, strip_data_uri};

use formcheck_base::Tensor;

/// Decodes an encoded image (format auto-detected) into an RGB tensor.
///
/// Grayscale, alpha, 16-bit and float images are all converted to 8-bit RGB,
/// the same color frame a webcam would deliver.
///
/// # Errors
///
/// Returns `ImageError::Decode` if the data is invalid or the format is unsupported.
pub fn decode_image(data: &[u8]) -> Result<Tensor<u8>, ImageError> {
    let rgb = image::load_from_memory(data)?.into_rgb8();
    let (width, height) = rgb.dimensions();
    let shape = vec![height as usize, width as usize, 3];
    Ok(Tensor::new(shape, rgb.into_raw())?)
}

/// Base64 (or data URI) text straight to an RGB tensor.
pub fn decode_frame(payload: &str) -> Result<Tensor<u8>, ImageError> {
    let bytes = decode_base64_image(payload)?;
    decode_image(&bytes)
}
