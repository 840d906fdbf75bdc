use crate::{LetterboxInfo, PoseError};
use formcheck_base::Tensor;

pub const TARGET_SIZE: usize = 640;
const PAD_COLOR: f32 = 114.0 / 255.0; // Gray padding in normalized range

/// Preprocess an RGB frame for YOLO pose inference
///
/// Takes an image tensor in HWC format (height, width, 3 channels) and returns
/// a tensor in NCHW format (1, 3, 640, 640) with values in [0.0, 1.0].
///
/// The preprocessing includes:
/// - Letterbox resize to 640x640 maintaining aspect ratio (nearest-neighbor)
/// - HWC -> NCHW transpose
/// - Rescale from [0, 255] to [0.0, 1.0]
///
/// Returns the preprocessed tensor and letterbox info for coordinate rescaling.
pub fn preprocess(image: &Tensor<u8>) -> Result<(Tensor<f32>, LetterboxInfo), PoseError> {
    if image.shape.len() != 3 {
        return Err(PoseError::ShapeMismatch {
            expected: "[H, W, 3]".to_string(),
            got: format!("{:?}", image.shape),
        });
    }
    let [h, w, c] = [image.shape[0], image.shape[1], image.shape[2]];
    if c != 3 {
        return Err(PoseError::ShapeMismatch {
            expected: "3 channels".to_string(),
            got: format!("{} channels", c),
        });
    }
    if h == 0 || w == 0 {
        return Err(PoseError::ShapeMismatch {
            expected: "non-empty image".to_string(),
            got: format!("{}x{}", w, h),
        });
    }

    let scale = (TARGET_SIZE as f32 / w as f32).min(TARGET_SIZE as f32 / h as f32);

    let new_w = ((w as f32 * scale) as usize).clamp(1, TARGET_SIZE);
    let new_h = ((h as f32 * scale) as usize).clamp(1, TARGET_SIZE);

    let pad_x = (TARGET_SIZE - new_w) / 2;
    let pad_y = (TARGET_SIZE - new_h) / 2;

    let plane = TARGET_SIZE * TARGET_SIZE;
    let mut nchw = vec![PAD_COLOR; 3 * plane];

    // Resize, pad and transpose in one pass: every output pixel inside the
    // letterbox samples its nearest source pixel.
    for out_y in 0..new_h {
        let src_y = ((out_y as f32 / scale) as usize).min(h - 1);
        for out_x in 0..new_w {
            let src_x = ((out_x as f32 / scale) as usize).min(w - 1);
            let src_idx = (src_y * w + src_x) * 3;
            let dst = (out_y + pad_y) * TARGET_SIZE + out_x + pad_x;

            for ch in 0..3 {
                nchw[ch * plane + dst] = image.data[src_idx + ch] as f32 / 255.0;
            }
        }
    }

    let preprocessed = Tensor::new(vec![1, 3, TARGET_SIZE, TARGET_SIZE], nchw)?;

    let letterbox = LetterboxInfo {
        scale,
        pad_x: pad_x as f32,
        pad_y: pad_y as f32,
    };

    Ok((preprocessed, letterbox))
}
