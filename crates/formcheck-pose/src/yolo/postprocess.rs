use crate::{Keypoint, LetterboxInfo, PoseDetection, PoseError, COCO_KEYPOINT_COUNT};
use formcheck_base::{Rect, Tensor, Vec2};

/// Rows per candidate: cx, cy, w, h, confidence, then (x, y, visibility) per keypoint.
pub const OUTPUT_ROWS: usize = 5 + COCO_KEYPOINT_COUNT * 3;

/// Compute Intersection over Union (IoU) between two bounding boxes
///
/// Returns 0.0 for non-overlapping boxes or zero-area boxes (no division by zero).
pub fn iou(a: &Rect<f32>, b: &Rect<f32>) -> f32 {
    if a.size.x <= 0.0 || a.size.y <= 0.0 || b.size.x <= 0.0 || b.size.y <= 0.0 {
        return 0.0;
    }

    let intersection_area = a.intersection(*b).map_or(0.0, |rect| rect.area());
    let union_area = a.area() + b.area() - intersection_area;
    if union_area <= 0.0 {
        return 0.0;
    }

    intersection_area / union_area
}

/// Post-process YOLO pose model output
///
/// Takes the raw `[1, 56, N]` output, drops candidates below
/// `conf_threshold`, runs greedy NMS with `iou_threshold`, and rescales boxes
/// and keypoints back to source image pixels.
///
/// # Returns
/// Detections sorted by confidence descending, or `PoseError::ShapeMismatch`
/// if the output tensor has an unexpected shape.
pub fn postprocess(
    output: &Tensor<f32>,
    letterbox: &LetterboxInfo,
    conf_threshold: f32,
    iou_threshold: f32,
) -> Result<Vec<PoseDetection>, PoseError> {
    if output.shape.len() != 3 || output.shape[0] != 1 || output.shape[1] != OUTPUT_ROWS {
        return Err(PoseError::ShapeMismatch {
            expected: format!("[1, {}, N]", OUTPUT_ROWS),
            got: format!("{:?}", output.shape),
        });
    }

    let n = output.shape[2];
    // element [0, row, col] lives at row * n + col
    let at = |row: usize, col: usize| output.data[row * n + col];

    let mut candidates = Vec::new();
    for i in 0..n {
        let confidence = at(4, i);
        if confidence.is_nan() || confidence < conf_threshold {
            continue;
        }

        let keypoints = std::array::from_fn(|k| {
            let base = 5 + k * 3;
            Keypoint {
                position: letterbox.unletterbox(Vec2::new(at(base, i), at(base + 1, i))),
                confidence: at(base + 2, i),
            }
        });

        let center = letterbox.unletterbox(Vec2::new(at(0, i), at(1, i)));
        let size = Vec2::new(at(2, i), at(3, i)) / letterbox.scale;
        let bbox = Rect::new(center - size / 2.0, size);

        candidates.push(PoseDetection {
            bbox,
            confidence,
            keypoints,
        });
    }

    candidates.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    // Greedy NMS
    let mut keep: Vec<PoseDetection> = Vec::new();
    for candidate in candidates {
        if keep
            .iter()
            .all(|kept| iou(&kept.bbox, &candidate.bbox) <= iou_threshold)
        {
            keep.push(candidate);
        }
    }

    Ok(keep)
}
