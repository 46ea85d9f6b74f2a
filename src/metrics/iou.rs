//! Intersection over Union (IoU) between two masks.

use crate::mask::Mask;
use crate::metrics::counts::{ratio_or, PixelCounts};

/// Calculate the Intersection over Union between a ground-truth and a predicted mask.
///
/// IoU is the number of pixels occupied in both masks divided by the number
/// occupied in either.
///
/// # Returns
///
/// Returns a value between 0.0 (no overlap) and 1.0 (identical masks).
/// Returns 0.0 when both masks are empty.
///
/// # Example
///
/// ```
/// use seg_eval::mask::Mask;
/// use seg_eval::metrics::iou::calculate_iou;
/// use seg_eval::types::ImageShape;
///
/// let shape = ImageShape::new(1, 4);
/// let gt = Mask::from_raw(shape, vec![255, 255, 0, 0]).unwrap();
/// let pred = Mask::from_raw(shape, vec![0, 255, 255, 0]).unwrap();
/// assert!((calculate_iou(&gt, &pred) - 1.0 / 3.0).abs() < 1e-12);
/// ```
pub fn calculate_iou(ground_truth: &Mask, predicted: &Mask) -> f64 {
    iou_from_counts(&PixelCounts::from_masks(ground_truth, predicted))
}

/// IoU from precomputed pixel counts.
pub fn iou_from_counts(counts: &PixelCounts) -> f64 {
    ratio_or(counts.intersection, counts.union, 0.0)
}
