//! Main evaluation orchestrator for pixel-level segmentation metrics.

use crate::config::EvalConfig;
use crate::error::Result;
use crate::loader::load_annotations;
use crate::mask::Mask;
use crate::metrics::dice::dice_from_counts;
use crate::metrics::f1_score::calculate_f1_score;
use crate::metrics::iou::iou_from_counts;
use crate::metrics::pixel_accuracy::pixel_accuracy_from_counts;
use crate::metrics::precision_recall::{precision_from_counts, recall_from_counts};
use crate::metrics::PixelCounts;
use crate::raster::rasterize_annotations;
use crate::types::{Annotation, ImageShape, SegmentationMetrics};
use log::{debug, info};

/// Evaluate predicted polygons against ground-truth polygons.
///
/// **Combined-mask evaluation**: every annotation of a set is rasterized
/// onto one mask of `shape`, so overlapping instances merge and object
/// identity plays no part. Only ring 0 of each segmentation is used.
///
/// # Returns
///
/// `(iou, precision, recall, f1, pixel_accuracy, dice)` in that order.
///
/// # Example
///
/// ```
/// use seg_eval::evaluator::evaluate_metrics;
/// use seg_eval::types::{Annotation, ImageShape};
///
/// let gt = vec![Annotation::from_polygon(&[(0, 0), (0, 10), (10, 10), (10, 0)])];
/// let (iou, _, _, _, pixel_accuracy, dice) =
///     evaluate_metrics(&gt, &gt, ImageShape::new(20, 20));
/// assert_eq!(iou, 1.0);
/// assert_eq!(dice, 1.0);
/// assert_eq!(pixel_accuracy, 1.0);
/// ```
pub fn evaluate_metrics(
    ground_truth: &[Annotation],
    predictions: &[Annotation],
    shape: ImageShape,
) -> (f64, f64, f64, f64, f64, f64) {
    let gt_mask = rasterize_annotations(ground_truth, shape);
    let pred_mask = rasterize_annotations(predictions, shape);

    compute_metrics(&gt_mask, &pred_mask).as_tuple()
}

/// Evaluate two already rasterized masks.
///
/// # Errors
///
/// Returns [`SegEvalError::ShapeMismatch`](crate::error::SegEvalError::ShapeMismatch)
/// if the masks do not have the same shape.
pub fn evaluate_masks(ground_truth: &Mask, predicted: &Mask) -> Result<SegmentationMetrics> {
    ground_truth.ensure_same_shape(predicted)?;
    Ok(compute_metrics(ground_truth, predicted))
}

/// Load both annotation files named by `config` and evaluate them.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or either file cannot be
/// read or parsed.
pub fn evaluate_from_config(config: &EvalConfig) -> Result<SegmentationMetrics> {
    config.validate()?;
    let shape = config.image_shape();

    let ground_truth = load_annotations(&config.input.ground_truth_coco_output)?;
    let predictions = load_annotations(&config.input.prediction_coco_output)?;
    info!(
        "evaluating {} predicted against {} ground-truth annotations on a {}x{} image",
        predictions.len(),
        ground_truth.len(),
        shape.height,
        shape.width
    );

    Ok(evaluate_metrics(&ground_truth, &predictions, shape).into())
}

/// Tally the mask pair once and derive all six metrics from the counts.
fn compute_metrics(ground_truth: &Mask, predicted: &Mask) -> SegmentationMetrics {
    let counts = PixelCounts::from_masks(ground_truth, predicted);
    debug!("pixel counts: {counts:?}");

    let precision = precision_from_counts(&counts);
    let recall = recall_from_counts(&counts);

    SegmentationMetrics {
        iou: iou_from_counts(&counts),
        precision,
        recall,
        f1: calculate_f1_score(precision, recall),
        pixel_accuracy: pixel_accuracy_from_counts(&counts),
        dice: dice_from_counts(&counts),
    }
}
