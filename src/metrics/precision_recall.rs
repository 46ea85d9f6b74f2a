//! Pixel-level precision and recall.

use crate::mask::Mask;
use crate::metrics::counts::{ratio_or, PixelCounts};

/// Container for precision and recall values.
#[derive(Debug, Clone)]
pub struct PrecisionRecall {
    pub precision: f64,
    pub recall: f64,
    pub true_positives: usize,
    pub false_positives: usize,
    pub false_negatives: usize,
}

impl PrecisionRecall {
    /// Build from precomputed pixel counts.
    pub fn from_counts(counts: &PixelCounts) -> Self {
        Self {
            precision: precision_from_counts(counts),
            recall: recall_from_counts(counts),
            true_positives: counts.intersection,
            false_positives: counts.false_positives(),
            false_negatives: counts.false_negatives(),
        }
    }
}

/// Calculate precision: shared pixels over predicted pixels.
///
/// Returns 0.0 if the prediction is empty.
///
/// # Example
///
/// ```
/// use seg_eval::mask::Mask;
/// use seg_eval::metrics::precision_recall::calculate_precision;
/// use seg_eval::types::ImageShape;
///
/// let shape = ImageShape::new(1, 4);
/// let gt = Mask::from_raw(shape, vec![255, 0, 0, 0]).unwrap();
/// let pred = Mask::from_raw(shape, vec![255, 255, 0, 0]).unwrap();
/// assert_eq!(calculate_precision(&gt, &pred), 0.5);
/// ```
pub fn calculate_precision(ground_truth: &Mask, predicted: &Mask) -> f64 {
    precision_from_counts(&PixelCounts::from_masks(ground_truth, predicted))
}

/// Calculate recall: shared pixels over ground-truth pixels.
///
/// Returns 0.0 if the ground truth is empty.
pub fn calculate_recall(ground_truth: &Mask, predicted: &Mask) -> f64 {
    recall_from_counts(&PixelCounts::from_masks(ground_truth, predicted))
}

/// Calculate precision and recall together with the underlying pixel counts.
pub fn calculate_precision_recall(ground_truth: &Mask, predicted: &Mask) -> PrecisionRecall {
    PrecisionRecall::from_counts(&PixelCounts::from_masks(ground_truth, predicted))
}

pub fn precision_from_counts(counts: &PixelCounts) -> f64 {
    ratio_or(counts.intersection, counts.predicted, 0.0)
}

pub fn recall_from_counts(counts: &PixelCounts) -> f64 {
    ratio_or(counts.intersection, counts.ground_truth, 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ImageShape;

    fn mask(data: &[u8]) -> Mask {
        Mask::from_raw(ImageShape::new(1, data.len()), data.to_vec()).unwrap()
    }

    #[test]
    fn test_perfect_precision_recall() {
        let a = mask(&[255, 255, 0]);
        let pr = calculate_precision_recall(&a, &a);
        assert_eq!(pr.precision, 1.0);
        assert_eq!(pr.recall, 1.0);
        assert_eq!(pr.false_positives, 0);
        assert_eq!(pr.false_negatives, 0);
    }

    #[test]
    fn test_precision_recall_values() {
        let gt = mask(&[255, 255, 255, 255, 0, 0]);
        let pred = mask(&[0, 0, 255, 255, 255, 0]);
        let pr = calculate_precision_recall(&gt, &pred);
        assert!((pr.precision - 2.0 / 3.0).abs() < 1e-10);
        assert!((pr.recall - 0.5).abs() < 1e-10);
        assert_eq!(pr.true_positives, 2);
        assert_eq!(pr.false_positives, 1);
        assert_eq!(pr.false_negatives, 2);
    }

    #[test]
    fn test_empty_prediction() {
        let gt = mask(&[255, 0]);
        let pred = mask(&[0, 0]);
        assert_eq!(calculate_precision(&gt, &pred), 0.0);
        assert_eq!(calculate_recall(&gt, &pred), 0.0);
    }

    #[test]
    fn test_empty_ground_truth() {
        let gt = mask(&[0, 0]);
        let pred = mask(&[255, 0]);
        assert_eq!(calculate_precision(&gt, &pred), 0.0);
        assert_eq!(calculate_recall(&gt, &pred), 0.0);
    }
}
