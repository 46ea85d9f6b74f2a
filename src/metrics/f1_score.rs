//! F1 Score calculation.

use crate::mask::Mask;
use crate::metrics::precision_recall::{calculate_precision_recall, PrecisionRecall};

/// Calculate F1 score from precision and recall.
///
/// F1 score is the harmonic mean of precision and recall:
/// F1 = 2 × (Precision × Recall) / (Precision + Recall)
///
/// # Returns
///
/// Returns the F1 score (0.0 to 1.0). Returns 0.0 if both precision and recall are 0.
///
/// # Example
///
/// ```
/// use seg_eval::metrics::f1_score::calculate_f1_score;
///
/// let f1 = calculate_f1_score(0.8, 0.6);
/// assert!((f1 - 0.6857).abs() < 0.001);
/// ```
pub fn calculate_f1_score(precision: f64, recall: f64) -> f64 {
    if precision + recall == 0.0 {
        return 0.0;
    }

    2.0 * (precision * recall) / (precision + recall)
}

/// Calculate F1 score from a PrecisionRecall struct.
pub fn calculate_f1_from_pr(pr: &PrecisionRecall) -> f64 {
    calculate_f1_score(pr.precision, pr.recall)
}

/// Calculate the pixel-level F1 score of two masks.
pub fn calculate_f1_from_masks(ground_truth: &Mask, predicted: &Mask) -> f64 {
    calculate_f1_from_pr(&calculate_precision_recall(ground_truth, predicted))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ImageShape;

    #[test]
    fn test_perfect_f1() {
        let f1 = calculate_f1_score(1.0, 1.0);
        assert!((f1 - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_zero_f1() {
        let f1 = calculate_f1_score(0.0, 0.0);
        assert_eq!(f1, 0.0);
    }

    #[test]
    fn test_f1_calculation() {
        let f1 = calculate_f1_score(0.8, 0.6);
        // F1 = 2 * (0.8 * 0.6) / (0.8 + 0.6) = 0.96 / 1.4 ≈ 0.6857
        assert!((f1 - 0.685714).abs() < 1e-5);
    }

    #[test]
    fn test_f1_from_masks() {
        let shape = ImageShape::new(1, 6);
        let gt = Mask::from_raw(shape, vec![255, 255, 255, 255, 0, 0]).unwrap();
        let pred = Mask::from_raw(shape, vec![0, 0, 255, 255, 255, 0]).unwrap();
        // P = 2/3, R = 1/2, F1 = 4/7
        assert!((calculate_f1_from_masks(&gt, &pred) - 4.0 / 7.0).abs() < 1e-10);
    }
}
