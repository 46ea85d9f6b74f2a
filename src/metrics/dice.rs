//! Dice coefficient.

use crate::mask::Mask;
use crate::metrics::counts::{ratio_or, PixelCounts};

/// Calculate the Dice coefficient: `2·|A∧B| / (|A| + |B|)`.
///
/// Unlike IoU, two empty masks are a perfect match and score 1.0.
///
/// # Example
///
/// ```
/// use seg_eval::mask::Mask;
/// use seg_eval::metrics::dice::calculate_dice_coefficient;
/// use seg_eval::types::ImageShape;
///
/// let empty = Mask::zeros(ImageShape::new(3, 3));
/// assert_eq!(calculate_dice_coefficient(&empty, &empty), 1.0);
/// ```
pub fn calculate_dice_coefficient(ground_truth: &Mask, predicted: &Mask) -> f64 {
    dice_from_counts(&PixelCounts::from_masks(ground_truth, predicted))
}

/// Dice coefficient from precomputed pixel counts.
pub fn dice_from_counts(counts: &PixelCounts) -> f64 {
    ratio_or(
        2 * counts.intersection,
        counts.ground_truth + counts.predicted,
        1.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ImageShape;

    fn mask(data: &[u8]) -> Mask {
        Mask::from_raw(ImageShape::new(1, data.len()), data.to_vec()).unwrap()
    }

    #[test]
    fn test_identical() {
        let a = mask(&[255, 0, 255]);
        assert_eq!(calculate_dice_coefficient(&a, &a), 1.0);
    }

    #[test]
    fn test_partial_overlap() {
        let a = mask(&[255, 255, 255, 0]);
        let b = mask(&[0, 255, 0, 255]);
        // 2 * 1 / (3 + 2)
        assert!((calculate_dice_coefficient(&a, &b) - 0.4).abs() < 1e-10);
    }

    #[test]
    fn test_one_side_empty() {
        let a = mask(&[255, 0]);
        let b = mask(&[0, 0]);
        assert_eq!(calculate_dice_coefficient(&a, &b), 0.0);
        assert_eq!(calculate_dice_coefficient(&b, &a), 0.0);
    }

    #[test]
    fn test_both_empty_is_perfect() {
        let a = mask(&[0, 0, 0]);
        assert_eq!(calculate_dice_coefficient(&a, &a), 1.0);
    }
}
