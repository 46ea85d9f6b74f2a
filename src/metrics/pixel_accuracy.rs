//! Pixel accuracy: agreement over the whole grid, background included.

use crate::mask::Mask;
use crate::metrics::counts::{ratio_or, PixelCounts};

/// Fraction of pixels on which the prediction agrees with the ground truth.
///
/// True negatives count as agreement, so two empty masks score 1.0.
///
/// # Example
///
/// ```
/// use seg_eval::mask::Mask;
/// use seg_eval::metrics::pixel_accuracy::calculate_pixel_accuracy;
/// use seg_eval::types::ImageShape;
///
/// let shape = ImageShape::new(2, 2);
/// let gt = Mask::from_raw(shape, vec![255, 0, 0, 0]).unwrap();
/// let pred = Mask::from_raw(shape, vec![255, 255, 0, 0]).unwrap();
/// assert_eq!(calculate_pixel_accuracy(&gt, &pred), 0.75);
/// ```
pub fn calculate_pixel_accuracy(ground_truth: &Mask, predicted: &Mask) -> f64 {
    pixel_accuracy_from_counts(&PixelCounts::from_masks(ground_truth, predicted))
}

/// Pixel accuracy from precomputed counts. A zero-sized grid scores 0.0.
pub fn pixel_accuracy_from_counts(counts: &PixelCounts) -> f64 {
    ratio_or(counts.matching, counts.total, 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ImageShape;

    #[test]
    fn test_empty_masks_agree() {
        let a = Mask::zeros(ImageShape::new(4, 4));
        assert_eq!(calculate_pixel_accuracy(&a, &a), 1.0);
    }

    #[test]
    fn test_inverted_masks() {
        let shape = ImageShape::new(1, 4);
        let a = Mask::from_raw(shape, vec![255, 255, 0, 0]).unwrap();
        let b = Mask::from_raw(shape, vec![0, 0, 255, 255]).unwrap();
        assert_eq!(calculate_pixel_accuracy(&a, &b), 0.0);
    }

    #[test]
    fn test_zero_sized_grid() {
        let a = Mask::zeros(ImageShape::new(0, 5));
        assert_eq!(calculate_pixel_accuracy(&a, &a), 0.0);
    }
}
