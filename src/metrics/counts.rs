//! Pixel tallies shared by every segmentation metric.

use crate::mask::Mask;

/// Exact integer counts derived from a ground-truth / prediction mask pair.
///
/// All metrics are ratios of these counts, converted to `f64` only at the
/// final division.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PixelCounts {
    /// Pixels occupied in both masks.
    pub intersection: usize,
    /// Pixels occupied in either mask.
    pub union: usize,
    /// Pixels occupied in the ground-truth mask.
    pub ground_truth: usize,
    /// Pixels occupied in the predicted mask.
    pub predicted: usize,
    /// Pixels where both masks agree, background included.
    pub matching: usize,
    /// Pixels in the predicted mask's grid.
    pub total: usize,
}

impl PixelCounts {
    /// Tally a mask pair in a single pass.
    ///
    /// Shapes are not validated. When they differ only the overlapping
    /// prefix of the two grids is compared.
    pub fn from_masks(ground_truth: &Mask, predicted: &Mask) -> Self {
        let mut counts = PixelCounts {
            ground_truth: ground_truth.count_foreground(),
            predicted: predicted.count_foreground(),
            total: predicted.as_slice().len(),
            ..Self::default()
        };

        for (&g, &p) in ground_truth.as_slice().iter().zip(predicted.as_slice()) {
            let (g, p) = (g != 0, p != 0);
            if g && p {
                counts.intersection += 1;
            }
            if g || p {
                counts.union += 1;
            }
            if g == p {
                counts.matching += 1;
            }
        }

        counts
    }

    /// Predicted pixels absent from the ground truth.
    pub fn false_positives(&self) -> usize {
        self.predicted - self.intersection
    }

    /// Ground-truth pixels the prediction missed.
    pub fn false_negatives(&self) -> usize {
        self.ground_truth - self.intersection
    }
}

/// `numerator / denominator`, or `fallback` when the denominator is zero.
pub(crate) fn ratio_or(numerator: usize, denominator: usize, fallback: f64) -> f64 {
    if denominator == 0 {
        fallback
    } else {
        numerator as f64 / denominator as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ImageShape;

    fn mask(data: &[u8]) -> Mask {
        Mask::from_raw(ImageShape::new(1, data.len()), data.to_vec()).unwrap()
    }

    #[test]
    fn test_counts() {
        let gt = mask(&[255, 255, 0, 0, 0]);
        let pred = mask(&[0, 255, 255, 0, 0]);
        let counts = PixelCounts::from_masks(&gt, &pred);
        assert_eq!(counts.intersection, 1);
        assert_eq!(counts.union, 3);
        assert_eq!(counts.ground_truth, 2);
        assert_eq!(counts.predicted, 2);
        assert_eq!(counts.matching, 3);
        assert_eq!(counts.total, 5);
        assert_eq!(counts.false_positives(), 1);
        assert_eq!(counts.false_negatives(), 1);
    }

    #[test]
    fn test_nonzero_is_foreground() {
        let gt = mask(&[1, 0]);
        let pred = mask(&[255, 0]);
        let counts = PixelCounts::from_masks(&gt, &pred);
        assert_eq!(counts.intersection, 1);
        assert_eq!(counts.matching, 2);
    }

    #[test]
    fn test_ratio_or() {
        assert_eq!(ratio_or(1, 4, 0.0), 0.25);
        assert_eq!(ratio_or(0, 0, 1.0), 1.0);
        assert_eq!(ratio_or(0, 0, 0.0), 0.0);
    }
}
