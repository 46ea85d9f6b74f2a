//! Binary occupancy masks.
//!
//! A [`Mask`] is a row-major `height x width` grid of `u8`. Cells hold either
//! [`Mask::BACKGROUND`] or [`Mask::FOREGROUND`]; any non-zero value is read as
//! occupied by the metric functions.

use crate::error::{Result, SegEvalError};
use crate::types::ImageShape;

/// Row-major binary mask with cells valued 0 or 255.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    shape: ImageShape,
    data: Vec<u8>,
}

impl Mask {
    /// Value of an unoccupied pixel.
    pub const BACKGROUND: u8 = 0;
    /// Value of an occupied pixel.
    pub const FOREGROUND: u8 = 255;

    /// Create an all-background mask.
    pub fn zeros(shape: ImageShape) -> Self {
        Self {
            shape,
            data: vec![Self::BACKGROUND; shape.pixel_count()],
        }
    }

    /// Wrap existing row-major pixel data.
    ///
    /// # Errors
    ///
    /// Returns an error if `data.len()` is not `height * width`.
    pub fn from_raw(shape: ImageShape, data: Vec<u8>) -> Result<Self> {
        if data.len() != shape.pixel_count() {
            return Err(SegEvalError::InvalidAnnotation(format!(
                "mask data has {} pixels, expected {}x{}",
                data.len(),
                shape.height,
                shape.width
            )));
        }
        Ok(Self { shape, data })
    }

    pub fn shape(&self) -> ImageShape {
        self.shape
    }

    pub fn height(&self) -> usize {
        self.shape.height
    }

    pub fn width(&self) -> usize {
        self.shape.width
    }

    /// Row-major pixel values.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Whether the pixel at `(x, y)` is occupied. Out-of-range is background.
    pub fn get(&self, x: usize, y: usize) -> bool {
        x < self.shape.width && y < self.shape.height && self.data[y * self.shape.width + x] != 0
    }

    /// Mark the pixel at `(x, y)` as occupied. Out-of-range writes are ignored.
    pub fn set(&mut self, x: usize, y: usize) {
        if x < self.shape.width && y < self.shape.height {
            self.data[y * self.shape.width + x] = Self::FOREGROUND;
        }
    }

    /// Mark the inclusive horizontal run `x0..=x1` on row `y`.
    pub(crate) fn fill_span(&mut self, y: usize, x0: usize, x1: usize) {
        if y >= self.shape.height || x0 >= self.shape.width || x0 > x1 {
            return;
        }
        let x1 = x1.min(self.shape.width - 1);
        let row = y * self.shape.width;
        self.data[row + x0..=row + x1].fill(Self::FOREGROUND);
    }

    /// Number of occupied pixels.
    pub fn count_foreground(&self) -> usize {
        self.data.iter().filter(|&&v| v != 0).count()
    }

    /// True when no pixel is occupied.
    pub fn is_empty(&self) -> bool {
        self.data.iter().all(|&v| v == 0)
    }

    /// Merge `other` into `self` by pixel-wise maximum.
    ///
    /// Only the overlapping prefix is merged if the shapes differ.
    pub fn union_with(&mut self, other: &Mask) {
        for (dst, &src) in self.data.iter_mut().zip(&other.data) {
            *dst = (*dst).max(src);
        }
    }

    /// Check that `other` can be compared pixel by pixel with `self`.
    pub fn ensure_same_shape(&self, other: &Mask) -> Result<()> {
        if self.shape != other.shape {
            return Err(SegEvalError::ShapeMismatch {
                gt_height: self.shape.height,
                gt_width: self.shape.width,
                pred_height: other.shape.height,
                pred_width: other.shape.width,
            });
        }
        Ok(())
    }
}

/// Combine per-annotation masks into one mask by pixel-wise OR.
///
/// An empty iterator yields an all-background mask of `shape`.
pub fn combine_masks<'a, I>(masks: I, shape: ImageShape) -> Mask
where
    I: IntoIterator<Item = &'a Mask>,
{
    masks.into_iter().fold(Mask::zeros(shape), |mut acc, mask| {
        acc.union_with(mask);
        acc
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape(h: usize, w: usize) -> ImageShape {
        ImageShape::new(h, w)
    }

    #[test]
    fn test_zeros_is_empty() {
        let mask = Mask::zeros(shape(4, 5));
        assert_eq!(mask.as_slice().len(), 20);
        assert!(mask.is_empty());
        assert_eq!(mask.count_foreground(), 0);
    }

    #[test]
    fn test_set_and_get() {
        let mut mask = Mask::zeros(shape(3, 3));
        mask.set(2, 1);
        mask.set(7, 7);
        assert!(mask.get(2, 1));
        assert!(!mask.get(1, 2));
        assert_eq!(mask.as_slice()[5], Mask::FOREGROUND);
        assert_eq!(mask.count_foreground(), 1);
    }

    #[test]
    fn test_fill_span_clips() {
        let mut mask = Mask::zeros(shape(2, 4));
        mask.fill_span(1, 2, 10);
        assert_eq!(mask.as_slice(), &[0, 0, 0, 0, 0, 0, 255, 255]);
    }

    #[test]
    fn test_from_raw_checks_length() {
        assert!(Mask::from_raw(shape(2, 2), vec![0; 3]).is_err());
        assert!(Mask::from_raw(shape(2, 2), vec![0, 255, 0, 255]).is_ok());
    }

    #[test]
    fn test_combine_is_union() {
        let a = Mask::from_raw(shape(1, 4), vec![255, 0, 0, 0]).unwrap();
        let b = Mask::from_raw(shape(1, 4), vec![0, 0, 255, 0]).unwrap();
        let ab = combine_masks([&a, &b], shape(1, 4));
        let ba = combine_masks([&b, &a], shape(1, 4));
        assert_eq!(ab.as_slice(), &[255, 0, 255, 0]);
        assert_eq!(ab, ba);
    }

    #[test]
    fn test_combine_empty() {
        let combined = combine_masks(std::iter::empty(), shape(3, 3));
        assert!(combined.is_empty());
        assert_eq!(combined.shape(), shape(3, 3));
    }

    #[test]
    fn test_ensure_same_shape() {
        let a = Mask::zeros(shape(2, 3));
        let b = Mask::zeros(shape(3, 2));
        assert!(a.ensure_same_shape(&a.clone()).is_ok());
        assert!(matches!(
            a.ensure_same_shape(&b),
            Err(SegEvalError::ShapeMismatch { gt_height: 2, pred_height: 3, .. })
        ));
    }
}
