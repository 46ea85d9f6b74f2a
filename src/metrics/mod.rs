//! Pixel-level metrics between a ground-truth and a predicted mask.

pub mod counts;
pub mod iou;
pub mod precision_recall;
pub mod f1_score;
pub mod pixel_accuracy;
pub mod dice;

pub use counts::PixelCounts;
pub use iou::calculate_iou;
pub use precision_recall::{
    calculate_precision, calculate_precision_recall, calculate_recall, PrecisionRecall,
};
pub use f1_score::{calculate_f1_from_masks, calculate_f1_score};
pub use pixel_accuracy::calculate_pixel_accuracy;
pub use dice::calculate_dice_coefficient;
