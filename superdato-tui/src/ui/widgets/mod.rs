//! Reusable widgets: half-block pictures and the before/after comparison.

pub mod comparison;
pub mod picture;

pub use comparison::ComparisonView;
pub use picture::{Corner, PictureView};
