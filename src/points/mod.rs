//! Point value types.
//!
//! - `LabeledPoint` - `f32` feature vector plus an `f32` label, the main type
//! - `DoublePoint` - `f64` coordinates, narrowed by `LabeledPoint::from_double_point`
//! - `NumberPoint` - coordinates of any primitive numeric type

mod double_point;
mod labeled_point;
mod number_point;
pub mod traits;

pub use double_point::DoublePoint;
pub use labeled_point::{LabeledPoint, HASH_MODULUS, UNLABELED};
pub use number_point::NumberPoint;
pub use traits::{Convertable, Point};
