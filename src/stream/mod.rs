//! Byte-stream plumbing around the point codec.
//!
//! - `primitives` - big-endian `f32`/`f64` reads and writes
//! - `reader` - iterate over, or write, a stream of same-dimension points
//! - `dataset` - header-framed dataset files that record their dimensionality

pub mod dataset;
pub mod primitives;
pub mod reader;

pub use dataset::{read_dataset, write_dataset, Dataset, DatasetHeader};
pub use reader::{write_points, PointReader};
