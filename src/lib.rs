//! Labeled feature vectors with a compact binary encoding.
//!
//! A [`LabeledPoint`] is a fixed-dimension `f32` vector with one `f32` label
//! (`-1` when unlabeled). It encodes to `4 * (dimensions + 1)` bytes: every
//! coordinate in order, then the label, each as a big-endian IEEE-754 single.
//! The encoding does not carry the dimensionality; decode into a point that
//! already has the right shape.
//!
//! ```
//! use labeled_points::{Convertable, LabeledPoint};
//!
//! let p = LabeledPoint::new(vec![1.0, 2.0, 3.0], 7.0);
//! let mut bytes = Vec::new();
//! p.write(&mut bytes).unwrap();
//! assert_eq!(bytes.len(), 16);
//!
//! let mut q = LabeledPoint::with_dimensions(3);
//! q.read(&mut bytes.as_slice()).unwrap();
//! assert_eq!(p, q);
//! assert_eq!(q.to_string(), "1.0\t2.0\t3.0\t7.0\t");
//! ```
//!
//! Streams of many same-dimension points, and header-framed dataset files,
//! live in [`stream`].

pub mod error;
pub mod points;
pub mod stream;

#[cfg(feature = "python")]
mod python;

pub use error::{StreamError, StreamResult};
pub use points::{Convertable, DoublePoint, LabeledPoint, NumberPoint, Point, HASH_MODULUS, UNLABELED};
