//! Labeled single-precision feature vector and its binary codec.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::io::{self, Read, Write};

use num_traits::AsPrimitive;
use ordered_float::OrderedFloat;
use tracing::trace;

use super::double_point::DoublePoint;
use super::number_point::NumberPoint;
use super::traits::{Convertable, Point};
use crate::stream::primitives::{read_f32, write_f32, FLOAT_WIDTH};

/// Label carried by points that were constructed without one.
pub const UNLABELED: f32 = -1.0;

/// Modulus applied to the coordinate sum in [`LabeledPoint::hash_code`].
pub const HASH_MODULUS: i32 = 1117;

/// A fixed-dimension `f32` point annotated with an `f32` label.
///
/// The number of coordinates is set at construction and never changes; the
/// coordinate values and the label may be overwritten in place.
///
/// Comparison is only defined between two `LabeledPoint`s:
///
/// ```compile_fail
/// use labeled_points::{DoublePoint, LabeledPoint};
/// let a = LabeledPoint::new(vec![1.0], 0.0);
/// let b = DoublePoint::new(vec![1.0]);
/// let _ = a == b;
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LabeledPoint {
    features: Vec<f32>,
    label: f32,
}

impl LabeledPoint {
    /// Wraps `features` without copying.
    ///
    /// # Example
    /// ```
    /// use labeled_points::LabeledPoint;
    /// let p = LabeledPoint::new(vec![1.0, 2.0, 3.0], 7.0);
    /// assert_eq!(p.dimensions(), 3);
    /// assert_eq!(p.label(), 7.0);
    /// ```
    pub fn new(features: Vec<f32>, label: f32) -> Self {
        LabeledPoint { features, label }
    }

    /// Wraps `features` with the [`UNLABELED`] label.
    pub fn unlabeled(features: Vec<f32>) -> Self {
        Self::new(features, UNLABELED)
    }

    /// All-zero point of the given dimensionality.
    pub fn zeros(dimensions: usize, label: f32) -> Self {
        Self::new(vec![0.0; dimensions], label)
    }

    /// All-zero, unlabeled point. Typically the target of a later `read`.
    pub fn with_dimensions(dimensions: usize) -> Self {
        Self::zeros(dimensions, UNLABELED)
    }

    /// Narrows every coordinate of `point` to `f32`. `point` is not modified.
    pub fn from_double_point(point: &DoublePoint, label: f32) -> Self {
        let features = point.coordinates().iter().map(|&c| c as f32).collect();
        Self::new(features, label)
    }

    /// Copies the values of `point`, in order, into a fresh buffer.
    pub fn from_number_point<N>(point: &NumberPoint<N>, label: f32) -> Self
    where
        N: AsPrimitive<f32>,
    {
        let mut labeled = Self::zeros(point.values().len(), label);
        for (slot, value) in labeled.features.iter_mut().zip(point.values()) {
            *slot = value.as_();
        }
        labeled
    }

    /// The stored coordinates.
    pub fn point(&self) -> &[f32] {
        &self.features
    }

    /// The stored coordinates, viewed as a feature vector.
    pub fn features(&self) -> &[f32] {
        &self.features
    }

    /// Mutable view of the coordinates. The length stays fixed.
    pub fn features_mut(&mut self) -> &mut [f32] {
        &mut self.features
    }

    pub fn into_features(self) -> Vec<f32> {
        self.features
    }

    pub fn label(&self) -> f32 {
        self.label
    }

    pub fn set_label(&mut self, label: f32) {
        self.label = label;
    }

    /// `false` when the label is the [`UNLABELED`] sentinel.
    pub fn is_labeled(&self) -> bool {
        self.label != UNLABELED
    }

    pub fn dimensions(&self) -> usize {
        self.features.len()
    }

    /// Coordinate `dim` widened to `f64`.
    ///
    /// # Panics
    /// Panics if `dim >= self.dimensions()`.
    pub fn get_value(&self, dim: usize) -> f64 {
        f64::from(self.features[dim])
    }

    /// # Panics
    /// Panics if `dim >= self.dimensions()`.
    pub fn set_value(&mut self, dim: usize, value: f32) {
        self.features[dim] = value;
    }

    /// Size of the binary encoding: one `f32` per coordinate plus the label.
    pub fn encoded_len(&self) -> usize {
        FLOAT_WIDTH * (self.features.len() + 1)
    }

    /// Encodes the point into a new buffer of exactly `encoded_len()` bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.encoded_len());
        for value in self.features.iter().chain(std::iter::once(&self.label)) {
            buf.extend_from_slice(&value.to_be_bytes());
        }
        buf
    }

    /// Decodes `bytes` into this point. `bytes` must hold exactly
    /// `encoded_len()` bytes; a longer slice is rejected with `InvalidData`
    /// after the point has been overwritten.
    pub fn read_from_slice(&mut self, bytes: &[u8]) -> io::Result<()> {
        let mut input = bytes;
        self.read(&mut input)?;
        if !input.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "{} trailing bytes after a {}-dimensional labeled point",
                    input.len(),
                    self.dimensions()
                ),
            ));
        }
        Ok(())
    }

    /// Sum of coordinates and label, truncated to an integer, modulo 1117.
    ///
    /// Cheap and collision-prone. Equal points always share a hash code.
    pub fn hash_code(&self) -> i32 {
        let sum = self.features.iter().fold(0.0_f32, |acc, &c| acc + c) + self.label;
        (sum as i32) % HASH_MODULUS
    }
}

impl Point for LabeledPoint {
    fn dimensions(&self) -> usize {
        LabeledPoint::dimensions(self)
    }

    fn get_value(&self, dim: usize) -> f64 {
        LabeledPoint::get_value(self, dim)
    }
}

impl Convertable for LabeledPoint {
    /// Overwrites each coordinate in index order, then the label.
    ///
    /// Not atomic: if the stream fails partway, the coordinates read so far
    /// keep their new values and the rest keep their old ones.
    fn read<R: Read + ?Sized>(&mut self, input: &mut R) -> io::Result<()> {
        for c in self.features.iter_mut() {
            *c = read_f32(input)?;
        }
        self.label = read_f32(input)?;
        trace!(dimensions = self.features.len(), label = self.label, "decoded labeled point");
        Ok(())
    }

    fn write<W: Write + ?Sized>(&self, output: &mut W) -> io::Result<()> {
        for &c in &self.features {
            write_f32(output, c)?;
        }
        write_f32(output, self.label)?;
        trace!(dimensions = self.features.len(), label = self.label, "encoded labeled point");
        Ok(())
    }
}

// Coordinates compare by bit pattern with every NaN collapsed to one, so
// 0.0 and -0.0 differ and NaN equals NaN. The label compares numerically
// except that NaN equals NaN.
impl PartialEq for LabeledPoint {
    fn eq(&self, other: &Self) -> bool {
        self.features.len() == other.features.len()
            && self
                .features
                .iter()
                .zip(&other.features)
                .all(|(&a, &b)| canonical_bits(a) == canonical_bits(b))
            && OrderedFloat(self.label) == OrderedFloat(other.label)
    }
}

fn canonical_bits(value: f32) -> u32 {
    if value.is_nan() {
        f32::NAN.to_bits()
    } else {
        value.to_bits()
    }
}

impl Eq for LabeledPoint {}

impl Hash for LabeledPoint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code());
    }
}

impl fmt::Display for LabeledPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.features {
            write!(f, "{:?}\t", c)?;
        }
        write!(f, "{:?}\t", self.label)
    }
}

impl From<Vec<f32>> for LabeledPoint {
    fn from(features: Vec<f32>) -> Self {
        LabeledPoint::unlabeled(features)
    }
}

impl From<(Vec<f32>, f32)> for LabeledPoint {
    fn from((features, label): (Vec<f32>, f32)) -> Self {
        LabeledPoint::new(features, label)
    }
}
