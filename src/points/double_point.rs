//! Double-precision point, the source type for narrowing conversions.

use std::io::{self, Read, Write};

use super::traits::{Convertable, Point};
use crate::stream::primitives::{read_f64, write_f64};

/// A point whose coordinates are stored as `f64`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DoublePoint {
    coordinates: Vec<f64>,
}

impl DoublePoint {
    pub fn new(coordinates: Vec<f64>) -> Self {
        DoublePoint { coordinates }
    }

    /// Origin point of the given dimensionality.
    pub fn zeros(dimensions: usize) -> Self {
        DoublePoint { coordinates: vec![0.0; dimensions] }
    }

    pub fn coordinates(&self) -> &[f64] {
        &self.coordinates
    }
}

impl Point for DoublePoint {
    fn dimensions(&self) -> usize {
        self.coordinates.len()
    }

    fn get_value(&self, dim: usize) -> f64 {
        self.coordinates[dim]
    }
}

impl Convertable for DoublePoint {
    fn read<R: Read + ?Sized>(&mut self, input: &mut R) -> io::Result<()> {
        for c in self.coordinates.iter_mut() {
            *c = read_f64(input)?;
        }
        Ok(())
    }

    fn write<W: Write + ?Sized>(&self, output: &mut W) -> io::Result<()> {
        for &c in &self.coordinates {
            write_f64(output, c)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_double_point_roundtrip() {
        let p = DoublePoint::new(vec![0.1, -3.5, 1e300]);
        let mut buf = Vec::new();
        p.write(&mut buf).unwrap();
        assert_eq!(buf.len(), 24);

        let mut q = DoublePoint::zeros(3);
        q.read(&mut Cursor::new(buf)).unwrap();
        assert_eq!(p, q);
    }

    #[test]
    fn test_get_value() {
        let p = DoublePoint::new(vec![1.5, 2.5]);
        assert_eq!(p.dimensions(), 2);
        assert_eq!(p.get_value(1), 2.5);
    }
}
