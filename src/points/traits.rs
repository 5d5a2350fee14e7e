//! Traits shared by every point flavor in the crate.

use std::io::{self, Read, Write};

/// A fixed-dimension point whose coordinates can be read as `f64`.
pub trait Point {
    /// Number of coordinates.
    fn dimensions(&self) -> usize;

    /// Coordinate in dimension `dim`, widened to double precision.
    ///
    /// # Panics
    /// Panics if `dim >= self.dimensions()`.
    fn get_value(&self, dim: usize) -> f64;
}

/// A value that can restore itself from, and dump itself to, a byte stream.
///
/// `read` must consume values in the same order and with the same widths
/// that `write` produced them. The encoding carries no length or type
/// information, so the receiving value has to be shaped correctly before
/// `read` is called.
pub trait Convertable {
    /// Overwrites the state of `self` with values read from `input`.
    fn read<R: Read + ?Sized>(&mut self, input: &mut R) -> io::Result<()>;

    /// Writes the state of `self` to `output`.
    fn write<W: Write + ?Sized>(&self, output: &mut W) -> io::Result<()>;
}
