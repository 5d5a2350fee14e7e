//! Sequential access to streams of same-dimension labeled points.
//!
//! A stream is just encoded points back to back. Nothing in it records the
//! dimensionality, so both sides must agree on it beforehand.

use std::io::{self, Read, Write};

use tracing::debug;

use crate::error::{StreamError, StreamResult};
use crate::points::{Convertable, LabeledPoint};
use crate::stream::primitives::FLOAT_WIDTH;

/// Iterates over the `dimensions`-dimensional points encoded in `input`.
///
/// Iteration ends when the stream is exhausted exactly on a point boundary.
/// A partial trailing record yields one `UnexpectedEof` error and then ends.
///
/// The record buffer grows with the bytes actually read, so a large
/// `dimensions` over a short stream costs no more memory than the stream.
#[derive(Debug)]
pub struct PointReader<R> {
    input: R,
    dimensions: usize,
    record_len: usize,
    record: Vec<u8>,
    points_read: u64,
    finished: bool,
}

impl<R: Read> PointReader<R> {
    /// Fails with `InvalidInput` when a record of `dimensions` coordinates
    /// plus the label would not fit in `usize` bytes.
    pub fn new(input: R, dimensions: usize) -> io::Result<Self> {
        let record_len = dimensions
            .checked_add(1)
            .and_then(|values| values.checked_mul(FLOAT_WIDTH))
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("record size overflows for {} dimensions", dimensions),
                )
            })?;
        Ok(PointReader {
            input,
            dimensions,
            record_len,
            record: Vec::new(),
            points_read: 0,
            finished: false,
        })
    }

    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Number of points successfully decoded so far.
    pub fn points_read(&self) -> u64 {
        self.points_read
    }

    pub fn into_inner(self) -> R {
        self.input
    }

    // Like `read_exact`, but reports how much was filled so a clean EOF can
    // be told apart from a truncated record.
    fn fill_record(&mut self) -> io::Result<usize> {
        self.record.clear();
        let mut limited = (&mut self.input).take(self.record_len as u64);
        limited.read_to_end(&mut self.record)
    }
}

impl<R: Read> Iterator for PointReader<R> {
    type Item = StreamResult<LabeledPoint>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let filled = match self.fill_record() {
            Ok(n) => n,
            Err(e) => {
                self.finished = true;
                return Some(Err(e.into()));
            }
        };

        if filled == 0 {
            self.finished = true;
            debug!(points = self.points_read, dimensions = self.dimensions, "point stream exhausted");
            return None;
        }
        if filled < self.record_len {
            self.finished = true;
            return Some(Err(StreamError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!(
                    "truncated point record: {} of {} bytes after {} points",
                    filled,
                    self.record_len,
                    self.points_read
                ),
            ))));
        }

        let mut point = LabeledPoint::with_dimensions(self.dimensions);
        if let Err(e) = point.read_from_slice(&self.record) {
            self.finished = true;
            return Some(Err(e.into()));
        }
        self.points_read += 1;
        Some(Ok(point))
    }
}

/// Writes `points` back to back. Every point must have `dimensions`
/// coordinates; the first one that does not aborts the write with
/// `DimensionMismatch` (earlier points are already written).
///
/// Returns the number of points written.
pub fn write_points<'a, W, I>(output: &mut W, dimensions: usize, points: I) -> StreamResult<u64>
where
    W: Write + ?Sized,
    I: IntoIterator<Item = &'a LabeledPoint>,
{
    let mut written = 0u64;
    for point in points {
        if point.dimensions() != dimensions {
            return Err(StreamError::DimensionMismatch {
                expected: dimensions,
                found: point.dimensions(),
            });
        }
        point.write(output)?;
        written += 1;
    }
    Ok(written)
}
