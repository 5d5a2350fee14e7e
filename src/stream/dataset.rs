//! Self-describing dataset files.
//!
//! ## Format
//!
//! ```text
//! [Header: 20 bytes, big-endian]
//!   - Magic: "LPTS" (4 bytes)
//!   - Version: u32 (4 bytes)
//!   - Dimensionality: u32 (4 bytes)
//!   - Point count: u64 (8 bytes)
//!
//! [Points: count * 4 * (dimensionality + 1) bytes]
//!   Each point in the plain labeled point encoding.
//! ```
//!
//! The header only wraps the point codec; the per-point encoding is the same
//! one `LabeledPoint::write` produces.

use std::io::{self, Read, Write};

use tracing::{debug, warn};

use super::reader::{write_points, PointReader};
use crate::error::{StreamError, StreamResult};
use crate::points::LabeledPoint;

/// Magic bytes at the start of every dataset.
pub const MAGIC: &[u8; 4] = b"LPTS";

/// Current format version.
pub const VERSION: u32 = 1;

/// Header size in bytes.
pub const HEADER_LEN: usize = 20;

/// Largest dimensionality a dataset header may declare.
pub const MAX_DIMENSIONS: u32 = 1 << 20;

// Upper bound on the capacity reserved from an untrusted header count.
const MAX_PREALLOCATED_POINTS: u64 = 4096;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetHeader {
    pub version: u32,
    pub dimensions: u32,
    pub count: u64,
}

impl DatasetHeader {
    pub fn new(dimensions: u32, count: u64) -> Self {
        DatasetHeader { version: VERSION, dimensions, count }
    }

    pub fn write_to<W: Write + ?Sized>(&self, output: &mut W) -> io::Result<()> {
        output.write_all(MAGIC)?;
        output.write_all(&self.version.to_be_bytes())?;
        output.write_all(&self.dimensions.to_be_bytes())?;
        output.write_all(&self.count.to_be_bytes())?;
        Ok(())
    }

    /// Reads and validates a header. Dimensionalities above
    /// [`MAX_DIMENSIONS`] are rejected before any point data is touched.
    pub fn read_from<R: Read + ?Sized>(input: &mut R) -> StreamResult<Self> {
        let mut magic = [0u8; 4];
        input.read_exact(&mut magic)?;
        if &magic != MAGIC {
            return Err(StreamError::InvalidMagic { found: magic });
        }

        let mut version_bytes = [0u8; 4];
        input.read_exact(&mut version_bytes)?;
        let version = u32::from_be_bytes(version_bytes);
        if version != VERSION {
            return Err(StreamError::UnsupportedVersion(version));
        }

        let mut dims_bytes = [0u8; 4];
        input.read_exact(&mut dims_bytes)?;
        let dimensions = u32::from_be_bytes(dims_bytes);
        if dimensions > MAX_DIMENSIONS {
            return Err(StreamError::DimensionsTooLarge {
                dimensions: u64::from(dimensions),
                max: u64::from(MAX_DIMENSIONS),
            });
        }

        let mut count_bytes = [0u8; 8];
        input.read_exact(&mut count_bytes)?;
        let count = u64::from_be_bytes(count_bytes);

        Ok(DatasetHeader { version, dimensions, count })
    }
}

/// A decoded dataset: the shared dimensionality and the points in file order.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub dimensions: usize,
    pub points: Vec<LabeledPoint>,
}

/// Writes a header followed by `points`, all of which must have `dimensions`
/// coordinates.
pub fn write_dataset<W: Write + ?Sized>(
    output: &mut W,
    dimensions: usize,
    points: &[LabeledPoint],
) -> StreamResult<()> {
    let dims = match u32::try_from(dimensions) {
        Ok(d) if d <= MAX_DIMENSIONS => d,
        _ => {
            return Err(StreamError::DimensionsTooLarge {
                dimensions: dimensions as u64,
                max: u64::from(MAX_DIMENSIONS),
            });
        }
    };

    // Checked up front so a bad point never leaves a half-written file.
    if let Some(bad) = points.iter().find(|p| p.dimensions() != dimensions) {
        return Err(StreamError::DimensionMismatch {
            expected: dimensions,
            found: bad.dimensions(),
        });
    }

    let header = DatasetHeader::new(dims, points.len() as u64);
    header.write_to(output)?;
    let written = write_points(output, dimensions, points)?;
    debug!(dimensions, points = written, "wrote dataset");
    Ok(())
}

/// Reads a complete dataset. The stream must contain exactly the number of
/// points declared in the header and nothing after them.
pub fn read_dataset<R: Read>(mut input: R) -> StreamResult<Dataset> {
    let header = DatasetHeader::read_from(&mut input)?;
    let dimensions = header.dimensions as usize;
    debug!(dimensions, count = header.count, "reading dataset");

    let mut reader = PointReader::new(input, dimensions)?;
    let mut points = Vec::with_capacity(header.count.min(MAX_PREALLOCATED_POINTS) as usize);
    while (points.len() as u64) < header.count {
        match reader.next() {
            Some(point) => points.push(point?),
            None => {
                return Err(StreamError::CountMismatch {
                    declared: header.count,
                    found: points.len() as u64,
                });
            }
        }
    }

    let mut rest = reader.into_inner();
    let trailing = io::copy(&mut rest, &mut io::sink())?;
    if trailing > 0 {
        warn!(trailing, "dataset has bytes after the declared points");
        return Err(StreamError::TrailingBytes(trailing as usize));
    }

    Ok(Dataset { dimensions, points })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn sample_points() -> Vec<LabeledPoint> {
        vec![
            LabeledPoint::new(vec![0.5, 1.5, 2.5], 1.0),
            LabeledPoint::new(vec![-0.5, 0.0, 9.0], 2.0),
        ]
    }

    #[test]
    fn test_dataset_roundtrip() {
        let points = sample_points();
        let mut buf = Vec::new();
        write_dataset(&mut buf, 3, &points).unwrap();
        assert_eq!(buf.len(), HEADER_LEN + 2 * 16);

        let dataset = read_dataset(Cursor::new(buf)).unwrap();
        assert_eq!(dataset.dimensions, 3);
        assert_eq!(dataset.points, points);
    }

    #[test]
    fn test_empty_dataset_keeps_dimensions() {
        let mut buf = Vec::new();
        write_dataset(&mut buf, 7, &[]).unwrap();
        assert_eq!(buf.len(), HEADER_LEN);

        let dataset = read_dataset(buf.as_slice()).unwrap();
        assert_eq!(dataset.dimensions, 7);
        assert!(dataset.points.is_empty());
    }

    #[test]
    fn test_header_layout() {
        let mut buf = Vec::new();
        DatasetHeader::new(3, 2).write_to(&mut buf).unwrap();
        assert_eq!(&buf[0..4], b"LPTS");
        assert_eq!(&buf[4..8], &[0, 0, 0, 1]);
        assert_eq!(&buf[8..12], &[0, 0, 0, 3]);
        assert_eq!(&buf[12..20], &[0, 0, 0, 0, 0, 0, 0, 2]);
    }

    #[test]
    fn test_invalid_magic() {
        let bad = b"BAD\0\0\0\0\x01\0\0\0\x01\0\0\0\0\0\0\0\0";
        let result = read_dataset(&bad[..]);
        assert!(matches!(result, Err(StreamError::InvalidMagic { .. })));
    }

    #[test]
    fn test_unsupported_version() {
        let mut buf = Vec::new();
        DatasetHeader { version: 9, dimensions: 1, count: 0 }.write_to(&mut buf).unwrap();
        assert!(matches!(read_dataset(buf.as_slice()), Err(StreamError::UnsupportedVersion(9))));
    }

    #[test]
    fn test_missing_points() {
        let mut buf = Vec::new();
        write_dataset(&mut buf, 3, &sample_points()).unwrap();
        buf[19] = 5; // declare five points

        let err = read_dataset(buf.as_slice()).unwrap_err();
        assert!(matches!(err, StreamError::CountMismatch { declared: 5, found: 2 }));
    }

    #[test]
    fn test_trailing_bytes() {
        let mut buf = Vec::new();
        write_dataset(&mut buf, 3, &sample_points()).unwrap();
        buf.extend_from_slice(&[1, 2, 3]);

        let err = read_dataset(buf.as_slice()).unwrap_err();
        assert!(matches!(err, StreamError::TrailingBytes(3)));
    }

    #[test]
    fn test_mismatched_point_writes_nothing() {
        let mut points = sample_points();
        points.push(LabeledPoint::with_dimensions(2));
        let mut buf = Vec::new();
        let err = write_dataset(&mut buf, 3, &points).unwrap_err();
        assert!(matches!(err, StreamError::DimensionMismatch { expected: 3, found: 2 }));
        assert!(buf.is_empty());
    }

    #[test]
    fn test_huge_header_dimensions_rejected() {
        let mut buf = Vec::new();
        DatasetHeader::new(u32::MAX, 1).write_to(&mut buf).unwrap();

        let err = read_dataset(buf.as_slice()).unwrap_err();
        assert!(matches!(
            err,
            StreamError::DimensionsTooLarge { dimensions, max }
                if dimensions == u64::from(u32::MAX) && max == u64::from(MAX_DIMENSIONS)
        ));
    }

    #[test]
    fn test_dimension_limit_is_inclusive() {
        let mut buf = Vec::new();
        DatasetHeader::new(MAX_DIMENSIONS, 0).write_to(&mut buf).unwrap();
        let dataset = read_dataset(buf.as_slice()).unwrap();
        assert_eq!(dataset.dimensions, MAX_DIMENSIONS as usize);

        let mut out = Vec::new();
        let err = write_dataset(&mut out, MAX_DIMENSIONS as usize + 1, &[]).unwrap_err();
        assert!(matches!(err, StreamError::DimensionsTooLarge { .. }));
        assert!(out.is_empty());
    }
}
