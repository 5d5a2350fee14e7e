//! Errors raised by the stream layer.
//!
//! The point codec itself only ever fails with `std::io::Error`; the variants
//! below cover the framing added on top of it by [`crate::stream`].

use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StreamError {
    /// The underlying stream failed, including truncation (`UnexpectedEof`).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid dataset magic bytes: {found:?}")]
    InvalidMagic { found: [u8; 4] },

    #[error("unsupported dataset version: {0}")]
    UnsupportedVersion(u32),

    /// A point does not have the dimensionality of the stream it belongs to.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    /// A dataset header declares more dimensions than a reader will accept.
    #[error("dataset declares {dimensions} dimensions, more than the limit of {max}")]
    DimensionsTooLarge { dimensions: u64, max: u64 },

    /// The header promised a different number of points than were present.
    #[error("dataset header declares {declared} points but {found} were read")]
    CountMismatch { declared: u64, found: u64 },

    #[error("{0} trailing bytes after the last point")]
    TrailingBytes(usize),
}

pub type StreamResult<T> = Result<T, StreamError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_context() {
        let e = StreamError::DimensionMismatch { expected: 3, found: 4 };
        assert_eq!(e.to_string(), "dimension mismatch: expected 3, found 4");

        let e = StreamError::CountMismatch { declared: 10, found: 7 };
        assert!(e.to_string().contains("declares 10"));
    }

    #[test]
    fn test_from_io_error() {
        let e: StreamError = io::Error::new(io::ErrorKind::UnexpectedEof, "short").into();
        assert!(matches!(e, StreamError::Io(ref inner) if inner.kind() == io::ErrorKind::UnexpectedEof));
    }
}
