//! Fixed-width big-endian float primitives.
//!
//! Every value in the point codec is a 4-byte IEEE-754 single, most significant
//! byte first (the `DataOutput` convention). `DoublePoint` uses the 8-byte
//! double-precision counterpart.

use std::io::{self, Read, Write};

/// Width in bytes of one encoded `f32`.
pub const FLOAT_WIDTH: usize = 4;

/// Width in bytes of one encoded `f64`.
pub const DOUBLE_WIDTH: usize = 8;

/// Reads one big-endian `f32`. A short stream yields `UnexpectedEof`.
pub fn read_f32<R: Read + ?Sized>(input: &mut R) -> io::Result<f32> {
    let mut bytes = [0u8; FLOAT_WIDTH];
    input.read_exact(&mut bytes)?;
    Ok(f32::from_be_bytes(bytes))
}

/// Writes one big-endian `f32`.
pub fn write_f32<W: Write + ?Sized>(output: &mut W, value: f32) -> io::Result<()> {
    output.write_all(&value.to_be_bytes())
}

/// Reads one big-endian `f64`.
pub fn read_f64<R: Read + ?Sized>(input: &mut R) -> io::Result<f64> {
    let mut bytes = [0u8; DOUBLE_WIDTH];
    input.read_exact(&mut bytes)?;
    Ok(f64::from_be_bytes(bytes))
}

/// Writes one big-endian `f64`.
pub fn write_f64<W: Write + ?Sized>(output: &mut W, value: f64) -> io::Result<()> {
    output.write_all(&value.to_be_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_f32_is_big_endian() {
        let mut buf = Vec::new();
        write_f32(&mut buf, 1.0).unwrap();
        // 1.0f32 == 0x3F800000
        assert_eq!(buf, vec![0x3F, 0x80, 0x00, 0x00]);
    }

    #[test]
    fn test_f64_is_big_endian() {
        let mut buf = Vec::new();
        write_f64(&mut buf, -2.0).unwrap();
        assert_eq!(buf, vec![0xC0, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(read_f64(&mut Cursor::new(buf)).unwrap(), -2.0);
    }

    #[test]
    fn test_read_f32_short_input() {
        let mut cursor = Cursor::new(vec![0x3F, 0x80]);
        let err = read_f32(&mut cursor).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_nan_bits_survive() {
        let nan = f32::from_bits(0x7FC0_0001);
        let mut buf = Vec::new();
        write_f32(&mut buf, nan).unwrap();
        let back = read_f32(&mut Cursor::new(buf)).unwrap();
        assert_eq!(back.to_bits(), 0x7FC0_0001);
    }
}
