//! Primitive readers for little-endian header fields

use std::io::{self, Read};

use crate::error::FormatError;

/// Read an exact byte count, mapping end-of-stream to `TruncatedData` and
/// passing every other stream failure through unchanged.
pub(crate) fn read_exact<R: Read>(reader: &mut R, buf: &mut [u8]) -> Result<(), FormatError> {
    reader.read_exact(buf).map_err(|err| match err.kind() {
        io::ErrorKind::UnexpectedEof => FormatError::TruncatedData,
        _ => FormatError::Io(err),
    })
}

/// Read a fixed-size byte array
pub(crate) fn read_array<const N: usize, R: Read>(reader: &mut R) -> Result<[u8; N], FormatError> {
    let mut buf = [0u8; N];
    read_exact(reader, &mut buf)?;
    Ok(buf)
}

/// Read a single byte
pub(crate) fn read_u8<R: Read>(reader: &mut R) -> Result<u8, FormatError> {
    let buf: [u8; 1] = read_array(reader)?;
    Ok(buf[0])
}

/// Read a single byte as signed
pub(crate) fn read_i8<R: Read>(reader: &mut R) -> Result<i8, FormatError> {
    Ok(read_u8(reader)? as i8)
}

/// Read a 16-bit little-endian integer
pub(crate) fn read_u16<R: Read>(reader: &mut R) -> Result<u16, FormatError> {
    Ok(u16::from_le_bytes(read_array(reader)?))
}

/// Read a 32-bit little-endian integer
pub(crate) fn read_u32<R: Read>(reader: &mut R) -> Result<u32, FormatError> {
    Ok(u32::from_le_bytes(read_array(reader)?))
}

/// Decode a fixed-capacity name field: stop at the first NUL, trim trailing
/// whitespace.
pub(crate) fn read_string(bytes: &[u8]) -> String {
    let len = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    String::from_utf8_lossy(&bytes[..len]).trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_string() {
        assert_eq!(read_string(b"Hello\0World"), "Hello");
        assert_eq!(read_string(b"No null"), "No null");
        assert_eq!(read_string(b"Trailing   "), "Trailing");
        assert_eq!(read_string(b""), "");
    }

    #[test]
    fn test_short_read_is_truncation() {
        let mut cursor = Cursor::new(&[0x01, 0x02][..]);
        let result = read_u32(&mut cursor);
        assert!(matches!(result, Err(FormatError::TruncatedData)));
    }

    #[test]
    fn test_little_endian_decoding() {
        let mut cursor = Cursor::new(&[0x50, 0x00, 0xAB, 0x20, 0x00, 0x00][..]);
        assert_eq!(read_u16(&mut cursor).unwrap(), 0x0050);
        assert_eq!(read_u32(&mut cursor).unwrap(), 0x20AB);
    }
}
