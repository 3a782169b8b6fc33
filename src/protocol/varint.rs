//! Variable-length integer encoding.
//!
//! Non-negative integers are packed into 1-4 bytes. The two most
//! significant bits of the first byte carry the byte count, the remaining
//! bits hold the most significant value bits:
//!
//! ```text
//! 00 = 1 byte   [0, 63]
//! 01 = 2 bytes  [64, 16383]
//! 10 = 3 bytes  [16384, 4194303]
//! 11 = 4 bytes  [4194304, 1073741823]
//! ```
//!
//! Multi-byte forms are big endian. Values of 2^30 and above are
//! unrepresentable regardless of field.

use bytes::BufMut;

use crate::error::{Result, ResultwireError};

/// Largest integer representable by the 4-byte form.
pub const MAX_NUMBER: u32 = (1 << 30) - 1;

/// Append the variable-length encoding of `n` to `buf`.
///
/// # Errors
///
/// Returns [`ResultwireError::NumberTooLarge`] if `n` exceeds
/// [`MAX_NUMBER`].
pub fn write_number(buf: &mut impl BufMut, n: u32) -> Result<()> {
    match n {
        0..=63 => buf.put_u8(n as u8),
        64..=16_383 => buf.put_u16(n as u16 | 0x4000),
        16_384..=4_194_303 => {
            // Size tag in the first byte, the low 16 bits follow.
            buf.put_u8((n >> 16) as u8 | 0x80);
            buf.put_u16(n as u16);
        }
        4_194_304..=MAX_NUMBER => buf.put_u32(n | 0xc000_0000),
        _ => return Err(ResultwireError::NumberTooLarge(u64::from(n))),
    }
    Ok(())
}

/// Append `payload` to `buf`, prefixed with its variable-length byte count.
///
/// Text payloads are their raw UTF-8 bytes, no escaping.
///
/// # Errors
///
/// Returns [`ResultwireError::NumberTooLarge`] if the payload length
/// exceeds [`MAX_NUMBER`].
pub fn write_prefixed(buf: &mut impl BufMut, payload: &[u8]) -> Result<()> {
    if payload.len() > MAX_NUMBER as usize {
        return Err(ResultwireError::NumberTooLarge(payload.len() as u64));
    }
    write_number(buf, payload.len() as u32)?;
    buf.put_slice(payload);
    Ok(())
}

/// Decode a variable-length integer from the front of `buf`.
///
/// Reads the size tag from the first byte and reconstructs the value from
/// the remaining bytes. Returns the value and the number of bytes
/// consumed, or `None` if the buffer is shorter than the tag declares.
pub fn read_number(buf: &[u8]) -> Option<(u32, usize)> {
    let first = *buf.first()?;
    let size = usize::from(first >> 6) + 1;
    if buf.len() < size {
        return None;
    }
    let mut value = u32::from(first & 0x3f);
    for &byte in &buf[1..size] {
        value = value << 8 | u32::from(byte);
    }
    Some((value, size))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::BytesMut;

    fn encode(n: u32) -> Vec<u8> {
        let mut buf = BytesMut::new();
        write_number(&mut buf, n).unwrap();
        buf.to_vec()
    }

    #[test]
    fn test_one_byte_range() {
        assert_eq!(encode(0), vec![0x00]);
        assert_eq!(encode(63), vec![0x3f]);
    }

    #[test]
    fn test_two_byte_range() {
        assert_eq!(encode(64), vec![0x40, 0x40]);
        assert_eq!(encode(16_383), vec![0x7f, 0xff]);
    }

    #[test]
    fn test_three_byte_range() {
        assert_eq!(encode(16_384), vec![0x80, 0x40, 0x00]);
        assert_eq!(encode(4_194_303), vec![0xbf, 0xff, 0xff]);
    }

    #[test]
    fn test_four_byte_range() {
        assert_eq!(encode(4_194_304), vec![0xc0, 0x40, 0x00, 0x00]);
        assert_eq!(encode(MAX_NUMBER), vec![0xff, 0xff, 0xff, 0xff]);
    }

    #[test]
    fn test_number_too_large() {
        let mut buf = BytesMut::new();
        let err = write_number(&mut buf, MAX_NUMBER + 1).unwrap_err();
        assert!(matches!(
            err,
            ResultwireError::NumberTooLarge(1_073_741_824)
        ));
        assert!(buf.is_empty());
    }

    #[test]
    fn test_round_trip_at_boundaries() {
        for n in [
            0,
            1,
            63,
            64,
            16_383,
            16_384,
            4_194_303,
            4_194_304,
            999_999_999,
            MAX_NUMBER,
        ] {
            let bytes = encode(n);
            let (value, consumed) = read_number(&bytes).unwrap();
            assert_eq!(value, n, "round trip failed for {n}");
            assert_eq!(consumed, bytes.len());
        }
    }

    #[test]
    fn test_read_number_short_buffer() {
        assert_eq!(read_number(&[]), None);
        // 2-byte tag with only one byte available.
        assert_eq!(read_number(&[0x40]), None);
        // 4-byte tag with three bytes available.
        assert_eq!(read_number(&[0xc0, 0x00, 0x00]), None);
    }

    #[test]
    fn test_write_prefixed() {
        let mut buf = BytesMut::new();
        write_prefixed(&mut buf, b"abc").unwrap();
        assert_eq!(&buf[..], &[0x03, b'a', b'b', b'c']);
    }

    #[test]
    fn test_write_prefixed_empty() {
        let mut buf = BytesMut::new();
        write_prefixed(&mut buf, b"").unwrap();
        assert_eq!(&buf[..], &[0x00]);
    }

    #[test]
    fn test_write_prefixed_two_byte_length() {
        let payload = vec![0xaa; 64];
        let mut buf = BytesMut::new();
        write_prefixed(&mut buf, &payload).unwrap();
        assert_eq!(&buf[..2], &[0x40, 0x40]);
        assert_eq!(buf.len(), 2 + 64);
    }
}
