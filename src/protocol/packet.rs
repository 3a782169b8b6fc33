//! Packet assembly.
//!
//! One [`Event`] becomes exactly one frame. The optional fields are
//! encoded independently and concatenated in fixed order (timestamp, test
//! id, MIME type, file content), the total length is spliced in after the
//! flags, and a big-endian CRC32 of everything before it is appended.
//!
//! The length field covers the whole frame, itself and the CRC32 trailer
//! included, so its own size feeds back into the value it encodes. The
//! bucket test in [`packet_length`] resolves that circularity.

use std::time::{SystemTime, UNIX_EPOCH};

use bytes::{BufMut, Bytes, BytesMut};

use crate::error::{Result, ResultwireError};
use crate::event::Event;
use crate::protocol::varint::{write_number, write_prefixed};
use crate::protocol::wire_format::{encode_flags, SIGNATURE};

/// Hard ceiling on the total frame size, fixed by the 3-byte length field.
pub const MAX_PACKET_LENGTH: usize = 4_194_303;

/// Byte count of the signature plus the two flag bytes.
const PREFIX_LEN: usize = 3;

/// Byte count of the trailing CRC32.
const CRC_LEN: usize = 4;

/// Compute the total frame length for a body of `base_len` bytes.
///
/// `base_len` counts the signature, flags, and optional fields. The total
/// additionally covers the CRC32 trailer and the length field itself; the
/// field is restricted to the 1-3 byte forms, capping the frame at
/// [`MAX_PACKET_LENGTH`] bytes even though the general integer encoding
/// has a 4-byte form.
fn packet_length(base_len: usize) -> Result<u32> {
    let len = base_len + CRC_LEN;
    let total = match len {
        0..=62 => len + 1,
        63..=16_381 => len + 2,
        16_382..=4_194_300 => len + 3,
        _ => return Err(ResultwireError::PacketTooLong(len)),
    };
    Ok(total as u32)
}

/// Encode the timestamp field: 4-byte big-endian Unix seconds, then the
/// nanosecond remainder as a variable-length integer.
///
/// Seconds are truncated to 32 bits; instants before the epoch clamp to
/// the epoch.
fn encode_timestamp(buf: &mut BytesMut, timestamp: SystemTime) -> Result<()> {
    let elapsed = timestamp.duration_since(UNIX_EPOCH).unwrap_or_default();
    buf.put_u32(elapsed.as_secs() as u32);
    write_number(buf, elapsed.subsec_nanos())
}

/// Encode the file content field: length-prefixed name, then
/// length-prefixed raw bytes.
///
/// An empty payload still gets its zero-length prefix, so a named
/// attachment with no content is representable.
fn encode_file_content(buf: &mut BytesMut, name: &str, content: &[u8]) -> Result<()> {
    write_prefixed(buf, name.as_bytes())?;
    write_prefixed(buf, content)
}

/// Encode `event` into a complete frame.
///
/// The four optional fields are pure functions of the event with no
/// interdependency; they are emitted in the fixed wire order regardless
/// of how they are computed.
///
/// # Errors
///
/// Returns [`ResultwireError::NumberTooLarge`] if a field length cannot
/// be represented, or [`ResultwireError::PacketTooLong`] if the frame
/// would exceed [`MAX_PACKET_LENGTH`]. No partial frame is produced on
/// either.
pub fn build_packet(event: &Event) -> Result<Bytes> {
    let mut body = BytesMut::with_capacity(64);
    body.put_u8(SIGNATURE);
    body.put_slice(&encode_flags(event));

    if let Some(timestamp) = event.timestamp {
        encode_timestamp(&mut body, timestamp)?;
    }
    if !event.test_id.is_empty() {
        write_prefixed(&mut body, event.test_id.as_bytes())?;
    }
    if !event.mime_type.is_empty() {
        write_prefixed(&mut body, event.mime_type.as_bytes())?;
    }
    if !event.file_name.is_empty() {
        encode_file_content(&mut body, &event.file_name, &event.file_bytes)?;
    }

    let total = packet_length(body.len())?;

    // Splice the length in between the flags and the field data.
    let mut frame = BytesMut::with_capacity(total as usize);
    frame.extend_from_slice(&body[..PREFIX_LEN]);
    write_number(&mut frame, total)?;
    frame.extend_from_slice(&body[PREFIX_LEN..]);

    let crc = crc32fast::hash(&frame);
    frame.put_u32(crc);

    Ok(frame.freeze())
}
