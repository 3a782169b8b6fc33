//! Wire format constants and flag encoding.
//!
//! Every frame has the layout:
//!
//! ```text
//! ┌───────────┬───────┬────────┬─────────────────┬───────┐
//! │ Signature │ Flags │ Length │ Optional fields │ CRC32 │
//! │ 1 byte    │ 2 B   │ 1-3 B  │ variable        │ 4 B   │
//! └───────────┴───────┴────────┴─────────────────┴───────┘
//! ```
//!
//! The two-byte flags field combines the protocol version (high nibble of
//! the first byte), per-field presence bits, and the 3-bit status code
//! (low bits of the second byte).

use crate::event::Event;

/// Leading byte of every frame.
pub const SIGNATURE: u8 = 0xb3;

/// Protocol version, carried in the high nibble of the first flags byte.
pub const VERSION: u8 = 0x2;

/// Flag bit constants for the two-byte flags field.
pub mod flags {
    /// First flags byte: test identifier field present.
    pub const TEST_ID_PRESENT: u8 = 0x08;
    /// First flags byte: timestamp field present.
    pub const TIMESTAMP_PRESENT: u8 = 0x02;

    /// Second flags byte: file content field present.
    pub const FILE_CONTENT_PRESENT: u8 = 0x40;
    /// Second flags byte: MIME type field present.
    pub const MIME_PRESENT: u8 = 0x20;
    /// Second flags byte: mask for the 3-bit status code.
    pub const STATUS_MASK: u8 = 0x07;

    /// Check if a specific flag is set.
    #[inline]
    pub fn has_flag(byte: u8, flag: u8) -> bool {
        byte & flag != 0
    }
}

/// Compute the two-byte flags field for `event`.
///
/// Presence bits are derived from the field values themselves; attachment
/// presence is keyed on the file name. An absent status contributes zero
/// status bits. All inputs are representable, so this cannot fail.
pub fn encode_flags(event: &Event) -> [u8; 2] {
    let mut high = VERSION << 4;
    let mut low = 0;
    if !event.test_id.is_empty() {
        high |= flags::TEST_ID_PRESENT;
    }
    if event.timestamp.is_some() {
        high |= flags::TIMESTAMP_PRESENT;
    }
    if !event.file_name.is_empty() {
        low |= flags::FILE_CONTENT_PRESENT;
    }
    if !event.mime_type.is_empty() {
        low |= flags::MIME_PRESENT;
    }
    if let Some(status) = event.status {
        low |= status.code();
    }
    [high, low]
}
