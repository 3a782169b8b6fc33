//! Protocol module - wire format, variable-length integers, and packet
//! assembly.
//!
//! This module implements the encode side of the binary format:
//! - 1-4 byte self-describing integer encoding
//! - two-byte flags field (version, presence bits, status code)
//! - frame assembly with self-sizing length field and CRC32 trailer

mod packet;
mod varint;
mod wire_format;

pub use packet::{build_packet, MAX_PACKET_LENGTH};
pub use varint::{read_number, write_number, write_prefixed, MAX_NUMBER};
pub use wire_format::{encode_flags, flags, SIGNATURE, VERSION};
