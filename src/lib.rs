//! # resultwire
//!
//! Encoder for a binary test-result event stream (version 2 wire format).
//!
//! Test runners and harnesses exchange test outcomes as a sequence of
//! self-describing frames. Each frame carries a fixed signature byte, a
//! two-byte flags field (protocol version, field presence bits, 3-bit
//! status code), a self-sizing length field, the optional event fields,
//! and a CRC32 trailer:
//!
//! ```text
//! ┌───────────┬───────┬────────┬───────────┬─────────┬──────┬──────────────┬───────┐
//! │ Signature │ Flags │ Length │ Timestamp │ Test ID │ MIME │ File content │ CRC32 │
//! │ 1 byte    │ 2 B   │ 1-3 B  │ optional  │ opt     │ opt  │ optional     │ 4 B   │
//! └───────────┴───────┴────────┴───────────┴─────────┴──────┴──────────────┴───────┘
//! ```
//!
//! Encoding is a pure, stateless function of one [`Event`];
//! [`ResultStream`] writes each complete frame to an async sink in a
//! single call. Decoding received frames is a consumer concern and not
//! part of this crate.
//!
//! ## Example
//!
//! ```no_run
//! use resultwire::{Event, ResultStream, TestStatus};
//!
//! #[tokio::main]
//! async fn main() -> resultwire::Result<()> {
//!     let mut stream = ResultStream::new(tokio::io::stdout());
//!     stream
//!         .status(&Event {
//!             test_id: "api::login".into(),
//!             status: Some(TestStatus::Success),
//!             ..Event::default()
//!         })
//!         .await
//! }
//! ```

pub mod error;
pub mod event;
pub mod protocol;
pub mod writer;

pub use error::{Result, ResultwireError};
pub use event::{Event, TestStatus};
pub use protocol::build_packet;
pub use writer::ResultStream;
