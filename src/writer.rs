//! Result stream writer.
//!
//! [`ResultStream`] encodes events and hands each complete frame to an
//! async sink in a single write call. The frame is fully materialized in
//! memory before any byte reaches the sink, so an encode failure never
//! leaves a partial frame behind; sink atomicity beyond that is the
//! sink's own contract.

use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::error::Result;
use crate::event::Event;
use crate::protocol::build_packet;

/// Writes encoded result events to an async sink.
///
/// The writer holds no state between events: each [`status`] call is a
/// pure function of one event plus the protocol constants. Retries on
/// sink failure are the caller's concern.
///
/// [`status`]: ResultStream::status
#[derive(Debug)]
pub struct ResultStream<W> {
    sink: W,
}

impl<W: AsyncWrite + Unpin> ResultStream<W> {
    /// Create a stream writing to `sink`.
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    /// Report one event: encode it and write the full frame to the sink.
    ///
    /// # Errors
    ///
    /// Encode errors ([`NumberTooLarge`], [`PacketTooLong`]) are returned
    /// before any byte is written. Sink failures surface as [`Sink`]
    /// carrying the underlying cause.
    ///
    /// [`NumberTooLarge`]: crate::ResultwireError::NumberTooLarge
    /// [`PacketTooLong`]: crate::ResultwireError::PacketTooLong
    /// [`Sink`]: crate::ResultwireError::Sink
    pub async fn status(&mut self, event: &Event) -> Result<()> {
        let packet = build_packet(event)?;
        self.sink.write_all(&packet).await?;
        self.sink.flush().await?;
        tracing::trace!(len = packet.len(), "frame written");
        Ok(())
    }

    /// Get a reference to the underlying sink.
    pub fn get_ref(&self) -> &W {
        &self.sink
    }

    /// Consume the stream, returning the underlying sink.
    pub fn into_inner(self) -> W {
        self.sink
    }
}
