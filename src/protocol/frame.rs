//! Framing
//!
//! Cuts request frames out of a byte stream and writes response frames back.
//!
//! ## Short-read framing
//! The protocol carries no length prefix or delimiter. A frame ends at the
//! first read that returns fewer bytes than the read buffer holds:
//!
//! ```text
//! read(2048) -> 2048  keep going
//! read(2048) -> 2048  keep going
//! read(2048) ->  317  frame = 4413 bytes
//! ```
//!
//! Known limitation: a frame whose length is an exact multiple of the buffer
//! size is only terminated by the *next* read, which blocks until the peer
//! sends more, half-closes its side, or the read timeout fires.

use std::io::{ErrorKind, Read, Write};

use bytes::{Bytes, BytesMut};

use crate::error::{CatalogError, Result};

/// Source of complete request frames
pub trait FrameReader {
    /// Read the next frame.
    ///
    /// Returns `Ok(None)` if the peer closed the stream before sending
    /// anything.
    fn read_frame(&mut self) -> Result<Option<Bytes>>;
}

/// Frame reader implementing short-read framing
pub struct ShortReadFramer<R> {
    inner: R,
    buffer_size: usize,
    max_frame_size: usize,
}

impl<R: Read> ShortReadFramer<R> {
    /// Wrap a reader. `buffer_size` is the size of every individual read.
    pub fn new(inner: R, buffer_size: usize, max_frame_size: usize) -> Self {
        Self {
            inner,
            buffer_size: buffer_size.max(1),
            max_frame_size,
        }
    }

    pub fn get_ref(&self) -> &R {
        &self.inner
    }
}

impl<R: Read> FrameReader for ShortReadFramer<R> {
    fn read_frame(&mut self) -> Result<Option<Bytes>> {
        let mut chunk = vec![0u8; self.buffer_size];
        let mut frame = BytesMut::with_capacity(self.buffer_size);

        loop {
            let n = match self.inner.read(&mut chunk) {
                Ok(n) => n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };

            frame.extend_from_slice(&chunk[..n]);

            if frame.len() > self.max_frame_size {
                return Err(CatalogError::FrameTooLarge {
                    size: frame.len(),
                    max: self.max_frame_size,
                });
            }

            if n < self.buffer_size {
                break;
            }
        }

        if frame.is_empty() {
            return Ok(None);
        }

        Ok(Some(frame.freeze()))
    }
}

/// Write a complete frame and flush it
pub fn write_frame<W: Write>(writer: &mut W, frame: &[u8]) -> Result<()> {
    writer.write_all(frame)?;
    writer.flush()?;
    Ok(())
}
