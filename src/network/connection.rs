//! Connection Handler
//!
//! Handles individual client connections.
//!
//! Each connection carries exactly one exchange:
//!
//! ```text
//! Reading → Decoding → Validating → Routing → Dispatching → Responding → Closed
//! ```
//!
//! Decode, validation and routing failures still get a response. Transport
//! failures while reading close the connection without one.

use std::io::BufWriter;
use std::net::TcpStream;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::dispatcher::{error_response, Dispatcher};
use crate::error::Result;
use crate::protocol::{encode_response, write_frame, FrameReader, Response, ShortReadFramer};

/// Handles a single client connection
pub struct Connection {
    /// TCP stream reader (short-read framing)
    reader: ShortReadFramer<TcpStream>,

    /// TCP stream writer (buffered for efficiency)
    writer: BufWriter<TcpStream>,

    /// Shared request dispatcher
    dispatcher: Arc<Dispatcher>,

    /// Peer address for logging
    peer_addr: String,
}

impl Connection {
    /// Create a new connection handler
    ///
    /// Sets up framing and buffered output and configures timeouts
    pub fn new(stream: TcpStream, dispatcher: Arc<Dispatcher>, config: &Config) -> Result<Self> {
        // Get peer address for logging before we split the stream
        let peer_addr = stream
            .peer_addr()
            .map(|a| a.to_string())
            .unwrap_or_else(|_| "unknown".to_string());

        // Disable Nagle's algorithm for low latency
        stream.set_nodelay(true)?;

        // Clone stream for separate read/write handles
        let read_stream = stream.try_clone()?;
        let write_stream = stream;

        let mut connection = Self {
            reader: ShortReadFramer::new(
                read_stream,
                config.frame_buffer_size,
                config.max_frame_size,
            ),
            writer: BufWriter::new(write_stream),
            dispatcher,
            peer_addr,
        };
        connection.set_timeouts(config.read_timeout_ms, config.write_timeout_ms)?;

        Ok(connection)
    }

    /// Configure connection timeouts (0 leaves a timeout disabled)
    pub fn set_timeouts(&mut self, read_ms: u64, write_ms: u64) -> Result<()> {
        let read_stream = self.reader.get_ref();
        let write_stream = self.writer.get_ref();

        if read_ms > 0 {
            read_stream.set_read_timeout(Some(Duration::from_millis(read_ms)))?;
        }
        if write_ms > 0 {
            write_stream.set_write_timeout(Some(Duration::from_millis(write_ms)))?;
        }

        Ok(())
    }

    /// Handle the connection: read one request, answer it, close.
    ///
    /// Consumes the connection so the socket is closed exactly once, on
    /// return.
    pub fn handle(mut self) -> Result<()> {
        tracing::debug!("Connection established from {}", self.peer_addr);

        let frame = match self.reader.read_frame() {
            Ok(Some(frame)) => frame,
            Ok(None) => {
                tracing::debug!("Client {} disconnected before sending a request", self.peer_addr);
                return Ok(());
            }
            Err(e) if e.is_disconnect() => {
                tracing::debug!("Client {} went away while reading: {}", self.peer_addr, e);
                return Ok(());
            }
            Err(e @ crate::CatalogError::FrameTooLarge { .. }) => {
                tracing::warn!("Rejecting request from {}: {}", self.peer_addr, e);
                return self.respond(error_response(&e));
            }
            Err(e) => {
                tracing::warn!("Error reading from {}: {}", self.peer_addr, e);
                return Ok(());
            }
        };

        tracing::debug!(
            "Raw request from {}: {}",
            self.peer_addr,
            String::from_utf8_lossy(&frame)
        );

        // A panicking store or dispatcher still owes the client a response
        let dispatcher = &self.dispatcher;
        let response = match panic::catch_unwind(AssertUnwindSafe(|| dispatcher.handle_frame(&frame))) {
            Ok(response) => response,
            Err(_) => {
                tracing::error!("Request handler panicked for {}", self.peer_addr);
                Response::error("Internal server error")
            }
        };
        self.respond(response)
    }

    /// Send a response to the client
    fn respond(&mut self, response: Response) -> Result<()> {
        let bytes = match encode_response(&response) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!("Failed to encode response for {}: {}", self.peer_addr, e);
                encode_response(&Response::error(e.to_string()))?
            }
        };

        tracing::debug!(
            "Response to {}: {}",
            self.peer_addr,
            String::from_utf8_lossy(&bytes)
        );

        match write_frame(&mut self.writer, &bytes) {
            Ok(()) => Ok(()),
            Err(e) if e.is_disconnect() => {
                // The client disconnected before we could send the response
                tracing::debug!(
                    "Client {} disconnected before response could be sent: {}",
                    self.peer_addr,
                    e
                );
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Error writing to {}: {}", self.peer_addr, e);
                Err(e)
            }
        }
    }
}
