//! Blocking client
//!
//! Opens one connection per request, matching the server's single-exchange
//! model.

use std::io::{Read, Write};
use std::net::{Shutdown, TcpStream};
use std::time::Duration;

use crate::error::Result;
use crate::protocol::{decode_response, encode_request, Request, Response};

/// Client for a catalogd server
#[derive(Debug, Clone)]
pub struct Client {
    addr: String,
    timeout: Option<Duration>,
}

impl Client {
    pub fn new(addr: impl Into<String>) -> Self {
        Self {
            addr: addr.into(),
            timeout: Some(Duration::from_secs(5)),
        }
    }

    /// Read/write timeout for each exchange (`None` blocks forever)
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Send a request and wait for the response
    pub fn send(&self, request: &Request) -> Result<Response> {
        let frame = encode_request(request)?;
        let raw = self.send_raw(&frame)?;
        decode_response(&raw)
    }

    /// Send arbitrary bytes and return whatever the server answers with
    ///
    /// Our write half is closed after sending, so a frame that is an exact
    /// multiple of the server's read size is still terminated.
    pub fn send_raw(&self, frame: &[u8]) -> Result<Vec<u8>> {
        let mut stream = TcpStream::connect(&self.addr)?;
        stream.set_read_timeout(self.timeout)?;
        stream.set_write_timeout(self.timeout)?;

        stream.write_all(frame)?;
        stream.flush()?;
        stream.shutdown(Shutdown::Write)?;

        // The server closes after its single response
        let mut response = Vec::new();
        stream.read_to_end(&mut response)?;
        Ok(response)
    }
}
