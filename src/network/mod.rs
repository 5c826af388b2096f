//! Network Module
//!
//! TCP server and client handling.
//!
//! ## Architecture
//! - Single acceptor thread on a non-blocking listener
//! - Worker thread pool fed through a bounded channel
//! - One request/response exchange per connection
//! - Requests executed through the Dispatcher

mod server;
mod connection;
mod client;

pub use server::{Server, ShutdownHandle};
pub use connection::Connection;
pub use client::Client;
