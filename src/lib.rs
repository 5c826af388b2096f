//! # catalogd
//!
//! A small category server speaking a JSON-framed request/response protocol:
//! - Short-read framing over raw TCP, one exchange per connection
//! - Combined validation messages (`"Missing method Missing date"`)
//! - CRUD over `/api/categories[/<id>]` plus `echo`
//! - Thread-pool connection handling with panic isolation
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      TCP Server                              │
//! │             (Acceptor + Worker Thread Pool)                  │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                 Connection Handler                           │
//! │         (Frame Reader → Codec → Validator)                   │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                    Dispatcher                                │
//! │                (Router → Store ops)                          │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!                       ▼
//!               ┌──────────────┐
//!               │ MemoryStore  │
//!               │  (RwLock)    │
//!               └──────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod protocol;
pub mod store;
pub mod dispatcher;
pub mod network;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{CatalogError, Result};
pub use config::Config;
pub use dispatcher::Dispatcher;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of catalogd
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
