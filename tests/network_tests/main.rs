//! Network Tests
//!
//! Full exchanges against a real server bound to an ephemeral port.
