//! Configuration for catalogd
//!
//! Centralized configuration with sensible defaults.

use crate::error::{CatalogError, Result};

/// Main configuration for a catalogd server
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Network Configuration
    // -------------------------------------------------------------------------
    /// TCP listen address
    pub listen_addr: String,

    /// Number of worker threads handling connections
    pub worker_threads: usize,

    /// Max accepted connections waiting for a worker
    pub max_connections: usize,

    /// Connection read timeout (milliseconds, 0 disables)
    pub read_timeout_ms: u64,

    /// Connection write timeout (milliseconds, 0 disables)
    pub write_timeout_ms: u64,

    /// How long the accept loop sleeps when no connection is pending
    pub accept_poll_ms: u64,

    // -------------------------------------------------------------------------
    // Framing Configuration
    // -------------------------------------------------------------------------
    /// Size of each socket read. A read shorter than this ends the frame.
    pub frame_buffer_size: usize,

    /// Upper bound on an accumulated frame (in bytes)
    pub max_frame_size: usize,

    // -------------------------------------------------------------------------
    // Store Configuration
    // -------------------------------------------------------------------------
    /// Start the store with the default categories
    pub seed_categories: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:5000".to_string(),
            worker_threads: 8,
            max_connections: 1024,
            read_timeout_ms: 0,
            write_timeout_ms: 5000,
            accept_poll_ms: 10,
            frame_buffer_size: 2048,
            max_frame_size: 1024 * 1024, // 1 MB
            seed_categories: true,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Check the settings that would otherwise only fail at runtime
    pub fn validate(&self) -> Result<()> {
        if self.frame_buffer_size == 0 {
            return Err(CatalogError::Config(
                "frame_buffer_size must be greater than zero".to_string(),
            ));
        }
        if self.max_frame_size < self.frame_buffer_size {
            return Err(CatalogError::Config(format!(
                "max_frame_size ({}) must be at least frame_buffer_size ({})",
                self.max_frame_size, self.frame_buffer_size
            )));
        }
        if self.worker_threads == 0 {
            return Err(CatalogError::Config(
                "worker_threads must be greater than zero".to_string(),
            ));
        }
        if self.max_connections == 0 {
            return Err(CatalogError::Config(
                "max_connections must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the TCP listen address
    pub fn listen_addr(mut self, addr: impl Into<String>) -> Self {
        self.config.listen_addr = addr.into();
        self
    }

    /// Set the number of worker threads
    pub fn worker_threads(mut self, count: usize) -> Self {
        self.config.worker_threads = count;
        self
    }

    /// Set the maximum number of queued connections
    pub fn max_connections(mut self, count: usize) -> Self {
        self.config.max_connections = count;
        self
    }

    /// Set the read timeout (in milliseconds)
    pub fn read_timeout_ms(mut self, ms: u64) -> Self {
        self.config.read_timeout_ms = ms;
        self
    }

    /// Set the write timeout (in milliseconds)
    pub fn write_timeout_ms(mut self, ms: u64) -> Self {
        self.config.write_timeout_ms = ms;
        self
    }

    /// Set the accept loop poll interval (in milliseconds)
    pub fn accept_poll_ms(mut self, ms: u64) -> Self {
        self.config.accept_poll_ms = ms;
        self
    }

    /// Set the per-read buffer size used for framing
    pub fn frame_buffer_size(mut self, size: usize) -> Self {
        self.config.frame_buffer_size = size;
        self
    }

    /// Set the maximum frame size (in bytes)
    pub fn max_frame_size(mut self, size: usize) -> Self {
        self.config.max_frame_size = size;
        self
    }

    /// Seed the store with the default categories
    pub fn seed_categories(mut self, seed: bool) -> Self {
        self.config.seed_categories = seed;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
