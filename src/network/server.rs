//! TCP Server
//!
//! Accepts connections and dispatches to worker threads.

use std::net::{SocketAddr, TcpListener, TcpStream};
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam::channel::{self, Receiver, Sender, TrySendError};

use crate::config::Config;
use crate::dispatcher::Dispatcher;
use crate::error::{CatalogError, Result};
use super::Connection;

/// TCP server for catalogd
pub struct Server {
    config: Config,
    dispatcher: Arc<Dispatcher>,
    listener: TcpListener,
    local_addr: SocketAddr,
    shutdown: Arc<AtomicBool>,
}

/// Handle for stopping a running server from another thread
#[derive(Debug, Clone)]
pub struct ShutdownHandle {
    flag: Arc<AtomicBool>,
}

impl ShutdownHandle {
    /// Ask the accept loop to stop. Connections already queued still finish.
    pub fn shutdown(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }
}

impl Server {
    /// Bind the listener described by `config`
    pub fn bind(config: Config, dispatcher: Arc<Dispatcher>) -> Result<Self> {
        config.validate()?;

        let listener = TcpListener::bind(&config.listen_addr)?;
        let local_addr = listener.local_addr()?;
        tracing::info!("Listening on {}", local_addr);

        Ok(Self {
            config,
            dispatcher,
            listener,
            local_addr,
            shutdown: Arc::new(AtomicBool::new(false)),
        })
    }

    /// Address the listener is bound to (useful with port 0)
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    pub fn shutdown_handle(&self) -> ShutdownHandle {
        ShutdownHandle {
            flag: Arc::clone(&self.shutdown),
        }
    }

    /// Start the server (blocking until shutdown)
    ///
    /// The accept loop only hands sockets to the worker pool; it never waits
    /// on a connection being processed.
    pub fn run(self) -> Result<()> {
        // Non-blocking accept so the shutdown flag is observed
        self.listener.set_nonblocking(true)?;

        let (tx, rx) = channel::bounded::<TcpStream>(self.config.max_connections);
        let workers = self.spawn_workers(&rx)?;
        drop(rx);

        let poll = Duration::from_millis(self.config.accept_poll_ms.max(1));

        while !self.shutdown.load(Ordering::SeqCst) {
            match self.listener.accept() {
                Ok((stream, addr)) => {
                    tracing::debug!("Accepted connection from {}", addr);
                    self.enqueue(&tx, stream, addr);
                }
                Err(e) if e.kind() == std::io::ErrorKind::WouldBlock => {
                    thread::sleep(poll);
                }
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => {}
                Err(e) => {
                    // Accept errors (e.g. fd exhaustion) are per-connection
                    tracing::warn!("Failed to accept connection: {}", e);
                    thread::sleep(poll);
                }
            }
        }

        tracing::info!("Shutting down, waiting for {} workers", workers.len());
        drop(tx);
        for worker in workers {
            if worker.join().is_err() {
                tracing::error!("Worker thread terminated abnormally");
            }
        }

        Ok(())
    }

    fn enqueue(&self, tx: &Sender<TcpStream>, stream: TcpStream, addr: SocketAddr) {
        // Accepted sockets may inherit the listener's non-blocking mode
        if let Err(e) = stream.set_nonblocking(false) {
            tracing::warn!("Dropping connection from {}: {}", addr, e);
            return;
        }

        match tx.try_send(stream) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => {
                tracing::warn!("Connection queue full, dropping connection from {}", addr);
            }
            Err(TrySendError::Disconnected(_)) => {
                tracing::error!("Worker pool gone, dropping connection from {}", addr);
            }
        }
    }

    fn spawn_workers(&self, rx: &Receiver<TcpStream>) -> Result<Vec<JoinHandle<()>>> {
        (0..self.config.worker_threads)
            .map(|n| {
                let rx = rx.clone();
                let dispatcher = Arc::clone(&self.dispatcher);
                let config = self.config.clone();

                thread::Builder::new()
                    .name(format!("catalogd-worker-{}", n))
                    .spawn(move || worker_loop(rx, dispatcher, config))
                    .map_err(CatalogError::from)
            })
            .collect()
    }
}

/// Pull connections off the queue until the server drops the sender
fn worker_loop(rx: Receiver<TcpStream>, dispatcher: Arc<Dispatcher>, config: Config) {
    for stream in rx.iter() {
        let dispatcher = Arc::clone(&dispatcher);

        // A panic in one connection must not take the worker with it
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            serve_connection(stream, dispatcher, &config)
        }));

        match outcome {
            Ok(Ok(())) => {}
            Ok(Err(e)) => tracing::warn!("Connection ended with error: {}", e),
            Err(_) => tracing::error!("Connection handler panicked"),
        }
    }
}

fn serve_connection(stream: TcpStream, dispatcher: Arc<Dispatcher>, config: &Config) -> Result<()> {
    Connection::new(stream, dispatcher, config)?.handle()
}
