// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::endpoints::read_host_and_port;
use std::io;
use std::net::SocketAddr;
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

/// Loopback listener that accepts connections and never responds.
///
/// Connections are accepted and then held open without a single byte being
/// written back, so any read against them blocks until the system under
/// test's read timeout fires. The accept loop runs on a spawned task that is
/// aborted when the listener is dropped; held connections close at the same
/// time.
///
/// # Examples
///
/// ```
/// use overdue::SilentListener;
/// use tokio::net::TcpStream;
///
/// # #[tokio::main]
/// # async fn main() -> std::io::Result<()> {
/// let listener = SilentListener::bind().await?;
/// let _stream = TcpStream::connect(listener.local_addr()).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct SilentListener {
    local_addr: SocketAddr,
    accept_task: JoinHandle<()>,
}

impl SilentListener {
    /// Binds to the loopback interface on an ephemeral port.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if binding fails.
    pub async fn bind() -> io::Result<Self> {
        Self::bind_to("127.0.0.1:0").await
    }

    /// Binds to the fixed read endpoint (`127.0.0.1:4567`).
    ///
    /// Matches what [`read_url`](crate::endpoints::read_url) points tests
    /// at. Fails if another process already holds the port; prefer
    /// [`bind`](Self::bind) unless the test needs the fixture literal.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if binding fails.
    pub async fn bind_read_endpoint() -> io::Result<Self> {
        Self::bind_to(&read_host_and_port()).await
    }

    async fn bind_to(addr: &str) -> io::Result<Self> {
        let listener = TcpListener::bind(addr).await?;
        let local_addr = listener.local_addr()?;

        let accept_task = tokio::spawn(async move {
            // Accepted streams are held, never written to
            let mut held: Vec<TcpStream> = Vec::new();
            loop {
                match listener.accept().await {
                    Ok((stream, peer)) => {
                        tracing::debug!(%peer, "holding connection without responding");
                        held.push(stream);
                    }
                    Err(error) => {
                        tracing::warn!(%error, "accept failed, stopping listener");
                        break;
                    }
                }
            }
        });

        Ok(Self {
            local_addr,
            accept_task,
        })
    }

    /// The address the listener is bound to.
    #[must_use]
    pub const fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }
}

impl Drop for SilentListener {
    fn drop(&mut self) {
        self.accept_task.abort();
    }
}
