//! TCP transport implementation.
//!
//! Line-delimited JSON-RPC over raw TCP. Each accepted connection becomes an
//! independent MCP session on its own task. Sessions share the server's
//! dispatcher, so calls from different clients run concurrently against the
//! same registry.

use std::net::SocketAddr;
use std::time::Duration;

use rmcp::ServiceExt;
use tokio::net::{TcpListener, TcpStream};
use tracing::{Instrument, info, info_span, warn};

use super::{TransportError, TransportResult, config::TcpConfig};
use crate::core::McpServer;

/// Pause after a failed `accept` before trying again.
const ACCEPT_BACKOFF: Duration = Duration::from_millis(100);

/// TCP transport handler.
pub struct TcpTransport {
    config: TcpConfig,
}

impl TcpTransport {
    pub fn new(config: TcpConfig) -> Self {
        Self { config }
    }

    /// The `host:port` this transport binds to.
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Accept connections until the process exits.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        let addr = self.address();
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        info!("Ready - listening on {} (JSON-RPC over TCP)", addr);

        let mut session: u64 = 0;
        loop {
            let (stream, peer) = match listener.accept().await {
                Ok(accepted) => accepted,
                Err(e) => {
                    warn!("Failed to accept connection: {}", e);
                    tokio::time::sleep(ACCEPT_BACKOFF).await;
                    continue;
                }
            };

            if let Err(e) = stream.set_nodelay(true) {
                warn!("Failed to set TCP_NODELAY for {}: {}", peer, e);
            }

            session += 1;
            let span = info_span!("tcp_session", session, %peer);
            tokio::spawn(serve_session(server.clone(), stream, peer).instrument(span));
        }
    }
}

/// Run one MCP session to completion.
async fn serve_session(server: McpServer, stream: TcpStream, peer: SocketAddr) {
    let service = match server.serve(stream).await {
        Ok(service) => service,
        Err(e) => {
            warn!("Session handshake with {} failed: {}", peer, e);
            return;
        }
    };
    info!("Client {} connected", peer);

    match service.waiting().await {
        Ok(reason) => info!("Client {} disconnected: {:?}", peer, reason),
        Err(e) => warn!("Session with {} ended with error: {:?}", peer, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tcp_address() {
        let transport = TcpTransport::new(TcpConfig {
            port: 4000,
            host: "0.0.0.0".to_string(),
        });
        assert_eq!(transport.address(), "0.0.0.0:4000");
    }
}
