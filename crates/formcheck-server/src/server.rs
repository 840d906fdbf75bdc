use crate::{framing, routes, AppState, RequestError, ServerError};
use formcheck_base::log;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream, ToSocketAddrs};
use tokio::task::JoinHandle;

/// How long a client may take to send its whole request.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// How long a rejected client's leftover input is drained before closing.
const LINGER_TIMEOUT: Duration = Duration::from_secs(2);

pub struct Server {
    _accept_task: JoinHandle<()>,
    local_addr: SocketAddr,
}

impl Server {
    /// Bind a TCP listener and start serving requests.
    ///
    /// Each connection is handled on its own task and carries exactly one
    /// request. Dropping the `Server` stops accepting new connections.
    pub async fn bind(
        addr: impl ToSocketAddrs,
        state: Arc<AppState>,
        max_body_bytes: usize,
    ) -> Result<Self, ServerError> {
        let listener = TcpListener::bind(addr).await?;
        let local_addr = listener.local_addr()?;

        let accept_task = tokio::spawn(async move {
            loop {
                match listener.accept().await {
                    Ok((stream, peer)) => {
                        let state = state.clone();
                        tokio::spawn(async move {
                            handle_connection(stream, peer, state, max_body_bytes).await;
                        });
                    }
                    Err(e) => {
                        log::warn!("Accept error: {}", e);
                        // Backoff to prevent CPU spin on persistent errors
                        tokio::time::sleep(Duration::from_millis(100)).await;
                    }
                }
            }
        });

        Ok(Self {
            _accept_task: accept_task,
            local_addr,
        })
    }

    /// Return the local address the server is bound to.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }
}

impl Drop for Server {
    fn drop(&mut self) {
        self._accept_task.abort();
    }
}

async fn handle_connection(
    mut stream: TcpStream,
    peer: SocketAddr,
    state: Arc<AppState>,
    max_body_bytes: usize,
) {
    let read = tokio::time::timeout(
        REQUEST_TIMEOUT,
        framing::read_request(&mut stream, max_body_bytes),
    )
    .await;

    let (response, unread_input) = match read {
        Ok(Ok(request)) => {
            log::debug!("{} {} from {}", request.method(), request.uri(), peer);
            (routes::handle(&state, request).await, false)
        }
        Ok(Err(ServerError::Request(RequestError::Closed))) => return,
        Ok(Err(ServerError::Request(err))) => {
            log::warn!("Rejected request from {}: {}", peer, err);
            (routes::request_error_response(&err), true)
        }
        Ok(Err(e)) => {
            log::warn!("Client {} disconnected: {}", peer, e);
            return;
        }
        Err(_) => {
            log::warn!("Client {} timed out", peer);
            return;
        }
    };

    if let Err(e) = framing::write_response(&mut stream, &response).await {
        log::warn!("Failed to respond to {}: {}", peer, e);
        return;
    }
    let _ = stream.shutdown().await;

    if unread_input {
        // closing with unread input resets the connection, which can
        // destroy the response before the client reads it
        let _ = tokio::time::timeout(LINGER_TIMEOUT, discard_input(&mut stream)).await;
    }
}

async fn discard_input(stream: &mut TcpStream) {
    let mut sink = [0u8; 8 * 1024];
    while let Ok(n) = stream.read(&mut sink).await {
        if n == 0 {
            break;
        }
    }
}
