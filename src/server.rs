//! TCP command server
//!
//! Accepts framed `CommandRequest`s, runs them through the actuator and
//! writes back one framed `CommandResponse` per request.

use std::future::Future;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use actuator_shared::codec::{self, FrameDecoder};
use actuator_shared::CommandRequest;
use anyhow::Result;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tracing::{debug, error, info};

use crate::actuator::Actuator;

/// Pause after a failed accept before trying again
const ACCEPT_BACKOFF: Duration = Duration::from_millis(100);

/// Source of inbound connections
trait Acceptor: Send {
    fn accept(&mut self) -> impl Future<Output = io::Result<(TcpStream, SocketAddr)>> + Send;
}

impl Acceptor for TcpListener {
    fn accept(&mut self) -> impl Future<Output = io::Result<(TcpStream, SocketAddr)>> + Send {
        TcpListener::accept(self)
    }
}

/// Serve connections for as long as the task runs
///
/// Accept failures (descriptor exhaustion, aborted handshakes) are logged
/// and retried after a short pause.
pub async fn serve(listener: TcpListener, actuator: Arc<Actuator>) {
    accept_loop(listener, actuator).await
}

async fn accept_loop<A: Acceptor>(mut acceptor: A, actuator: Arc<Actuator>) {
    loop {
        let (socket, addr) = match acceptor.accept().await {
            Ok(conn) => conn,
            Err(e) => {
                error!("Accept failed: {}", e);
                tokio::time::sleep(ACCEPT_BACKOFF).await;
                continue;
            }
        };
        info!("Connection from: {}", addr);

        let actuator = Arc::clone(&actuator);
        tokio::spawn(async move {
            if let Err(e) = handle_connection(socket, addr, actuator).await {
                error!("Connection {} closed with error: {}", addr, e);
            }
        });
    }
}

async fn handle_connection(
    mut socket: TcpStream,
    addr: SocketAddr,
    actuator: Arc<Actuator>,
) -> Result<()> {
    let mut decoder = FrameDecoder::<CommandRequest>::new();
    let mut buf = vec![0u8; 4096];

    loop {
        let n = socket.read(&mut buf).await?;
        if n == 0 {
            info!("Client disconnected: {}", addr);
            return Ok(());
        }

        decoder.extend(&buf[..n]);

        // Process all complete frames; a bad frame ends the connection
        while let Some(request) = decoder.decode_next()? {
            debug!(
                "[{}] {} {} ({} specifiers)",
                addr,
                request.action,
                request.target,
                request.specifiers.len()
            );

            let response = actuator.handle(&request);
            let frame = codec::encode(&response)?;
            socket.write_all(&frame).await?;
        }
    }
}
