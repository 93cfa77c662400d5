//! One-shot command client

use std::time::Duration;

use actuator_shared::codec::{self, FrameDecoder};
use actuator_shared::{CommandRequest, CommandResponse};
use anyhow::{anyhow, bail, Context, Result};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::time::timeout;
use tracing::debug;

/// Send `request` and wait for the matching response
///
/// Responses for other request ids are skipped.
pub async fn send_command<S>(
    stream: &mut S,
    request: &CommandRequest,
    wait: Duration,
) -> Result<CommandResponse>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    let frame = codec::encode(request).context("failed to encode request")?;
    stream.write_all(&frame).await?;
    stream.flush().await?;
    debug!("Sent {} ({} bytes)", request.request_id, frame.len());

    timeout(wait, read_response(stream, &request.request_id))
        .await
        .map_err(|_| anyhow!("no response within {}ms", wait.as_millis()))?
}

async fn read_response<S>(stream: &mut S, request_id: &str) -> Result<CommandResponse>
where
    S: AsyncRead + Unpin,
{
    let mut decoder = FrameDecoder::<CommandResponse>::new();
    let mut buf = vec![0u8; 4096];

    loop {
        while let Some(response) = decoder.decode_next()? {
            if response.request_id == request_id {
                return Ok(response);
            }
            debug!("Skipping response for {}", response.request_id);
        }

        let n = stream.read(&mut buf).await?;
        if n == 0 {
            bail!("actuator closed the connection");
        }
        decoder.extend(&buf[..n]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actuator_shared::{ActionError, ActionResponse};
    use tokio::io::duplex;

    /// Minimal actuator stand-in on the other end of a duplex pipe
    async fn answer(mut peer: tokio::io::DuplexStream, responses: Vec<CommandResponse>) {
        let mut decoder = FrameDecoder::<CommandRequest>::new();
        let mut buf = vec![0u8; 1024];
        loop {
            if decoder.decode_next().unwrap().is_some() {
                break;
            }
            let n = peer.read(&mut buf).await.unwrap();
            decoder.extend(&buf[..n]);
        }
        for resp in responses {
            peer.write_all(&codec::encode(&resp).unwrap()).await.unwrap();
        }
    }

    #[tokio::test]
    async fn test_send_command_receives_response() {
        let (mut client, server) = duplex(4096);
        let reply = CommandResponse::from_result("req-1", "act-1", &Ok(ActionResponse::ok()), 1);
        tokio::spawn(answer(server, vec![reply]));

        let request = CommandRequest::new("req-1", "scan", "acdci_dsr:geospace");
        let resp = send_command(&mut client, &request, Duration::from_secs(1))
            .await
            .unwrap();
        assert_eq!(resp.status, 200);
    }

    #[tokio::test]
    async fn test_skips_unrelated_responses() {
        let (mut client, server) = duplex(4096);
        let stale =
            CommandResponse::from_result("old", "act-1", &Err(ActionError::NotImplemented), 0);
        let reply = CommandResponse::from_result(
            "req-2",
            "act-1",
            &Err(ActionError::TargetNotImplemented),
            0,
        );
        tokio::spawn(answer(server, vec![stale, reply]));

        let request = CommandRequest::new("req-2", "scan", "nope");
        let resp = send_command(&mut client, &request, Duration::from_secs(1))
            .await
            .unwrap();
        assert_eq!(resp.request_id, "req-2");
        assert_eq!(resp.status_text, "Target not implemented");
    }

    #[tokio::test]
    async fn test_times_out_without_response() {
        let (mut client, _server) = duplex(4096);
        let request = CommandRequest::new("req-3", "scan", "x");

        let err = send_command(&mut client, &request, Duration::from_millis(50))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("no response"));
    }

    #[tokio::test]
    async fn test_closed_connection() {
        let (mut client, server) = duplex(4096);
        tokio::spawn(answer(server, Vec::new()));

        let request = CommandRequest::new("req-4", "scan", "x");
        let err = send_command(&mut client, &request, Duration::from_secs(1))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("closed"));
    }
}
