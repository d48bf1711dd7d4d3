//! Binary WebSocket transport variant.

use async_trait::async_trait;
use futures_util::{SinkExt, StreamExt};
use log::{debug, info};
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};

use crate::config::ClientConfig;
use crate::error::TransportError;
use crate::transport::ValidationTransport;
use crate::types::{decode_result_frame, ValidationRequest};

/// WebSocket transport holding one long-lived connection.
///
/// The connection is opened once at construction and reused across calls.
/// It is a scoped resource: the caller closes it explicitly with
/// [`WsTransport::close`] when done.
pub struct WsTransport {
    stream: WebSocketStream<MaybeTlsStream<TcpStream>>,
}

impl WsTransport {
    /// Open the connection to `/validate_session_ws`.
    pub async fn connect(config: &ClientConfig) -> Result<Self, TransportError> {
        let url = format!("ws://{}:{}/validate_session_ws", config.host, config.port);
        let (stream, _) = connect_async(url.as_str()).await?;
        info!("WebSocket connected to {}", url);
        Ok(Self { stream })
    }

    /// Close the connection.
    pub async fn close(&mut self) -> Result<(), TransportError> {
        self.stream.close(None).await?;
        Ok(())
    }
}

#[async_trait]
impl ValidationTransport for WsTransport {
    async fn exchange(&mut self, request: &ValidationRequest) -> Result<bool, TransportError> {
        let frame = request.to_frame();
        debug!("sending request frame {}", hex::encode(frame));
        self.stream.send(Message::Binary(frame.to_vec())).await?;

        while let Some(message) = self.stream.next().await {
            match message? {
                Message::Binary(data) => {
                    debug!("received result frame {}", hex::encode(&data));
                    return decode_result_frame(&data);
                }
                Message::Close(_) => return Err(TransportError::ConnectionClosed),
                // Ping/pong are answered by tungstenite internally
                _ => continue,
            }
        }
        Err(TransportError::ConnectionClosed)
    }
}
