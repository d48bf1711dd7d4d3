//! Error types for the validation harness.

use thiserror::Error;

/// Failures of the network round trip itself.
///
/// None of these are recovered locally. They propagate to the caller as a
/// hard failure of the current call; nothing is retried.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("WebSocket error: {0}")]
    WebSocket(#[from] tokio_tungstenite::tungstenite::Error),

    #[error("Connection closed before a result frame arrived")]
    ConnectionClosed,

    #[error("Failed to decode response: {0}")]
    Decode(String),
}

/// Errors surfaced by a validation call.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The round trip failed before a result could be decoded.
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// The decoded server result disagrees with the locally computed
    /// reference rule. Fatal to the current call; signals a defect in the
    /// server under test.
    #[error("Wrong Answer: user_id {user_id} session_id {session_id}: expected {expected}, server returned {received}")]
    WrongAnswer {
        user_id: u32,
        session_id: u32,
        expected: bool,
        received: bool,
    },
}
