//! Transport variants for the validation round trip.
//!
//! Every variant implements the same capability: send an encoded request to
//! the fixed endpoint and decode the boolean result.
//!
//! | Variant                          | Wire format                              | Default port |
//! |----------------------------------|------------------------------------------|--------------|
//! | [`HttpTransport::new`]           | GET query params, text body              | 8545         |
//! | [`HttpTransport::new_insecure_tls`] | same, over TLS without cert checks    | 8545         |
//! | [`WsTransport::connect`]         | 8-byte request / 4-byte result, u32 LE   | 8000         |

pub mod http;
pub mod ws;

// Re-export the transport implementations for convenience
pub use http::HttpTransport;
pub use ws::WsTransport;

use async_trait::async_trait;

use crate::error::TransportError;
use crate::types::ValidationRequest;

/// Capability shared by all transports: send a request, receive a boolean.
///
/// This trait abstracts the round trip to enable testing the client logic
/// against mock transports.
#[async_trait]
pub trait ValidationTransport: Send {
    /// Perform one round trip and decode the server's boolean.
    ///
    /// Failures propagate immediately; nothing is retried and no timeout
    /// is applied beyond what the underlying transport defaults to.
    async fn exchange(&mut self, request: &ValidationRequest) -> Result<bool, TransportError>;
}
