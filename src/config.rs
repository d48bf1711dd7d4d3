//! Client configuration.

use serde::{Deserialize, Serialize};

/// Connection settings shared by every client variant.
///
/// `identity` is an explicit, caller-supplied tag for requests originating
/// from this client. It is carried on the client but never becomes part of
/// the validation wire format; callers that want a meaningful identity
/// (a process id, a worker index) pass one in themselves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Hostname or IP address of the service under test.
    pub host: String,

    /// TCP port. Transport-specific defaults are provided by the
    /// `for_*` constructors.
    pub port: u16,

    /// Caller-supplied identity tag.
    pub identity: u32,
}

impl ClientConfig {
    /// Default loopback host.
    pub const DEFAULT_HOST: &'static str = "127.0.0.1";

    /// Default port for the HTTP variants, plain and TLS.
    pub const DEFAULT_HTTP_PORT: u16 = 8545;

    /// Default port for the WebSocket variant.
    pub const DEFAULT_WS_PORT: u16 = 8000;

    /// Default port for the user-creation demo endpoint.
    pub const DEFAULT_USER_PORT: u16 = 8000;

    pub fn new(host: impl Into<String>, port: u16, identity: u32) -> Self {
        Self {
            host: host.into(),
            port,
            identity,
        }
    }

    /// Loopback configuration for the HTTP variants.
    pub fn for_http(identity: u32) -> Self {
        Self::new(Self::DEFAULT_HOST, Self::DEFAULT_HTTP_PORT, identity)
    }

    /// Loopback configuration for the WebSocket variant.
    pub fn for_websocket(identity: u32) -> Self {
        Self::new(Self::DEFAULT_HOST, Self::DEFAULT_WS_PORT, identity)
    }

    /// Loopback configuration for the user-creation demo endpoint.
    pub fn for_user_demo(identity: u32) -> Self {
        Self::new(Self::DEFAULT_HOST, Self::DEFAULT_USER_PORT, identity)
    }
}
