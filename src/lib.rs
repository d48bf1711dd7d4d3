//! Client harness for a remote session validation service.
//!
//! The service under test answers a simple question: given two integers
//! `user_id` and `session_id`, is the session valid? This crate drives that
//! endpoint over three transports and re-derives the expected answer
//! locally, failing loudly when the server disagrees. The server is the authority
//! being tested; a mismatch signals a server defect, not a client defect.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────┐
//! │ SessionValidationClient │──── WrongAnswer on rule mismatch
//! └────────────┬────────────┘
//!              │ ValidationTransport::exchange
//!     ┌────────┼─────────────┐
//!     ▼        ▼             ▼
//! ┌───────┐ ┌─────────┐ ┌───────────┐
//! │ HTTP  │ │ TLS HTTP│ │ WebSocket │
//! │ :8545 │ │  :8545  │ │   :8000   │
//! └───────┘ └─────────┘ └───────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use session_probe::{ClientConfig, SessionValidationClient};
//!
//! let config = ClientConfig::for_http(42);
//! let mut client = SessionValidationClient::over_http(&config)?;
//!
//! // Parameters left unset are sampled uniformly from [1, 1000].
//! match client.validate(None, None).await {
//!     Ok(valid) => { /* server agreed with the local rule */ }
//!     Err(e) => { /* transport failure or a wrong answer */ }
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod transport;
pub mod types;

// Re-export main types for convenience
pub use client::{SessionValidationClient, UserCreationClient};
pub use config::ClientConfig;
pub use error::{TransportError, ValidationError};
pub use transport::{HttpTransport, ValidationTransport, WsTransport};
pub use types::ValidationRequest;
