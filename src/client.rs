//! Validation client and the peripheral user-creation client.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use log::{debug, warn};
use rand::{Rng, RngCore};

use crate::config::ClientConfig;
use crate::error::{TransportError, ValidationError};
use crate::transport::{HttpTransport, ValidationTransport, WsTransport};
use crate::types::{ValidationRequest, PARAM_MAX, PARAM_MIN};

/// Client for the session validation endpoint, generic over the transport.
///
/// `validate` returns exactly the boolean the server returned. If that
/// answer disagrees with the locally computed reference rule, the call
/// fails with [`ValidationError::WrongAnswer`] instead: the server is the
/// authority under test, and a mismatch means the server is defective.
pub struct SessionValidationClient<T> {
    transport: T,
    identity: u32,
}

impl SessionValidationClient<HttpTransport> {
    /// Plain-HTTP client.
    pub fn over_http(config: &ClientConfig) -> Result<Self, TransportError> {
        Ok(Self {
            transport: HttpTransport::new(config)?,
            identity: config.identity,
        })
    }

    /// TLS client with server certificate verification disabled.
    pub fn over_insecure_tls(config: &ClientConfig) -> Result<Self, TransportError> {
        Ok(Self {
            transport: HttpTransport::new_insecure_tls(config)?,
            identity: config.identity,
        })
    }
}

impl SessionValidationClient<WsTransport> {
    /// WebSocket client; opens the persistent connection immediately.
    pub async fn over_websocket(config: &ClientConfig) -> Result<Self, TransportError> {
        Ok(Self {
            transport: WsTransport::connect(config).await?,
            identity: config.identity,
        })
    }

    /// Close the underlying connection.
    pub async fn close(&mut self) -> Result<(), TransportError> {
        self.transport.close().await
    }
}

impl<T: ValidationTransport> SessionValidationClient<T> {
    /// Build a client around an already constructed transport.
    pub fn with_transport(transport: T, identity: u32) -> Self {
        Self {
            transport,
            identity,
        }
    }

    /// Validate a session, drawing each unset parameter uniformly at
    /// random from `[1, 1000]`.
    pub async fn validate(
        &mut self,
        user_id: Option<u32>,
        session_id: Option<u32>,
    ) -> Result<bool, ValidationError> {
        let request = ValidationRequest::sampled(user_id, session_id);
        let expected = request.expected();

        let received = self.transport.exchange(&request).await?;

        if expected != received {
            warn!(
                "server disagreed on user_id={} session_id={}: expected {}, got {}",
                request.user_id, request.session_id, expected, received
            );
            return Err(ValidationError::WrongAnswer {
                user_id: request.user_id,
                session_id: request.session_id,
                expected,
                received,
            });
        }

        debug!(
            "validated user_id={} session_id={} -> {}",
            request.user_id, request.session_id, received
        );
        Ok(received)
    }

    /// Caller-supplied identity tag this client was built with.
    pub fn identity(&self) -> u32 {
        self.identity
    }
}

/// Size in bytes of the random blob sent as `bio` and `text`.
const BIO_LEN: usize = 1500;

/// Fixed name sent with every demo request.
const USER_NAME: &str = "John";

/// Demo client for the unrelated user-creation endpoint.
///
/// Shares the construction pattern of the validation clients but has no
/// response contract: the raw body is passed through unparsed. The blob is
/// generated once at construction and reused across calls.
pub struct UserCreationClient {
    http: reqwest::Client,
    base_url: String,
    identity: u32,
    bio: String,
}

impl UserCreationClient {
    pub fn new(config: &ClientConfig) -> Result<Self, TransportError> {
        let mut blob = vec![0u8; BIO_LEN];
        rand::thread_rng().fill_bytes(&mut blob);

        Ok(Self {
            http: reqwest::Client::builder().build()?,
            base_url: format!("http://{}:{}", config.host, config.port),
            identity: config.identity,
            // URL-safe alphabet: the blob travels in a query string
            bio: URL_SAFE_NO_PAD.encode(&blob),
        })
    }

    /// Fire the demo request with a random age; returns the raw body.
    pub async fn create_user(&self) -> Result<String, TransportError> {
        let age = rand::thread_rng().gen_range(PARAM_MIN..=PARAM_MAX);
        let url = format!(
            "{}/create_user?age={}&bio={}&name={}&text={}",
            self.base_url, age, self.bio, USER_NAME, self.bio
        );
        let body = self.http.get(&url).send().await?.text().await?;
        debug!("create_user age={} -> {} bytes", age, body.len());
        Ok(body)
    }

    /// Caller-supplied identity tag this client was built with.
    pub fn identity(&self) -> u32 {
        self.identity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    // Mock transport that returns a scripted answer
    struct FixedTransport {
        answer: bool,
    }

    #[async_trait]
    impl ValidationTransport for FixedTransport {
        async fn exchange(
            &mut self,
            _request: &ValidationRequest,
        ) -> Result<bool, TransportError> {
            Ok(self.answer)
        }
    }

    #[tokio::test]
    async fn test_agreeing_server_passes() {
        // 1 ^ 22 = 23, so the rule says true
        let transport = FixedTransport { answer: true };
        let mut client = SessionValidationClient::with_transport(transport, 1);
        let valid = client.validate(Some(1), Some(22)).await.unwrap();
        assert!(valid);
    }

    #[tokio::test]
    async fn test_disagreeing_server_is_wrong_answer() {
        let transport = FixedTransport { answer: true };
        let mut client = SessionValidationClient::with_transport(transport, 1);
        let err = client.validate(Some(2), Some(25)).await.unwrap_err();
        match err {
            ValidationError::WrongAnswer {
                user_id,
                session_id,
                expected,
                received,
            } => {
                assert_eq!(user_id, 2);
                assert_eq!(session_id, 25);
                assert!(!expected);
                assert!(received);
            }
            other => panic!("expected WrongAnswer, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_identity_is_carried_not_sent() {
        let transport = FixedTransport { answer: false };
        let mut client = SessionValidationClient::with_transport(transport, 99);
        assert_eq!(client.identity(), 99);
        // 2 ^ 25 = 27: rule says false, transport says false
        client.validate(Some(2), Some(25)).await.unwrap();
    }
}
