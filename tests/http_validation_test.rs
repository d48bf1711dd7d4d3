//! Integration tests for the HTTP transport against a canned local server.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use session_probe::{
    ClientConfig, SessionValidationClient, TransportError, UserCreationClient, ValidationError,
};

/// Bind a listener on an ephemeral loopback port.
async fn ephemeral_listener() -> (TcpListener, u16) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    (listener, port)
}

/// Serve exactly one HTTP request with a fixed body; returns the raw
/// request head that was received.
fn serve_once(listener: TcpListener, body: &'static str) -> JoinHandle<String> {
    tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();

        let mut request = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = stream.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&chunk[..n]);
            if request.windows(4).any(|w| w == b"\r\n\r\n") {
                break;
            }
        }

        let response = format!(
            "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            body.len(),
            body
        );
        stream.write_all(response.as_bytes()).await.unwrap();
        stream.flush().await.unwrap();

        String::from_utf8_lossy(&request).into_owned()
    })
}

#[tokio::test]
async fn test_false_body_accepted_for_failing_pair() {
    // 2 ^ 25 = 27, 27 % 23 = 4: the rule says false
    let (listener, port) = ephemeral_listener().await;
    let server = serve_once(listener, "false");

    let config = ClientConfig::new("127.0.0.1", port, 1);
    let mut client = SessionValidationClient::over_http(&config).unwrap();
    let valid = client.validate(Some(2), Some(25)).await.unwrap();
    assert!(!valid);

    let request = server.await.unwrap();
    assert!(request.starts_with("GET /validate_session?user_id=2&session_id=25"));
}

#[tokio::test]
async fn test_true_body_raises_wrong_answer_for_failing_pair() {
    let (listener, port) = ephemeral_listener().await;
    let server = serve_once(listener, "true");

    let config = ClientConfig::new("127.0.0.1", port, 1);
    let mut client = SessionValidationClient::over_http(&config).unwrap();
    let err = client.validate(Some(2), Some(25)).await.unwrap_err();
    match err {
        ValidationError::WrongAnswer {
            expected, received, ..
        } => {
            assert!(!expected);
            assert!(received);
        }
        other => panic!("expected WrongAnswer, got {:?}", other),
    }

    server.await.unwrap();
}

#[tokio::test]
async fn test_any_non_false_body_means_true() {
    // 1 ^ 22 = 23: the rule says true, and any body other than the
    // literal "false" is decoded as true
    let (listener, port) = ephemeral_listener().await;
    let server = serve_once(listener, "certainly");

    let config = ClientConfig::new("127.0.0.1", port, 1);
    let mut client = SessionValidationClient::over_http(&config).unwrap();
    let valid = client.validate(Some(1), Some(22)).await.unwrap();
    assert!(valid);

    server.await.unwrap();
}

#[tokio::test]
async fn test_false_body_raises_wrong_answer_for_valid_pair() {
    let (listener, port) = ephemeral_listener().await;
    let server = serve_once(listener, "false");

    let config = ClientConfig::new("127.0.0.1", port, 1);
    let mut client = SessionValidationClient::over_http(&config).unwrap();
    let err = client.validate(Some(1), Some(22)).await.unwrap_err();
    assert!(matches!(err, ValidationError::WrongAnswer { .. }));

    server.await.unwrap();
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    // Bind and immediately drop to find a port with nothing listening
    let (listener, port) = ephemeral_listener().await;
    drop(listener);

    let config = ClientConfig::new("127.0.0.1", port, 1);
    let mut client = SessionValidationClient::over_http(&config).unwrap();
    let err = client.validate(Some(2), Some(25)).await.unwrap_err();
    assert!(matches!(
        err,
        ValidationError::Transport(TransportError::Http(_))
    ));
}

#[tokio::test]
async fn test_create_user_passes_body_through() {
    let (listener, port) = ephemeral_listener().await;
    let server = serve_once(listener, "Created John aged 42");

    let config = ClientConfig::new("127.0.0.1", port, 1);
    let client = UserCreationClient::new(&config).unwrap();
    let body = client.create_user().await.unwrap();
    assert_eq!(body, "Created John aged 42");

    let request = server.await.unwrap();
    assert!(request.starts_with("GET /create_user?age="));
    assert!(request.contains("&name=John&"));
    assert!(request.contains("&bio="));
    assert!(request.contains("&text="));
}
