use std::env;
use std::error::Error;

use log::{error, info, warn};
use session_probe::{
    ClientConfig, SessionValidationClient, UserCreationClient, ValidationTransport,
};

/// Harness settings, loaded from the environment with defaults.
#[derive(Debug, Clone)]
struct HarnessSettings {
    host: String,
    http_port: u16,
    ws_port: u16,
    user_port: u16,
    iterations: u32,
}

fn load_config() -> Result<HarnessSettings, Box<dyn Error>> {
    Ok(HarnessSettings {
        host: env::var("HOST").unwrap_or_else(|_| ClientConfig::DEFAULT_HOST.to_string()),
        http_port: env::var("HTTP_PORT")
            .unwrap_or_else(|_| ClientConfig::DEFAULT_HTTP_PORT.to_string())
            .parse()?,
        ws_port: env::var("WS_PORT")
            .unwrap_or_else(|_| ClientConfig::DEFAULT_WS_PORT.to_string())
            .parse()?,
        user_port: env::var("USER_PORT")
            .unwrap_or_else(|_| ClientConfig::DEFAULT_USER_PORT.to_string())
            .parse()?,
        iterations: env::var("ITERATIONS")
            .unwrap_or_else(|_| "10".to_string())
            .parse()?,
    })
}

#[tokio::main(flavor = "multi_thread")]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logging
    env_logger::init();

    let settings = load_config()?;
    // The harness supplies its own process id as the identity tag; the
    // library itself never consults ambient process state.
    let identity = std::process::id();

    let http_config = ClientConfig::new(settings.host.clone(), settings.http_port, identity);
    let ws_config = ClientConfig::new(settings.host.clone(), settings.ws_port, identity);
    let user_config = ClientConfig::new(settings.host.clone(), settings.user_port, identity);

    info!(
        "probing {} (identity {}, {} iterations per transport)",
        settings.host, identity, settings.iterations
    );

    match SessionValidationClient::over_http(&http_config) {
        Ok(mut client) => run_validations("http", &mut client, settings.iterations).await,
        Err(e) => error!("http client setup failed: {}", e),
    }

    match SessionValidationClient::over_insecure_tls(&http_config) {
        Ok(mut client) => run_validations("tls", &mut client, settings.iterations).await,
        Err(e) => error!("tls client setup failed: {}", e),
    }

    match SessionValidationClient::over_websocket(&ws_config).await {
        Ok(mut client) => {
            run_validations("ws", &mut client, settings.iterations).await;
            if let Err(e) = client.close().await {
                warn!("ws close failed: {}", e);
            }
        }
        Err(e) => error!("ws connect failed: {}", e),
    }

    match UserCreationClient::new(&user_config) {
        Ok(client) => match client.create_user().await {
            Ok(body) => info!("create_user response: {}", body),
            Err(e) => error!("create_user failed: {}", e),
        },
        Err(e) => error!("user client setup failed: {}", e),
    }

    Ok(())
}

async fn run_validations<T: ValidationTransport>(
    label: &str,
    client: &mut SessionValidationClient<T>,
    iterations: u32,
) {
    for _ in 0..iterations {
        match client.validate(None, None).await {
            Ok(valid) => info!("[{}] validate -> {}", label, valid),
            Err(e) => {
                // Both transport failures and wrong answers abort this
                // transport's run; nothing is retried.
                error!("[{}] {}", label, e);
                break;
            }
        }
    }
}
