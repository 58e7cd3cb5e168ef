use std::sync::Arc;
use std::time::Duration;

use secrecy::SecretString;

use bertbot::bot::Bot;
use bertbot::config::{DeliveryConfig, StyleConfig};
use bertbot::delivery::{Deliverer, TelegramEndpoint};
use bertbot::error::ConfigError;
use bertbot::persona::Synthesizer;
use bertbot::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let token = std::env::var("TELEGRAM_BOT_TOKEN")
        .map_err(|_| ConfigError::MissingEnvVar("TELEGRAM_BOT_TOKEN".into()))?;

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "8080".to_string())
        .parse()
        .unwrap_or(8080);

    let max_retries: u32 = std::env::var("BERTBOT_MAX_RETRIES")
        .unwrap_or_else(|_| "2".to_string())
        .parse()
        .unwrap_or(2);

    let timeout_secs: u64 = std::env::var("BERTBOT_SEND_TIMEOUT_SECS")
        .unwrap_or_else(|_| "10".to_string())
        .parse()
        .unwrap_or(10);

    eprintln!("🤖 bertbot v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Webhook: http://0.0.0.0:{port}/webhook");
    eprintln!("   Health:  http://0.0.0.0:{port}/\n");

    let endpoint = Arc::new(TelegramEndpoint::new(SecretString::from(token)));
    let deliverer = Deliverer::new(
        endpoint,
        DeliveryConfig {
            max_retries,
            attempt_timeout: Duration::from_secs(timeout_secs),
        },
    );
    let bot = Arc::new(Bot::new(Synthesizer::bert(StyleConfig::default()), deliverer));

    let app = server::routes(bot);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!(port, "bertbot listening for webhook callbacks");
    axum::serve(listener, app).await?;

    Ok(())
}
