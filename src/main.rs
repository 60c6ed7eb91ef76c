use practicum_notifier::config::Config;
use practicum_notifier::services::practicum::PracticumClient;
use practicum_notifier::services::telegram::TelegramClient;
use practicum_notifier::services::watcher::WatcherEngine;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "practicum_notifier=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Polling must never start with partial credentials.
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!("fatal: {}", err);
            std::process::exit(1);
        }
    };

    let source = PracticumClient::new(config.practicum_token);
    let messenger = TelegramClient::new(config.telegram_token, config.telegram_chat_id);
    tracing::info!("clients initialized, entering poll loop");

    let mut engine = WatcherEngine::new(source, messenger, chrono::Utc::now().timestamp());
    engine.run().await;
}
