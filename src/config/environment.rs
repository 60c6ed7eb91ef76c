use std::env;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing environment variables: {}", .0.join(", "))]
    Missing(Vec<&'static str>),
}

/// Environment configuration
/// Loaded once at startup and passed by value into the clients; the
/// process refuses to start with partial credentials.
pub struct Config {
    pub practicum_token: String,
    pub telegram_token: String,
    pub telegram_chat_id: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let mut missing = Vec::new();
        // Unset and empty are the same failure: a blank credential must
        // never reach the API clients.
        let mut read = |name: &'static str| match env::var(name) {
            Ok(value) if !value.is_empty() => Some(value),
            _ => {
                missing.push(name);
                None
            }
        };

        let practicum_token = read("PRACTICUM_TOKEN");
        let telegram_token = read("TELEGRAM_TOKEN");
        let telegram_chat_id = read("TELEGRAM_CHAT_ID");

        match (practicum_token, telegram_token, telegram_chat_id) {
            (Some(practicum_token), Some(telegram_token), Some(telegram_chat_id)) => Ok(Self {
                practicum_token,
                telegram_token,
                telegram_chat_id,
            }),
            _ => Err(ConfigError::Missing(missing)),
        }
    }
}
