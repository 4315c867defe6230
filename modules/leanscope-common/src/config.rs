use anyhow::{anyhow, Result};

/// Application configuration loaded from environment variables.
/// Holds only secrets; paths, models, and caps arrive as CLI flags.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub openai_api_key: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self {
            openai_api_key: std::env::var("OPENAI_API_KEY")
                .map_err(|_| anyhow!("OPENAI_API_KEY environment variable not set"))?,
        };

        config.log_keys();
        Ok(config)
    }

    fn log_keys(&self) {
        tracing::info!("Config loaded:");
        tracing::info!("  OPENAI_API_KEY: {}", preview(&self.openai_api_key));
    }
}

/// First five characters of a secret plus its length, for startup logs.
/// Counts characters, not bytes, so a key cannot be split mid-character.
fn preview(val: &str) -> String {
    let prefix: String = val.chars().take(5).collect();
    format!("{prefix}...({} chars)", val.chars().count())
}
