use anyhow::{Context, Result};
use football_api::client::API_FOOTBALL_V3;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub api_football_key: String,
    pub api_football_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: match std::env::var("PORT") {
                Ok(port) => port.parse().context("PORT must be a number")?,
                Err(_) => 5000,
            },
            api_football_key: std::env::var("API_FOOTBALL_KEY")
                .context("Cannot load API_FOOTBALL_KEY env variable")?,
            api_football_url: std::env::var("API_FOOTBALL_URL")
                .unwrap_or_else(|_| API_FOOTBALL_V3.to_string()),
        })
    }
}
