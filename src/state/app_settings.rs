use chrono::NaiveDate;
use football_api::service::DEFAULT_SERVICE_URL;
use log::LevelFilter;

#[derive(Debug, Clone)]
pub struct AppSettings {
    pub full_screen: bool,
    pub log_level: Option<LevelFilter>,
    /// Base URL of the fixture query service.
    pub server_url: String,
    pub initial_date: Option<NaiveDate>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            full_screen: false,
            log_level: None,
            server_url: DEFAULT_SERVICE_URL.to_string(),
            initial_date: None,
        }
    }
}

impl AppSettings {
    pub fn load() -> Self {
        let server_url = std::env::var("FIXTUI_SERVER_URL")
            .ok()
            .filter(|u| !u.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SERVICE_URL.to_string());
        let log_level = std::env::var("FIXTUI_LOG")
            .ok()
            .and_then(|level| level.parse::<LevelFilter>().ok());
        Self { server_url, log_level, ..Self::default() }
    }
}
