use crate::state::messages::{NetworkRequest, NetworkResponse};
use chrono::NaiveDate;
use football_api::client::ApiError;
use football_api::service::MatchesClient;
use log::{debug, error};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::sync::mpsc;

const SPINNER_CHARS: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
pub const ERROR_CHAR: char = '!';
pub const FALLBACK_ERROR: &str = "Failed to load matches";

#[derive(Debug, Copy, Clone)]
pub struct LoadingState {
    pub is_loading: bool,
    pub spinner_char: char,
}

impl Default for LoadingState {
    fn default() -> Self {
        Self { is_loading: false, spinner_char: ' ' }
    }
}

/// Message shown in place of the table when a fetch fails: the service's own
/// explanation when it gave one, otherwise a generic fallback.
pub fn user_message(err: &ApiError) -> String {
    match err {
        ApiError::Rejected(msg) if !msg.trim().is_empty() => msg.clone(),
        _ => FALLBACK_ERROR.to_string(),
    }
}

pub struct NetworkWorker {
    client: MatchesClient,
    requests: mpsc::Receiver<NetworkRequest>,
    responses: mpsc::Sender<NetworkResponse>,
    is_loading: Arc<AtomicBool>,
}

impl NetworkWorker {
    pub fn new(
        client: MatchesClient,
        requests: mpsc::Receiver<NetworkRequest>,
        responses: mpsc::Sender<NetworkResponse>,
    ) -> Self {
        Self {
            client,
            requests,
            responses,
            is_loading: Arc::new(AtomicBool::new(false)),
        }
    }

    pub async fn run(mut self) {
        while let Some(request) = self.requests.recv().await {
            self.start_loading_animation().await;

            let result = match request {
                NetworkRequest::LoadFixtures { date } => self.handle_load_fixtures(date).await,
            };

            debug!("network request complete");
            self.stop_loading_animation(result.is_ok()).await;

            let response = result.unwrap_or_else(|err| {
                error!("Fetching fixtures from {} failed: {err}", self.client.base_url());
                NetworkResponse::Error { message: user_message(&err) }
            });

            if let Err(e) = self.responses.send(response).await {
                error!("Failed to send network response: {e}");
                break;
            }
        }
    }

    async fn handle_load_fixtures(&self, date: NaiveDate) -> Result<NetworkResponse, ApiError> {
        debug!("loading fixtures for {date}");
        let fixtures = self.client.fetch_matches(date).await?;
        Ok(NetworkResponse::FixturesLoaded { fixtures })
    }

    async fn start_loading_animation(&self) {
        self.is_loading.store(true, Ordering::Relaxed);

        let mut loading_state =
            LoadingState { is_loading: true, spinner_char: SPINNER_CHARS[0] };
        let _ = self
            .responses
            .send(NetworkResponse::LoadingStateChanged { loading_state })
            .await;

        let responses = self.responses.clone();
        let is_loading = self.is_loading.clone();

        tokio::spawn(async move {
            let mut spinner_index = 1;
            let mut interval = tokio::time::interval(Duration::from_millis(33));
            loop {
                interval.tick().await;
                if !is_loading.load(Ordering::Relaxed) {
                    break;
                }
                loading_state.spinner_char = SPINNER_CHARS[spinner_index];
                spinner_index = (spinner_index + 1) % SPINNER_CHARS.len();
                let _ = responses
                    .send(NetworkResponse::LoadingStateChanged { loading_state })
                    .await;
            }
        });
    }

    async fn stop_loading_animation(&self, is_ok: bool) {
        self.is_loading.store(false, Ordering::Relaxed);
        tokio::time::sleep(Duration::from_millis(15)).await;

        let spinner_char = if is_ok { ' ' } else { ERROR_CHAR };
        let _ = self
            .responses
            .send(NetworkResponse::LoadingStateChanged {
                loading_state: LoadingState { is_loading: false, spinner_char },
            })
            .await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use football_api::client::StatusCode;

    #[test]
    fn rejection_message_is_shown_verbatim() {
        let err = ApiError::Rejected("Selected date cannot be in the past".into());
        assert_eq!(user_message(&err), "Selected date cannot be in the past");
    }

    #[test]
    fn blank_rejection_falls_back() {
        assert_eq!(user_message(&ApiError::Rejected("  ".into())), FALLBACK_ERROR);
    }

    #[test]
    fn upstream_detail_is_not_shown() {
        let err = ApiError::Upstream(vec!["token: bad key".into()], "http://x".into());
        assert_eq!(user_message(&err), FALLBACK_ERROR);
    }

    #[test]
    fn failure_status_without_service_message_falls_back() {
        let err = ApiError::Status(
            StatusCode::BAD_GATEWAY,
            "<html>bad gateway</html>".into(),
            "http://localhost:5000/api/matches?date=2030-01-01".into(),
        );
        assert_eq!(user_message(&err), FALLBACK_ERROR);
    }
}
