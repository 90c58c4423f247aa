//! Client for the fixture query service (`GET /api/matches`).

use crate::Fixture;
use crate::client::{ApiError, ApiResult, default_client};
use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_SERVICE_URL: &str = "http://localhost:5000";

#[derive(Debug, Clone)]
pub struct MatchesClient {
    client: Client,
    base_url: String,
    timeout: Duration,
}

/// Error body the service sends with 4xx/5xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

impl MatchesClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: default_client(),
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            timeout: Duration::from_secs(15),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the upcoming fixtures for `date`.
    ///
    /// A refusal from the service surfaces as `ApiError::Rejected` carrying
    /// the service's own message. Any other failure status, such as a proxy
    /// page with no `{"error": ...}` body, is an `ApiError::Status`.
    pub async fn fetch_matches(&self, date: NaiveDate) -> ApiResult<Vec<Fixture>> {
        let url = format!("{}/api/matches?date={}", self.base_url, date.format("%Y-%m-%d"));
        let response = self
            .client
            .get(&url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| ApiError::Network(e, url.clone()))?;

        let status = response.status();
        if status.is_success() {
            return response
                .json::<Vec<Fixture>>()
                .await
                .map_err(|e| ApiError::Parsing(e, url));
        }

        let body = response.text().await.unwrap_or_default();
        match serde_json::from_str::<ErrorBody>(&body) {
            Ok(ErrorBody { error }) => Err(ApiError::Rejected(error)),
            Err(_) => Err(ApiError::Status(status, body, url)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::json;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn fetch_matches_decodes_fixture_array() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/matches")
            .match_query(Matcher::UrlEncoded("date".into(), "2030-01-01".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!([{
                    "fixture_id": 42,
                    "referee": null,
                    "timezone": "UTC",
                    "date": "2030-01-01T08:00:00+00:00",
                    "venue": "Estadio Centenario",
                    "city": "Montevideo",
                    "status": { "short": "NS" },
                    "league": { "id": 1, "name": "World Cup", "country": "World", "season": 2030, "round": "Group A - 1" },
                    "teams": {
                        "home": { "id": 7, "name": "Uruguay", "logo": "https://example.test/7.png", "winner": null },
                        "away": { "id": 9, "name": "Spain", "logo": "https://example.test/9.png", "winner": null }
                    },
                    "goals": { "home": null, "away": null },
                    "score": {}
                }])
                .to_string(),
            )
            .create_async()
            .await;

        let client = MatchesClient::new(format!("{}/", server.url()));
        let fixtures = client.fetch_matches(day(2030, 1, 1)).await.unwrap();

        mock.assert_async().await;
        assert_eq!(fixtures.len(), 1);
        assert_eq!(fixtures[0].fixture_id, 42);
        assert_eq!(fixtures[0].league.name, "World Cup");
        assert!(fixtures[0].involves("Spain"));
    }

    #[tokio::test]
    async fn service_error_message_is_surfaced() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/matches")
            .match_query(Matcher::Any)
            .with_status(400)
            .with_body(json!({ "error": "Selected date cannot be in the past" }).to_string())
            .create_async()
            .await;

        let client = MatchesClient::new(server.url());
        let err = client.fetch_matches(day(2020, 1, 1)).await.unwrap_err();

        assert!(matches!(err, ApiError::Rejected(ref msg) if msg == "Selected date cannot be in the past"));
    }

    #[tokio::test]
    async fn non_json_failure_is_not_a_service_message() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/matches")
            .match_query(Matcher::Any)
            .with_status(502)
            .with_body("bad gateway")
            .create_async()
            .await;

        let client = MatchesClient::new(server.url());
        let err = client.fetch_matches(day(2030, 1, 1)).await.unwrap_err();

        assert!(matches!(err, ApiError::Status(status, ref body, _)
            if status.as_u16() == 502 && body == "bad gateway"));
    }
}
