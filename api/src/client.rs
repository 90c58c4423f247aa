use crate::apisports::{FixtureEntry, FixturesResponse};
use crate::{Fixture, League, Team, Teams};
use crate::query::QueryDate;
use chrono::DateTime;
use reqwest::Client;
pub use reqwest::StatusCode;
use std::fmt;
use std::time::Duration;

pub type ApiResult<T> = Result<T, ApiError>;

pub const API_FOOTBALL_V3: &str = "https://v3.football.api-sports.io";
const API_KEY_HEADER: &str = "x-apisports-key";

/// API-Football client, authenticated with a single API key.
#[derive(Debug, Clone)]
pub struct FootballApi {
    client: Client,
    base_url: String,
    api_key: String,
    timeout: Duration,
}

#[derive(Debug)]
pub enum ApiError {
    Network(reqwest::Error, String),
    /// Non-success HTTP status; carries the response body and the URL.
    Status(StatusCode, String, String),
    Parsing(reqwest::Error, String),
    /// The upstream answered successfully but reported errors in its body.
    Upstream(Vec<String>, String),
    /// The fixture query service refused the request; carries its message.
    Rejected(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(e, url) => write!(f, "Network error for {url}: {e}"),
            ApiError::Status(status, body, url) if body.trim().is_empty() => {
                write!(f, "HTTP {status} for {url}")
            }
            ApiError::Status(status, body, url) => write!(f, "HTTP {status} for {url}: {body}"),
            ApiError::Parsing(e, url) => write!(f, "Parse error for {url}: {e}"),
            ApiError::Upstream(errors, url) => {
                write!(f, "Upstream error for {url}: {}", errors.join("; "))
            }
            ApiError::Rejected(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

pub(crate) fn default_client() -> Client {
    Client::builder()
        .user_agent(concat!("football-api/", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_default()
}

impl FootballApi {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(API_FOOTBALL_V3, api_key)
    }

    /// Point the client at a different host, e.g. a proxy or a test server.
    pub fn with_base_url(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: default_client(),
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            api_key: api_key.into(),
            timeout: Duration::from_secs(10),
        }
    }

    /// Fetch every fixture scheduled on `date`, projected to the reduced schema.
    ///
    /// Entries whose kickoff cannot be parsed are dropped; nothing downstream
    /// can place them in time.
    pub async fn fetch_fixtures(&self, date: &QueryDate) -> ApiResult<Vec<Fixture>> {
        let url = format!("{}/fixtures?date={}", self.base_url, date.as_str());
        let raw = self.get(&url).await?;

        let errors = raw.error_messages();
        if !errors.is_empty() {
            return Err(ApiError::Upstream(errors, url));
        }

        Ok(raw.response.into_iter().filter_map(map_fixture).collect())
    }

    async fn get(&self, url: &str) -> ApiResult<FixturesResponse> {
        let response = self
            .client
            .get(url)
            .header(API_KEY_HEADER, &self.api_key)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| ApiError::Network(e, url.to_owned()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status(status, body, url.to_owned()));
        }

        response
            .json::<FixturesResponse>()
            .await
            .map_err(|e| ApiError::Parsing(e, url.to_owned()))
    }
}

// ---------------------------------------------------------------------------
// Mapping: API-Football wire types → reduced fixture schema
// ---------------------------------------------------------------------------

fn map_fixture(entry: FixtureEntry) -> Option<Fixture> {
    let date = entry
        .fixture
        .date
        .as_deref()
        .and_then(|d| DateTime::parse_from_rfc3339(d).ok())?;

    Some(Fixture {
        fixture_id: entry.fixture.id,
        referee: entry.fixture.referee,
        timezone: entry.fixture.timezone,
        date,
        venue: entry.fixture.venue.name,
        city: entry.fixture.venue.city,
        status: entry.fixture.status,
        league: League {
            id: entry.league.id,
            name: entry.league.name,
            country: entry.league.country,
            season: entry.league.season,
            round: entry.league.round,
        },
        teams: Teams {
            home: map_team(entry.teams.home),
            away: map_team(entry.teams.away),
        },
        goals: entry.goals,
        score: entry.score,
    })
}

fn map_team(t: crate::apisports::TeamInfo) -> Team {
    Team {
        id: t.id,
        name: t.name,
        logo: t.logo,
        winner: t.winner,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::json;

    fn entry(id: i64, date: &str) -> serde_json::Value {
        json!({
            "fixture": {
                "id": id,
                "referee": "M. Oliver",
                "timezone": "UTC",
                "date": date,
                "timestamp": 0,
                "periods": { "first": null, "second": null },
                "venue": { "id": 556, "name": "Old Trafford", "city": "Manchester" },
                "status": { "long": "Not Started", "short": "NS", "elapsed": null }
            },
            "league": {
                "id": 39,
                "name": "Premier League",
                "country": "England",
                "logo": "https://media.api-sports.io/football/leagues/39.png",
                "flag": "https://media.api-sports.io/flags/gb.svg",
                "season": 2029,
                "round": "Regular Season - 20"
            },
            "teams": {
                "home": { "id": 33, "name": "Manchester United", "logo": "https://media.api-sports.io/football/teams/33.png", "winner": null },
                "away": { "id": 40, "name": "Liverpool", "logo": "https://media.api-sports.io/football/teams/40.png", "winner": null }
            },
            "goals": { "home": null, "away": null },
            "score": { "halftime": { "home": null, "away": null } }
        })
    }

    fn envelope(entries: Vec<serde_json::Value>) -> String {
        json!({
            "get": "fixtures",
            "parameters": { "date": "2030-01-01" },
            "errors": [],
            "results": entries.len(),
            "paging": { "current": 1, "total": 1 },
            "response": entries
        })
        .to_string()
    }

    #[tokio::test]
    async fn fetch_fixtures_sends_key_and_date() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/fixtures")
            .match_query(Matcher::UrlEncoded("date".into(), "2030-01-01".into()))
            .match_header("x-apisports-key", "secret")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(envelope(vec![entry(1, "2030-01-01T08:00:00+00:00")]))
            .create_async()
            .await;

        let api = FootballApi::with_base_url(server.url(), "secret");
        let date = QueryDate::from_raw("2030-01-01").unwrap();
        let fixtures = api.fetch_fixtures(&date).await.unwrap();

        mock.assert_async().await;
        assert_eq!(fixtures.len(), 1);

        let f = &fixtures[0];
        assert_eq!(f.fixture_id, 1);
        assert_eq!(f.venue.as_deref(), Some("Old Trafford"));
        assert_eq!(f.city.as_deref(), Some("Manchester"));
        assert_eq!(f.league.name, "Premier League");
        assert_eq!(f.league.season, 2029);
        assert_eq!(f.teams.home.name, "Manchester United");
        assert_eq!(f.teams.away.winner, None);
        assert_eq!(f.status["short"], "NS");
    }

    #[tokio::test]
    async fn fetch_fixtures_drops_unparseable_kickoffs() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/fixtures")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(envelope(vec![
                entry(1, "not a date"),
                entry(2, "2030-01-01T10:00:00+00:00"),
            ]))
            .create_async()
            .await;

        let api = FootballApi::with_base_url(server.url(), "k");
        let date = QueryDate::from_raw("2030-01-01").unwrap();
        let fixtures = api.fetch_fixtures(&date).await.unwrap();

        assert_eq!(fixtures.iter().map(|f| f.fixture_id).collect::<Vec<_>>(), vec![2]);
    }

    #[tokio::test]
    async fn errors_in_body_are_upstream_failures() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/fixtures")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(
                json!({
                    "get": "fixtures",
                    "errors": { "token": "Error/Missing application key." },
                    "results": 0,
                    "response": []
                })
                .to_string(),
            )
            .create_async()
            .await;

        let api = FootballApi::with_base_url(server.url(), "");
        let date = QueryDate::from_raw("2030-01-01").unwrap();
        let err = api.fetch_fixtures(&date).await.unwrap_err();

        assert!(matches!(err, ApiError::Upstream(ref errors, _) if errors.len() == 1));
        assert!(err.to_string().contains("Missing application key"));
    }

    #[tokio::test]
    async fn server_errors_are_status_failures() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/fixtures")
            .match_query(Matcher::Any)
            .with_status(503)
            .create_async()
            .await;

        let api = FootballApi::with_base_url(server.url(), "k");
        let date = QueryDate::from_raw("2030-01-01").unwrap();
        let err = api.fetch_fixtures(&date).await.unwrap_err();

        assert!(matches!(err, ApiError::Status(StatusCode::SERVICE_UNAVAILABLE, _, _)));
    }

    #[tokio::test]
    async fn error_status_keeps_response_body_for_logging() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/fixtures")
            .match_query(Matcher::Any)
            .with_status(500)
            .with_body(r#"{"message":"quota exceeded for plan"}"#)
            .create_async()
            .await;

        let api = FootballApi::with_base_url(server.url(), "k");
        let date = QueryDate::from_raw("2030-01-01").unwrap();
        let err = api.fetch_fixtures(&date).await.unwrap_err();

        assert!(matches!(err, ApiError::Status(StatusCode::INTERNAL_SERVER_ERROR, ref body, _)
            if body.contains("quota exceeded")));
        let logged = err.to_string();
        assert!(logged.contains("500"));
        assert!(logged.contains("quota exceeded for plan"));
    }

    #[test]
    fn map_fixture_keeps_upstream_offset() {
        let raw: FixtureEntry =
            serde_json::from_value(entry(7, "2030-01-01T20:30:00+05:30")).unwrap();
        let fixture = map_fixture(raw).unwrap();
        assert_eq!(fixture.date.offset().local_minus_utc(), 5 * 3600 + 30 * 60);
        assert_eq!(fixture.date.to_rfc3339(), "2030-01-01T20:30:00+05:30");
    }
}
