/// API-Football v3 raw wire types — serde shapes for deserializing responses.
/// These map to the reduced `Fixture` schema in client.rs.
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Envelope shared by every v3 endpoint
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default, Clone)]
pub struct FixturesResponse {
    /// `[]` on success, `{"token": "..."}`-style object on failure.
    #[serde(default)]
    pub errors: serde_json::Value,
    #[serde(default)]
    pub results: Option<u32>,
    #[serde(default)]
    pub response: Vec<FixtureEntry>,
}

impl FixturesResponse {
    /// Collect upstream-reported errors. The provider answers `200 OK` with a
    /// populated `errors` field for bad keys, exhausted quotas and the like.
    pub fn error_messages(&self) -> Vec<String> {
        match &self.errors {
            serde_json::Value::Object(map) => map
                .iter()
                .map(|(key, value)| match value.as_str() {
                    Some(msg) => format!("{key}: {msg}"),
                    None => format!("{key}: {value}"),
                })
                .collect(),
            serde_json::Value::Array(items) => items
                .iter()
                .map(|item| item.as_str().map(str::to_owned).unwrap_or_else(|| item.to_string()))
                .collect(),
            _ => Vec::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// /fixtures
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default, Clone)]
pub struct FixtureEntry {
    pub fixture: FixtureInfo,
    #[serde(default)]
    pub league: LeagueInfo,
    #[serde(default)]
    pub teams: TeamsInfo,
    #[serde(default)]
    pub goals: serde_json::Value,
    #[serde(default)]
    pub score: serde_json::Value,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct FixtureInfo {
    pub id: i64,
    pub referee: Option<String>,
    #[serde(default)]
    pub timezone: String,
    /// ISO 8601 with offset, e.g. "2030-01-01T08:00:00+00:00".
    pub date: Option<String>,
    pub timestamp: Option<i64>,
    #[serde(default)]
    pub venue: VenueInfo,
    #[serde(default)]
    pub status: serde_json::Value,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct VenueInfo {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub city: Option<String>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct LeagueInfo {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    pub country: Option<String>,
    pub logo: Option<String>,
    pub flag: Option<String>,
    #[serde(default)]
    pub season: i32,
    #[serde(default)]
    pub round: String,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct TeamsInfo {
    #[serde(default)]
    pub home: TeamInfo,
    #[serde(default)]
    pub away: TeamInfo,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct TeamInfo {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    pub logo: Option<String>,
    pub winner: Option<bool>,
}
