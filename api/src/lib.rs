pub mod apisports;
pub mod client;
pub mod query;
pub mod service;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Domain types — the reduced fixture schema served to clients
// ---------------------------------------------------------------------------

/// A single scheduled match, projected from the upstream fixture payload.
///
/// Field names are the JSON contract between the query service and the
/// browser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fixture {
    pub fixture_id: i64,
    pub referee: Option<String>,
    pub timezone: String,
    /// Kickoff, keeping whatever offset the upstream reported.
    pub date: DateTime<FixedOffset>,
    pub venue: Option<String>,
    pub city: Option<String>,
    pub status: serde_json::Value,
    pub league: League,
    pub teams: Teams,
    pub goals: serde_json::Value,
    pub score: serde_json::Value,
}

impl Fixture {
    /// True when either side is the named team.
    pub fn involves(&self, team: &str) -> bool {
        self.teams.home.name == team || self.teams.away.name == team
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct League {
    pub id: i64,
    pub name: String,
    pub country: Option<String>,
    pub season: i32,
    pub round: String, // "Regular Season - 12", "Quarter-finals", ...
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Teams {
    pub home: Team,
    pub away: Team,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: i64,
    pub name: String,
    pub logo: Option<String>,
    pub winner: Option<bool>, // None until the match is decided
}
