//! The fixture query pipeline: resolve the requested date, fetch the day's
//! fixtures upstream, keep the ones that have not kicked off yet and order
//! them by kickoff.

use crate::Fixture;
use crate::client::{ApiError, FootballApi};
use chrono::{DateTime, NaiveDate, Utc};
use std::fmt;

pub const DATE_IN_PAST_MESSAGE: &str = "Selected date cannot be in the past";

#[derive(Debug)]
pub enum QueryError {
    /// The requested day is before today. No upstream call was made.
    DateInPast(NaiveDate),
    Upstream(ApiError),
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::DateInPast(date) => write!(f, "{DATE_IN_PAST_MESSAGE}: {date}"),
            QueryError::Upstream(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for QueryError {}

impl From<ApiError> for QueryError {
    fn from(error: ApiError) -> Self {
        QueryError::Upstream(error)
    }
}

/// A `YYYY-MM-DD` string as sent upstream.
///
/// Only the shape is checked. A well-shaped string that names no real day
/// (`2030-02-31`) is forwarded as-is and left for the provider to judge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryDate(String);

impl QueryDate {
    pub fn from_day(day: NaiveDate) -> Self {
        QueryDate(day.format("%Y-%m-%d").to_string())
    }

    /// Accept `raw` when it has the `YYYY-MM-DD` shape.
    pub fn from_raw(raw: &str) -> Option<Self> {
        is_well_shaped(raw).then(|| QueryDate(raw.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The calendar day, when the string names one.
    pub fn day(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.0, "%Y-%m-%d").ok()
    }
}

impl fmt::Display for QueryDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Fetch the fixtures for `requested` (or today) that kick off at or after `now`,
/// sorted ascending by kickoff.
pub async fn fetch_upcoming(
    api: &FootballApi,
    requested: Option<&str>,
    now: DateTime<Utc>,
) -> Result<Vec<Fixture>, QueryError> {
    let date = resolve_query_date(requested, now.date_naive())?;
    let fixtures = api.fetch_fixtures(&date).await?;
    Ok(upcoming(fixtures, now))
}

/// Pick the day to query.
///
/// Missing or wrong-shaped input quietly becomes `today`. A well-shaped
/// string is kept verbatim and refused only when it names a real day
/// before `today`.
pub fn resolve_query_date(
    requested: Option<&str>,
    today: NaiveDate,
) -> Result<QueryDate, QueryError> {
    let date = requested
        .and_then(QueryDate::from_raw)
        .unwrap_or_else(|| QueryDate::from_day(today));
    match date.day() {
        Some(day) if day < today => Err(QueryError::DateInPast(day)),
        _ => Ok(date),
    }
}

/// Parse a strict `YYYY-MM-DD` string naming a real calendar day.
pub fn parse_query_date(raw: &str) -> Option<NaiveDate> {
    QueryDate::from_raw(raw)?.day()
}

fn is_well_shaped(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Drop fixtures that kicked off before `now` and sort the rest by kickoff.
/// The sort is stable, so fixtures sharing a kickoff keep upstream order.
pub fn upcoming(fixtures: Vec<Fixture>, now: DateTime<Utc>) -> Vec<Fixture> {
    let mut upcoming: Vec<Fixture> = fixtures.into_iter().filter(|f| f.date >= now).collect();
    upcoming.sort_by_key(|f| f.date.with_timezone(&Utc));
    upcoming
}
