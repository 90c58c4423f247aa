use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use chrono::Utc;
use football_api::{client::FootballApi, query};
use serde::Deserialize;

use crate::error::ApiResult;

#[derive(Debug, Default, Deserialize)]
pub struct MatchesQuery {
    pub date: Option<String>,
}

/// List the fixtures on the requested day (default today) that have not
/// kicked off yet, earliest first.
pub async fn list_matches(
    State(api): State<FootballApi>,
    Query(params): Query<MatchesQuery>,
) -> ApiResult<Response> {
    let now = Utc::now();
    tracing::debug!("Listing matches for date param {:?}", params.date);

    let fixtures = query::fetch_upcoming(&api, params.date.as_deref(), now).await?;
    tracing::info!("Returning {} upcoming fixtures", fixtures.len());

    Ok(Json(fixtures).into_response())
}
