use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use football_api::query::{DATE_IN_PAST_MESSAGE, QueryError};
use serde_json::json;
use std::fmt;

pub const UPSTREAM_FAILURE_MESSAGE: &str = "Error fetching match data";

/// Web layer errors
#[derive(Debug)]
pub enum WebError {
    Query(QueryError),
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Query(e) => write!(f, "Query error: {}", e),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (status_code, body) = match &self {
            Self::Query(QueryError::DateInPast(date)) => {
                tracing::debug!("Rejected past date {}", date);
                (
                    StatusCode::BAD_REQUEST,
                    json!({
                        "error": DATE_IN_PAST_MESSAGE
                    }),
                )
            }
            Self::Query(QueryError::Upstream(e)) => {
                tracing::error!("API Error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": UPSTREAM_FAILURE_MESSAGE
                    }),
                )
            }
        };

        (status_code, Json(body)).into_response()
    }
}

impl From<QueryError> for WebError {
    fn from(error: QueryError) -> Self {
        Self::Query(error)
    }
}

pub type ApiResult<T> = Result<T, WebError>;
