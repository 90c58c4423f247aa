use axum::{Router, routing::get};
use football_api::client::FootballApi;
use tower_http::cors::CorsLayer;

use crate::handlers::list_matches;

pub fn routes() -> Router<FootballApi> {
    Router::new().route("/matches", get(list_matches))
}

pub fn app(api: FootballApi) -> Router {
    Router::new()
        .nest("/api", routes())
        .layer(CorsLayer::permissive())
        .with_state(api)
}
