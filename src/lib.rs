use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod db;
pub mod error;
pub mod filters;
pub mod models;
pub mod routes;

use db::StandingsStore;

/// Builds the full router over an already-connected store.
pub fn app(store: StandingsStore) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(routes::home))

        // Standings endpoints
        .route("/standings", get(routes::standings::get_standings))
        .route("/standings/{season}", get(routes::standings::get_standings_by_season))
        .route("/team", get(routes::standings::get_team_performance))
        .route("/search", get(routes::standings::search_standings))

        // Diagnostics
        .route("/test-db", get(routes::diagnostics::test_db))
        .route("/api/test-db", get(routes::diagnostics::test_db))
        .route("/tables", get(routes::diagnostics::list_tables))
        .route("/api/tables", get(routes::diagnostics::list_tables))

        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}
