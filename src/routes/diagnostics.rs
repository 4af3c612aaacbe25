use axum::{extract::State, response::Json};

use crate::db::StandingsStore;
use crate::error::ApiError;
use crate::models::{ConnectionTestResponse, TablesResponse};

/// GET /test-db - Check the store is reachable
pub async fn test_db(
    State(store): State<StandingsStore>,
) -> Result<Json<ConnectionTestResponse>, ApiError> {
    let result = store.ping().await.map_err(ApiError::ConnectionProbe)?;

    Ok(Json(ConnectionTestResponse {
        message: "Database connection successful!".to_string(),
        result,
    }))
}

/// GET /tables - List tables visible in the main schema
pub async fn list_tables(
    State(store): State<StandingsStore>,
) -> Result<Json<TablesResponse>, ApiError> {
    let tables = store.list_tables().await?;

    Ok(Json(TablesResponse { tables }))
}
