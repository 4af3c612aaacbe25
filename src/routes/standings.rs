use axum::{
    extract::{Path, Query, State},
    response::Json,
};

use crate::db::StandingsStore;
use crate::error::ApiError;
use crate::filters::{self, QueryParams};
use crate::models::StandingRecord;

/// GET /standings?season=&team=&min_points=&max_position= - List standings
pub async fn get_standings(
    State(store): State<StandingsStore>,
    Query(params): Query<QueryParams>,
) -> Result<Json<Vec<StandingRecord>>, ApiError> {
    let spec = filters::resolve_standings(&params);
    let standings = store.list_standings(&spec).await?;

    Ok(Json(standings))
}

/// GET /standings/{season} - One season's table, ordered by position
pub async fn get_standings_by_season(
    State(store): State<StandingsStore>,
    Path(season): Path<String>,
) -> Result<Json<Vec<StandingRecord>>, ApiError> {
    let season = parse_season(&season).ok_or(ApiError::NotFound)?;

    let spec = filters::resolve_season(season);
    let standings = store.season_table(&spec).await?;

    Ok(Json(standings))
}

/// GET /team?name=Arsenal&season=2004 - A team's record across seasons
pub async fn get_team_performance(
    State(store): State<StandingsStore>,
    Query(params): Query<QueryParams>,
) -> Result<Json<Vec<StandingRecord>>, ApiError> {
    let spec = filters::resolve_team(&params)?;
    let standings = store.team_history(&spec).await?;

    Ok(Json(standings))
}

/// GET /search?team=&season_start=&season_end=&position_start=&position_end=
pub async fn search_standings(
    State(store): State<StandingsStore>,
    Query(params): Query<QueryParams>,
) -> Result<Json<Vec<StandingRecord>>, ApiError> {
    let spec = filters::resolve_search(&params);
    let standings = store.search_standings(&spec).await?;

    Ok(Json(standings))
}

/// Path seasons are plain digits; signs or anything else do not match the route.
fn parse_season(raw: &str) -> Option<i64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn season_path_accepts_digits_only() {
        assert_eq!(parse_season("2014"), Some(2014));
        assert_eq!(parse_season("0"), Some(0));
        assert_eq!(parse_season("-1"), None);
        assert_eq!(parse_season("+5"), None);
        assert_eq!(parse_season("20x4"), None);
        assert_eq!(parse_season(""), None);
    }
}
