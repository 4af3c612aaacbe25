pub mod fold;
pub mod query;

use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

use crate::filters::FilterSpec;
use crate::models::StandingRecord;
use query::{SortOrder, StandingsQuery};

/// Data-access handle for the standings relation.
///
/// Built once at startup and cloned into each handler through axum state.
/// Holds no state besides the pool.
#[derive(Debug, Clone)]
pub struct StandingsStore {
    pool: SqlitePool,
}

impl StandingsStore {
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, sqlx::Error> {
        let pool = Self::pool_options(max_connections)
            .connect(database_url)
            .await?;

        Ok(Self::from_pool(pool))
    }

    /// Pool settings every store connection needs. Pools handed to
    /// [`StandingsStore::from_pool`] must be built from these so that
    /// `unicode_lower` exists on each connection.
    pub fn pool_options(max_connections: u32) -> SqlitePoolOptions {
        SqlitePoolOptions::new()
            .max_connections(max_connections)
            .after_connect(|conn, _meta| Box::pin(async move { fold::register(conn).await }))
    }

    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Waits for in-flight queries and closes every connection.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    /// Runs one filtered query against `standings`.
    pub async fn find(
        &self,
        spec: &FilterSpec,
        order: SortOrder,
    ) -> Result<Vec<StandingRecord>, sqlx::Error> {
        let query = StandingsQuery::new(spec, order);
        tracing::debug!(predicates = ?query.predicates(), ?order, "querying standings");

        let mut builder = query.build();
        builder
            .build_query_as::<StandingRecord>()
            .fetch_all(&self.pool)
            .await
    }

    // Standings queries

    pub async fn list_standings(&self, spec: &FilterSpec) -> Result<Vec<StandingRecord>, sqlx::Error> {
        self.find(spec, SortOrder::SeasonThenPosition).await
    }

    pub async fn season_table(&self, spec: &FilterSpec) -> Result<Vec<StandingRecord>, sqlx::Error> {
        self.find(spec, SortOrder::Position).await
    }

    pub async fn team_history(&self, spec: &FilterSpec) -> Result<Vec<StandingRecord>, sqlx::Error> {
        self.find(spec, SortOrder::Season).await
    }

    pub async fn search_standings(&self, spec: &FilterSpec) -> Result<Vec<StandingRecord>, sqlx::Error> {
        self.find(spec, SortOrder::SeasonThenPosition).await
    }

    // Diagnostics

    /// Trivial round trip to check the store is reachable.
    pub async fn ping(&self) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(r#"SELECT 1"#)
            .fetch_one(&self.pool)
            .await
    }

    /// Names of user tables in the main schema
    pub async fn list_tables(&self) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>(
            r#"SELECT name FROM sqlite_master
               WHERE type = 'table' AND name NOT LIKE 'sqlite_%'
               ORDER BY name"#
        )
        .fetch_all(&self.pool)
        .await
    }
}
