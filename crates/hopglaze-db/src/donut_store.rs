//! Store operations on the `donut` table.
//!
//! Mirrors [`BeerStore`](crate::beer_store::BeerStore): the two tables have
//! the same shape and the same read-heavy access pattern.

use hopglaze_types::{Donut, DonutId};
use sqlx::SqlitePool;

use crate::beer_store::map_unique_violation;
use crate::error::DbError;

/// Raw row shape of the `donut` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct DonutRow {
    /// Rowid primary key.
    pub id: i64,
    /// Unique display name.
    pub name: String,
}

impl From<DonutRow> for Donut {
    fn from(row: DonutRow) -> Self {
        Self {
            id: DonutId::from(row.id),
            name: row.name,
        }
    }
}

/// Operations on the `donut` table.
pub struct DonutStore<'a> {
    pool: &'a SqlitePool,
}

impl<'a> DonutStore<'a> {
    /// Create a new donut store bound to a connection pool.
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Return all donuts in storage order (ascending id).
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Sqlite`] if the query fails.
    pub async fn list(&self) -> Result<Vec<Donut>, DbError> {
        let rows = sqlx::query_as::<_, DonutRow>("SELECT id, name FROM donut ORDER BY id")
            .fetch_all(self.pool)
            .await?;

        Ok(rows.into_iter().map(Donut::from).collect())
    }

    /// Look up a donut by exact name. The first matching row wins.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Sqlite`] if the query fails.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Donut>, DbError> {
        let row =
            sqlx::query_as::<_, DonutRow>("SELECT id, name FROM donut WHERE name = ?1 LIMIT 1")
                .bind(name)
                .fetch_optional(self.pool)
                .await?;

        Ok(row.map(Donut::from))
    }

    /// Insert a new donut and return it with its store-assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::DuplicateName`] if a donut with the same name
    /// already exists, or [`DbError::Sqlite`] for any other failure.
    pub async fn insert(&self, name: &str) -> Result<Donut, DbError> {
        let row = sqlx::query_as::<_, DonutRow>(
            "INSERT INTO donut (name) VALUES (?1) RETURNING id, name",
        )
        .bind(name)
        .fetch_one(self.pool)
        .await
        .map_err(|e| map_unique_violation(e, name))?;

        tracing::debug!(id = row.id, name = row.name, "inserted donut");
        Ok(Donut::from(row))
    }
}
