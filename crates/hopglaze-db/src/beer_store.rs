//! Store operations on the `beer` table.
//!
//! Beers are created out-of-band through [`BeerStore::insert`] — the HTTP
//! surface only reads. Name uniqueness is enforced by the `UNIQUE` constraint
//! on the table and surfaced as [`DbError::DuplicateName`].

use hopglaze_types::{Beer, BeerId};
use sqlx::SqlitePool;

use crate::error::DbError;

/// Raw row shape of the `beer` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct BeerRow {
    /// Rowid primary key.
    pub id: i64,
    /// Unique display name.
    pub name: String,
}

impl From<BeerRow> for Beer {
    fn from(row: BeerRow) -> Self {
        Self {
            id: BeerId::from(row.id),
            name: row.name,
        }
    }
}

/// Operations on the `beer` table.
pub struct BeerStore<'a> {
    pool: &'a SqlitePool,
}

impl<'a> BeerStore<'a> {
    /// Create a new beer store bound to a connection pool.
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Return all beers in storage order (ascending id).
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Sqlite`] if the query fails.
    pub async fn list(&self) -> Result<Vec<Beer>, DbError> {
        let rows = sqlx::query_as::<_, BeerRow>("SELECT id, name FROM beer ORDER BY id")
            .fetch_all(self.pool)
            .await?;

        Ok(rows.into_iter().map(Beer::from).collect())
    }

    /// Look up a beer by exact name. The first matching row wins.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Sqlite`] if the query fails.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Beer>, DbError> {
        let row =
            sqlx::query_as::<_, BeerRow>("SELECT id, name FROM beer WHERE name = ?1 LIMIT 1")
                .bind(name)
                .fetch_optional(self.pool)
                .await?;

        Ok(row.map(Beer::from))
    }

    /// Insert a new beer and return it with its store-assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::DuplicateName`] if a beer with the same name
    /// already exists, or [`DbError::Sqlite`] for any other failure.
    pub async fn insert(&self, name: &str) -> Result<Beer, DbError> {
        let row = sqlx::query_as::<_, BeerRow>(
            "INSERT INTO beer (name) VALUES (?1) RETURNING id, name",
        )
        .bind(name)
        .fetch_one(self.pool)
        .await
        .map_err(|e| map_unique_violation(e, name))?;

        tracing::debug!(id = row.id, name = row.name, "inserted beer");
        Ok(Beer::from(row))
    }
}

/// Translate a unique-constraint violation into [`DbError::DuplicateName`].
pub(crate) fn map_unique_violation(e: sqlx::Error, name: &str) -> DbError {
    if e.as_database_error().is_some_and(|db| db.is_unique_violation()) {
        DbError::DuplicateName(name.to_owned())
    } else {
        DbError::Sqlite(e)
    }
}
