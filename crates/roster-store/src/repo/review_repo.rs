//! Review record manager
//!
//! Maps `Review` values to rows in the `reviews` table and keeps an identity
//! cache so every row id is represented by exactly one in-memory record per
//! repo. The cache lives as long as the repo; create a fresh repo for a fresh
//! session.
//!
//! Every statement runs in SQLite autocommit mode and is durable when the
//! call returns, unless the caller opened a transaction on the connection.

#![allow(clippy::result_large_err)]

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use roster_core::{EmployeeDirectory, ExError, ExErrorKind, Review, RosterError};
use rusqlite::{params, Connection, OptionalExtension};

use crate::errors::{from_rusqlite, Result};

const CREATE_TABLE_SQL: &str = "CREATE TABLE IF NOT EXISTS reviews (
    id INTEGER PRIMARY KEY,
    year INTEGER,
    summary TEXT,
    employee_id INTEGER
)";
const DROP_TABLE_SQL: &str = "DROP TABLE IF EXISTS reviews";
const INSERT_SQL: &str = "INSERT INTO reviews (year, summary, employee_id) VALUES (?1, ?2, ?3)";
const UPDATE_SQL: &str = "UPDATE reviews SET year = ?1, summary = ?2, employee_id = ?3 WHERE id = ?4";
const DELETE_SQL: &str = "DELETE FROM reviews WHERE id = ?1";
const SELECT_BY_ID_SQL: &str = "SELECT id, year, summary, employee_id FROM reviews WHERE id = ?1";
const SELECT_ALL_SQL: &str = "SELECT id, year, summary, employee_id FROM reviews";

/// Raw `reviews` row, before reconciliation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewRow {
    pub id: i64,
    pub year: i64,
    pub summary: String,
    pub employee_id: i64,
}

impl ReviewRow {
    /// Read a row selected as `id, year, summary, employee_id`
    fn from_sql(row: &rusqlite::Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            year: row.get(1)?,
            summary: row.get(2)?,
            employee_id: row.get(3)?,
        })
    }
}

impl From<(i64, i64, String, i64)> for ReviewRow {
    fn from((id, year, summary, employee_id): (i64, i64, String, i64)) -> Self {
        Self {
            id,
            year,
            summary,
            employee_id,
        }
    }
}

/// Review repository with an identity cache
///
/// `D` is the employee lookup used to validate `employee_id` on every
/// construction and reconciliation.
pub struct ReviewRepo<'c, D> {
    conn: &'c Connection,
    directory: D,
    identity: HashMap<i64, Review>,
}

impl<'c, D: EmployeeDirectory> ReviewRepo<'c, D> {
    /// Create a repository with an empty identity cache
    pub fn new(conn: &'c Connection, directory: D) -> Self {
        Self {
            conn,
            directory,
            identity: HashMap::new(),
        }
    }

    /// The employee directory used for validation
    pub fn directory(&self) -> &D {
        &self.directory
    }

    /// Create the `reviews` table if it does not exist
    pub fn create_table(&self) -> Result<()> {
        self.conn
            .execute(CREATE_TABLE_SQL, [])
            .map_err(from_rusqlite)?;
        tracing::debug!(table = "reviews", "ensured table exists");
        Ok(())
    }

    /// Drop the `reviews` table if it exists
    ///
    /// The identity cache is left alone; cached records simply no longer
    /// have rows behind them.
    pub fn drop_table(&self) -> Result<()> {
        self.conn
            .execute(DROP_TABLE_SQL, [])
            .map_err(from_rusqlite)?;
        tracing::debug!(table = "reviews", "dropped table");
        Ok(())
    }

    /// Build an unpersisted review, validated against this repo's directory
    ///
    /// Never touches the `reviews` table.
    ///
    /// # Errors
    /// * `Validation` - If any field is invalid
    pub fn build(&self, year: i64, summary: impl Into<String>, employee_id: i64) -> Result<Review> {
        Ok(Review::new(year, summary, employee_id, &self.directory)?)
    }

    /// Persist a review
    ///
    /// An unpersisted review is inserted and given the storage id. A review
    /// that already has an id is written with `update` instead. Either way
    /// the review becomes the cached record for its id, and a reference to
    /// that cached record is returned.
    ///
    /// # Errors
    /// * `NotFound` - If the review has an id but no row matches it; the
    ///   review is not cached
    pub fn save(&mut self, mut review: Review) -> Result<&mut Review> {
        let id = match review.id() {
            Some(id) => {
                if self.update(&review)? == 0 {
                    return Err(ExError::new(ExErrorKind::NotFound)
                        .with_op("review_save")
                        .with_entity_id(id.to_string())
                        .with_message(format!("Review {} has no row to update", id)));
                }
                id
            }
            None => {
                self.conn
                    .execute(
                        INSERT_SQL,
                        params![review.year(), review.summary(), review.employee_id()],
                    )
                    .map_err(from_rusqlite)?;
                let id = self.conn.last_insert_rowid();
                review.mark_persisted(id);
                tracing::debug!(review_id = id, "inserted review");
                id
            }
        };

        Ok(self.cache(id, review))
    }

    /// Build and save a review in one step
    ///
    /// Storage is not touched when validation fails.
    pub fn create(
        &mut self,
        year: i64,
        summary: impl Into<String>,
        employee_id: i64,
    ) -> Result<&mut Review> {
        let review = self.build(year, summary, employee_id)?;
        self.save(review)
    }

    /// Write a review's current fields to the row with its id
    ///
    /// Returns the number of rows affected. A review without an id, or whose
    /// row no longer exists, affects zero rows and is not an error.
    pub fn update(&self, review: &Review) -> Result<usize> {
        let rows = self
            .conn
            .execute(
                UPDATE_SQL,
                params![
                    review.year(),
                    review.summary(),
                    review.employee_id(),
                    review.id()
                ],
            )
            .map_err(from_rusqlite)?;

        tracing::debug!(
            review_id = ?review.id(),
            rows_affected = rows,
            "updated review"
        );
        Ok(rows)
    }

    /// Write the cached record for `id`
    ///
    /// # Errors
    /// * `NotFound` - If `id` is not in the identity cache
    pub fn update_cached(&self, id: i64) -> Result<usize> {
        let review = self
            .identity
            .get(&id)
            .ok_or(RosterError::ReviewNotCached { review_id: id })?;
        self.update(review)
    }

    /// Delete the row with `id`
    ///
    /// Returns the number of rows deleted together with the evicted record.
    /// If the record was cached it is handed back with its id cleared, ready
    /// to be saved again as a new row. The row itself is never loaded, so a
    /// row that would no longer validate can still be deleted. Deleting an id
    /// with no row reports zero rows and is not an error.
    pub fn delete(&mut self, id: i64) -> Result<(usize, Option<Review>)> {
        let rows = self
            .conn
            .execute(DELETE_SQL, params![id])
            .map_err(from_rusqlite)?;

        let evicted = self.identity.remove(&id).map(|mut review| {
            review.detach();
            review
        });

        tracing::debug!(
            review_id = id,
            rows_affected = rows,
            evicted = evicted.is_some(),
            "deleted review"
        );
        Ok((rows, evicted))
    }

    /// Reconcile a raw row with the identity cache
    ///
    /// If the id is cached, the cached record takes the row's values
    /// (last read wins) and stays the record for that id. Otherwise a new
    /// record is cached. The row is validated in full before anything is
    /// overwritten.
    pub fn instance_from_db(&mut self, row: ReviewRow) -> Result<&mut Review> {
        let ReviewRow {
            id,
            year,
            summary,
            employee_id,
        } = row;
        let fresh = Review::from_row(id, year, summary, employee_id, &self.directory)?;

        tracing::trace!(
            review_id = id,
            cache_hit = self.identity.contains_key(&id),
            "reconciling review"
        );
        Ok(self.cache(id, fresh))
    }

    /// Load the review with `id`
    ///
    /// Returns `None` when no row matches.
    pub fn find_by_id(&mut self, id: i64) -> Result<Option<&mut Review>> {
        let row = self
            .conn
            .query_row(SELECT_BY_ID_SQL, params![id], ReviewRow::from_sql)
            .optional()
            .map_err(from_rusqlite)?;

        match row {
            Some(row) => Ok(Some(self.instance_from_db(row)?)),
            None => Ok(None),
        }
    }

    /// Load every review, in the order storage returns them
    pub fn get_all(&mut self) -> Result<Vec<&Review>> {
        let rows = self.select_all()?;
        tracing::debug!(row_count = rows.len(), "loaded reviews");

        let mut ids = Vec::with_capacity(rows.len());
        for row in rows {
            ids.push(row.id);
            self.instance_from_db(row)?;
        }

        Ok(ids
            .iter()
            .filter_map(|id| self.identity.get(id))
            .collect())
    }

    /// Cached record for `id`, without touching storage
    pub fn get(&self, id: i64) -> Option<&Review> {
        self.identity.get(&id)
    }

    /// Mutable cached record for `id`, without touching storage
    ///
    /// Changes made through the record's setters are written by
    /// `update_cached`.
    pub fn get_mut(&mut self, id: i64) -> Option<&mut Review> {
        self.identity.get_mut(&id)
    }

    /// Reassign the employee of a cached record
    ///
    /// Validated against this repo's directory; the cached value is left as
    /// it was on failure.
    ///
    /// # Errors
    /// * `NotFound` - If `id` is not in the identity cache
    /// * `Validation` - If no employee with `employee_id` exists
    pub fn set_employee_id(&mut self, id: i64, employee_id: i64) -> Result<()> {
        let review = self
            .identity
            .get_mut(&id)
            .ok_or(RosterError::ReviewNotCached { review_id: id })?;
        review.set_employee_id(employee_id, &self.directory)?;
        Ok(())
    }

    /// True if `id` has a cached record
    pub fn is_cached(&self, id: i64) -> bool {
        self.identity.contains_key(&id)
    }

    /// Number of cached records
    pub fn cached_len(&self) -> usize {
        self.identity.len()
    }

    fn select_all(&self) -> Result<Vec<ReviewRow>> {
        let mut stmt = self.conn.prepare(SELECT_ALL_SQL).map_err(from_rusqlite)?;
        let rows = stmt
            .query_map([], ReviewRow::from_sql)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;
        Ok(rows)
    }

    /// Put `review` in the cache slot for `id`, overwriting in place
    fn cache(&mut self, id: i64, review: Review) -> &mut Review {
        match self.identity.entry(id) {
            Entry::Occupied(entry) => {
                let cached = entry.into_mut();
                *cached = review;
                cached
            }
            Entry::Vacant(entry) => entry.insert(review),
        }
    }
}
