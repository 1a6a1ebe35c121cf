use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, TransactionTrait,
};
use tracing::debug;

use crate::{
    entities::movie,
    error::{AppError, AppResult},
    models::{Movie, MovieSummary, MovieUpdate, NewMovie},
    query::MovieQuery,
};

/// Row-level access to the `movies` table.
///
/// Reads borrow a pooled connection for a single statement. Writes run inside
/// one transaction that is committed once on success; any early return drops
/// the transaction, which rolls it back and hands the connection back to the pool.
#[derive(Clone)]
pub struct MovieStore {
    db: DatabaseConnection,
}

impl MovieStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn count(&self) -> AppResult<u64> {
        Ok(movie::Entity::find().count(&self.db).await?)
    }

    pub async fn list(&self, query: &MovieQuery) -> AppResult<Vec<MovieSummary>> {
        let rows = query.select().into_model::<MovieSummary>().all(&self.db).await?;
        debug!(
            rows = rows.len(),
            genre = ?query.genre,
            sort = ?query.sort,
            limit = ?query.limit,
            "listed movies"
        );
        Ok(rows)
    }

    pub async fn get(&self, id: i64) -> AppResult<Movie> {
        movie::Entity::find_by_id(id).one(&self.db).await?.ok_or(AppError::NotFound(id))
    }

    pub async fn create(&self, new: NewMovie) -> AppResult<Movie> {
        let txn = self.db.begin().await?;
        let created = new.into_active_model().insert(&txn).await?;
        txn.commit().await?;

        debug!(id = created.id, "created movie");
        Ok(created)
    }

    /// Applies only the fields present in `update`. An empty update performs no
    /// write and returns the stored row unchanged.
    pub async fn update(&self, id: i64, update: MovieUpdate) -> AppResult<Movie> {
        let txn = self.db.begin().await?;

        let Some(existing) = movie::Entity::find_by_id(id).one(&txn).await? else {
            return Err(AppError::NotFound(id));
        };

        if update.is_empty() {
            debug!(id, "empty update, nothing to write");
            return Ok(existing);
        }

        let fields = update.fields();
        let updated = update.into_active_model(id).update(&txn).await?;
        txn.commit().await?;

        debug!(id, ?fields, "updated movie");
        Ok(updated)
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let txn = self.db.begin().await?;

        if movie::Entity::find_by_id(id).one(&txn).await?.is_none() {
            return Err(AppError::NotFound(id));
        }

        movie::Entity::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;

        debug!(id, "deleted movie");
        Ok(())
    }
}
