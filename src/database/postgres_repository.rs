use crate::error::app_error::AppError;
use sqlx::PgPool;

#[derive(Clone)]
pub struct PostgresRepository {
    pub pool: PgPool,
}

impl PostgresRepository {
    /// Round-trip to the database, used by the health check.
    pub async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::db("Database ping failed", e))?;

        Ok(())
    }
}
