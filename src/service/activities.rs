//! Activity reads and deletes.

use crate::error::AppError;
use crate::model::Activity;
use sqlx::SqlitePool;

pub struct ActivityService;

impl ActivityService {
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Activity>, AppError> {
        let sql = "SELECT id, name, difficulty FROM activities ORDER BY id";
        tracing::debug!(sql = %sql, "query");
        Ok(sqlx::query_as::<_, Activity>(sql).fetch_all(pool).await?)
    }

    /// Delete one activity. Its signups go with it through the foreign key's
    /// `ON DELETE CASCADE`. Returns false if no row had that id.
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, AppError> {
        let sql = "DELETE FROM activities WHERE id = ?";
        tracing::debug!(sql = %sql, id, "query");
        let result = sqlx::query(sql).bind(id).execute(pool).await?;
        Ok(result.rows_affected() > 0)
    }
}
