//! Signup creation.

use crate::error::AppError;
use crate::model::{Activity, Camper, Signup, SignupLinks, ValidSignup};
use sqlx::SqlitePool;

pub struct SignupService;

impl SignupService {
    /// Insert a signup and load both linked records in the same transaction.
    /// A camper or activity id that does not exist fails the insert with a
    /// foreign key violation, which surfaces as [`AppError::Integrity`].
    pub async fn create(pool: &SqlitePool, signup: &ValidSignup) -> Result<SignupLinks, AppError> {
        let mut tx = pool.begin().await?;
        let sql = "INSERT INTO signups (camper_id, activity_id, time) VALUES (?, ?, ?) \
                   RETURNING id, camper_id, activity_id, time";
        tracing::debug!(sql = %sql, camper_id = signup.camper_id, activity_id = signup.activity_id, "query (tx)");
        let row = sqlx::query_as::<_, Signup>(sql)
            .bind(signup.camper_id)
            .bind(signup.activity_id)
            .bind(signup.time)
            .fetch_one(&mut *tx)
            .await?;

        let camper = sqlx::query_as::<_, Camper>("SELECT id, name, age FROM campers WHERE id = ?")
            .bind(row.camper_id)
            .fetch_one(&mut *tx)
            .await?;
        let activity =
            sqlx::query_as::<_, Activity>("SELECT id, name, difficulty FROM activities WHERE id = ?")
                .bind(row.activity_id)
                .fetch_one(&mut *tx)
                .await?;
        tx.commit().await?;

        Ok(SignupLinks {
            signup: row,
            camper,
            activity,
        })
    }
}
