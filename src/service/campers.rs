//! Camper reads and writes. Updates run inside a transaction so a rejected patch leaves
//! the stored row untouched.

use crate::error::AppError;
use crate::model::{Activity, Camper, CamperDraft, CamperPatch, Signup, SignupWithActivity, ValidCamper};
use crate::service::validate_camper;
use sqlx::SqlitePool;

pub struct CamperService;

#[derive(sqlx::FromRow)]
struct SignupActivityRow {
    id: i64,
    camper_id: i64,
    activity_id: i64,
    time: i64,
    activity_name: String,
    activity_difficulty: i64,
}

impl From<SignupActivityRow> for SignupWithActivity {
    fn from(r: SignupActivityRow) -> Self {
        SignupWithActivity {
            signup: Signup {
                id: r.id,
                camper_id: r.camper_id,
                activity_id: r.activity_id,
                time: r.time,
            },
            activity: Activity {
                id: r.activity_id,
                name: r.activity_name,
                difficulty: r.activity_difficulty,
            },
        }
    }
}

impl CamperService {
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Camper>, AppError> {
        let sql = "SELECT id, name, age FROM campers ORDER BY id";
        tracing::debug!(sql = %sql, "query");
        Ok(sqlx::query_as::<_, Camper>(sql).fetch_all(pool).await?)
    }

    pub async fn find(pool: &SqlitePool, id: i64) -> Result<Option<Camper>, AppError> {
        let sql = "SELECT id, name, age FROM campers WHERE id = ?";
        tracing::debug!(sql = %sql, id, "query");
        Ok(sqlx::query_as::<_, Camper>(sql)
            .bind(id)
            .fetch_optional(pool)
            .await?)
    }

    /// Signups of one camper, each joined with its activity, ordered by signup id.
    pub async fn signups(
        pool: &SqlitePool,
        camper_id: i64,
    ) -> Result<Vec<SignupWithActivity>, AppError> {
        let sql = r#"
            SELECT s.id, s.camper_id, s.activity_id, s.time,
                   a.name AS activity_name, a.difficulty AS activity_difficulty
            FROM signups s
            JOIN activities a ON a.id = s.activity_id
            WHERE s.camper_id = ?
            ORDER BY s.id
        "#;
        tracing::debug!(sql = %sql, camper_id, "query");
        let rows = sqlx::query_as::<_, SignupActivityRow>(sql)
            .bind(camper_id)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(SignupWithActivity::from).collect())
    }

    pub async fn create(pool: &SqlitePool, camper: &ValidCamper) -> Result<Camper, AppError> {
        let sql = "INSERT INTO campers (name, age) VALUES (?, ?) RETURNING id, name, age";
        tracing::debug!(sql = %sql, "query");
        Ok(sqlx::query_as::<_, Camper>(sql)
            .bind(&camper.name)
            .bind(camper.age)
            .fetch_one(pool)
            .await?)
    }

    /// Apply a patch to the stored camper and validate the result as a whole.
    /// Returns `Ok(None)` when no camper has that id; nothing is written in that case
    /// or when validation fails.
    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        patch: CamperPatch,
    ) -> Result<Option<Camper>, AppError> {
        let mut tx = pool.begin().await?;
        let current = sqlx::query_as::<_, Camper>("SELECT id, name, age FROM campers WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        let Some(current) = current else {
            return Ok(None);
        };

        let mut draft = CamperDraft::from(&current);
        draft.apply(patch);
        let valid = validate_camper(&draft)?;

        let sql = "UPDATE campers SET name = ?, age = ? WHERE id = ? RETURNING id, name, age";
        tracing::debug!(sql = %sql, id, "query (tx)");
        let updated = sqlx::query_as::<_, Camper>(sql)
            .bind(&valid.name)
            .bind(valid.age)
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(Some(updated))
    }
}
