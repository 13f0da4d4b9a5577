//! SQLite connection, table DDL and demo seeding.
//!
//! The process holds a single long-lived connection. The pool is pinned to one connection
//! that never idles out, which also keeps `sqlite::memory:` databases alive for tests.

use crate::error::{AppError, ConfigError};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

/// DDL in dependency order. Range CHECKs mirror the application validators so a row that
/// bypasses them is still refused.
const TABLES: &[(&str, &str)] = &[
    (
        "campers",
        r#"
        CREATE TABLE IF NOT EXISTS campers (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL CHECK (length(name) > 0),
            age INTEGER NOT NULL CHECK (age BETWEEN 8 AND 18)
        )
        "#,
    ),
    (
        "activities",
        r#"
        CREATE TABLE IF NOT EXISTS activities (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL CHECK (length(name) > 0),
            difficulty INTEGER NOT NULL
        )
        "#,
    ),
    (
        "signups",
        r#"
        CREATE TABLE IF NOT EXISTS signups (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            camper_id INTEGER NOT NULL REFERENCES campers (id) ON DELETE CASCADE,
            activity_id INTEGER NOT NULL REFERENCES activities (id) ON DELETE CASCADE,
            time INTEGER NOT NULL CHECK (time BETWEEN 0 AND 23)
        )
        "#,
    ),
];

/// Open the process-wide store. Accepts any sqlx SQLite url (`sqlite://app.db`,
/// `sqlite:///abs/path.db`, `sqlite::memory:`); file databases are created if missing.
pub async fn connect(database_url: &str) -> Result<SqlitePool, ConfigError> {
    let opts = SqliteConnectOptions::from_str(database_url)
        .map_err(|source| ConfigError::InvalidDatabaseUrl {
            url: database_url.to_string(),
            source,
        })?
        .create_if_missing(true)
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None::<Duration>)
        .max_lifetime(None::<Duration>)
        .connect_with(opts)
        .await
        .map_err(|source| ConfigError::Open {
            url: database_url.to_string(),
            source,
        })?;
    Ok(pool)
}

/// Create the three tables if they do not exist yet.
pub async fn ensure_tables(pool: &SqlitePool) -> Result<(), AppError> {
    for (name, ddl) in TABLES {
        tracing::debug!(table = %name, "ensure table");
        sqlx::query(ddl).execute(pool).await?;
    }
    Ok(())
}

const SEED_ACTIVITIES: &[(&str, i64)] = &[
    ("Archery", 2),
    ("Canoeing", 3),
    ("Swimming", 1),
    ("Rock Climbing", 5),
    ("Arts and Crafts", 1),
    ("Orienteering", 4),
];

const SEED_CAMPERS: &[(&str, i64)] = &[
    ("Caitlin", 8),
    ("Lizzie", 9),
    ("Nicholas", 12),
    ("Ashley", 14),
    ("Joshua", 16),
    ("Maya", 18),
];

/// Replace all rows with a fixed demo data set. Returns (activities, campers) inserted.
pub async fn seed(pool: &SqlitePool) -> Result<(usize, usize), AppError> {
    let mut tx = pool.begin().await?;
    for table in ["signups", "campers", "activities"] {
        sqlx::query(&format!("DELETE FROM {}", table))
            .execute(&mut *tx)
            .await?;
    }
    // AUTOINCREMENT keeps its high-water mark here; reset it so seeded ids start at 1.
    sqlx::query("DELETE FROM sqlite_sequence")
        .execute(&mut *tx)
        .await?;
    for (name, difficulty) in SEED_ACTIVITIES {
        sqlx::query("INSERT INTO activities (name, difficulty) VALUES (?, ?)")
            .bind(*name)
            .bind(*difficulty)
            .execute(&mut *tx)
            .await?;
    }
    for (name, age) in SEED_CAMPERS {
        sqlx::query("INSERT INTO campers (name, age) VALUES (?, ?)")
            .bind(*name)
            .bind(*age)
            .execute(&mut *tx)
            .await?;
    }
    tx.commit().await?;
    Ok((SEED_ACTIVITIES.len(), SEED_CAMPERS.len()))
}
