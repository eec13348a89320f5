//! Table bootstrap
//!
//! Creates the two collections when they are missing. Existing tables are
//! left untouched.

use sqlx::PgPool;
use tracing::info;

const SCHEMA: &[&str] = &[
    r"
    CREATE TABLE IF NOT EXISTS participants (
        name        TEXT PRIMARY KEY,
        last_status TIMESTAMPTZ NOT NULL
    )
    ",
    r"
    CREATE INDEX IF NOT EXISTS participants_last_status_idx
        ON participants (last_status)
    ",
    r"
    CREATE TABLE IF NOT EXISTS messages (
        id        BIGSERIAL PRIMARY KEY,
        from_name TEXT NOT NULL,
        to_name   TEXT NOT NULL,
        body      TEXT NOT NULL,
        kind      TEXT NOT NULL CHECK (kind IN ('message', 'private_message', 'status')),
        sent_time TEXT NOT NULL
    )
    ",
];

/// Create tables and indexes if they do not exist
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    for statement in SCHEMA {
        sqlx::query(statement).execute(pool).await?;
    }
    info!("Database schema ready");
    Ok(())
}
