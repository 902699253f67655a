//! SQLite access.
//!
//! Every unit of work opens its own connection to the database file and runs
//! on Tokio's blocking pool, so a slow query never stalls an Actix worker and
//! no connection is shared between requests.

use crate::error::ApiError;
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS reps (
    id            TEXT PRIMARY KEY,
    email         TEXT NOT NULL UNIQUE COLLATE NOCASE,
    name          TEXT NOT NULL DEFAULT '',
    password_hash TEXT NOT NULL,
    created_at    TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS sessions (
    token      TEXT PRIMARY KEY,
    rep_id     TEXT NOT NULL REFERENCES reps(id) ON DELETE CASCADE,
    expires_at INTEGER NOT NULL
);

CREATE TABLE IF NOT EXISTS forms (
    id           TEXT PRIMARY KEY,
    form_type    TEXT NOT NULL,
    title        TEXT NOT NULL,
    status       TEXT NOT NULL,
    fields       TEXT NOT NULL,
    submitted_by TEXT NOT NULL,
    submitted_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS forms_by_type ON forms (form_type, submitted_at DESC);
";

#[derive(Clone, Debug)]
pub struct Db {
    path: Arc<PathBuf>,
}

impl Db {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: Arc::new(path.as_ref().to_path_buf()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn open(&self) -> Result<Connection, ApiError> {
        let conn = Connection::open(self.path.as_path())?;
        conn.busy_timeout(Duration::from_secs(5))?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        Ok(conn)
    }

    /// Creates the tables if they do not exist yet.
    pub fn init(&self) -> Result<(), ApiError> {
        let conn = self.open()?;
        conn.execute_batch(SCHEMA)?;
        Ok(())
    }

    /// Runs `work` against a fresh connection on the blocking thread pool.
    pub async fn call<T, F>(&self, work: F) -> Result<T, ApiError>
    where
        F: FnOnce(&Connection) -> Result<T, ApiError> + Send + 'static,
        T: Send + 'static,
    {
        let db = self.clone();
        tokio::task::spawn_blocking(move || {
            let conn = db.open()?;
            work(&conn)
        })
        .await
        .map_err(|e| ApiError::Internal(format!("database task failed: {}", e)))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn init_is_idempotent_and_creates_tables() {
        let dir = tempfile::tempdir().unwrap();
        let db = Db::new(dir.path().join("intake.sqlite"));
        db.init().unwrap();
        db.init().unwrap();

        let tables: Vec<String> = db
            .call(|conn| {
                let mut stmt = conn.prepare(
                    "SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name",
                )?;
                let names = stmt
                    .query_map([], |row| row.get(0))?
                    .collect::<Result<Vec<String>, _>>()?;
                Ok(names)
            })
            .await
            .unwrap();
        assert_eq!(tables, vec!["forms", "reps", "sessions"]);
    }
}
