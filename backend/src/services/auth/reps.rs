use crate::error::ApiError;
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use uuid::Uuid;

/// A sales representative account as stored in the `reps` table.
#[derive(Debug, Clone)]
pub struct Rep {
    pub id: String,
    pub email: String,
    pub name: String,
    pub password_hash: String,
}

pub fn find_by_email(conn: &Connection, email: &str) -> Result<Option<Rep>, ApiError> {
    let rep = conn
        .query_row(
            "SELECT id, email, name, password_hash FROM reps WHERE email = ?1",
            params![email],
            |row| {
                Ok(Rep {
                    id: row.get(0)?,
                    email: row.get(1)?,
                    name: row.get(2)?,
                    password_hash: row.get(3)?,
                })
            },
        )
        .optional()?;
    Ok(rep)
}

/// Inserts a new rep; a duplicate email is reported as `Conflict`.
pub fn insert(
    conn: &Connection,
    email: &str,
    name: &str,
    password_hash: &str,
) -> Result<Rep, ApiError> {
    let id = Uuid::new_v4().to_string();
    let result = conn.execute(
        "INSERT INTO reps (id, email, name, password_hash, created_at) VALUES (?1, ?2, ?3, ?4, ?5)",
        params![id, email, name, password_hash, Utc::now()],
    );
    match result {
        Ok(_) => Ok(Rep {
            id,
            email: email.to_string(),
            name: name.to_string(),
            password_hash: password_hash.to_string(),
        }),
        Err(rusqlite::Error::SqliteFailure(err, _))
            if err.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            Err(ApiError::Conflict(format!(
                "An account already exists for {}",
                email
            )))
        }
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Db;

    #[test]
    fn emails_are_unique_regardless_of_case() {
        let dir = tempfile::tempdir().unwrap();
        let db = Db::new(dir.path().join("reps.sqlite"));
        db.init().unwrap();
        let conn = db.open().unwrap();

        insert(&conn, "alice@example.com", "Alice", "hash").unwrap();
        let dup = insert(&conn, "ALICE@example.com", "Alice", "hash");
        assert!(matches!(dup, Err(ApiError::Conflict(_))));

        let found = find_by_email(&conn, "Alice@Example.com").unwrap().unwrap();
        assert_eq!(found.name, "Alice");
        assert!(find_by_email(&conn, "bob@example.com").unwrap().is_none());
    }
}
