use crate::error::ApiError;
use chrono::{Duration, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use uuid::Uuid;

/// Identity attached to a valid bearer token.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionRep {
    pub rep_id: String,
    pub email: String,
}

/// Issues a new opaque token for `rep_id`, valid for `ttl`. Expired rows of
/// every rep are purged on the way.
pub fn create(conn: &Connection, rep_id: &str, ttl: Duration) -> Result<String, ApiError> {
    let now = Utc::now();
    let expires_at = now
        .checked_add_signed(ttl)
        .ok_or_else(|| ApiError::Internal(format!("session lifetime {} out of range", ttl)))?;
    conn.execute(
        "DELETE FROM sessions WHERE expires_at <= ?1",
        params![now.timestamp()],
    )?;
    let token = format!(
        "{}{}",
        Uuid::new_v4().simple(),
        Uuid::new_v4().simple()
    );
    conn.execute(
        "INSERT INTO sessions (token, rep_id, expires_at) VALUES (?1, ?2, ?3)",
        params![token, rep_id, expires_at.timestamp()],
    )?;
    Ok(token)
}

/// Rep owning `token`, or `None` for unknown or expired tokens.
pub fn lookup(conn: &Connection, token: &str) -> Result<Option<SessionRep>, ApiError> {
    let rep = conn
        .query_row(
            "SELECT r.id, r.email FROM sessions s JOIN reps r ON r.id = s.rep_id
             WHERE s.token = ?1 AND s.expires_at > ?2",
            params![token, Utc::now().timestamp()],
            |row| {
                Ok(SessionRep {
                    rep_id: row.get(0)?,
                    email: row.get(1)?,
                })
            },
        )
        .optional()?;
    Ok(rep)
}

pub fn revoke(conn: &Connection, token: &str) -> Result<bool, ApiError> {
    let removed = conn.execute("DELETE FROM sessions WHERE token = ?1", params![token])?;
    Ok(removed > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Db;
    use crate::services::auth::reps;

    fn setup() -> (tempfile::TempDir, Connection, String) {
        let dir = tempfile::tempdir().unwrap();
        let db = Db::new(dir.path().join("sessions.sqlite"));
        db.init().unwrap();
        let conn = db.open().unwrap();
        let rep = reps::insert(&conn, "rep@example.com", "Rep", "hash").unwrap();
        (dir, conn, rep.id)
    }

    #[test]
    fn token_resolves_until_revoked() {
        let (_dir, conn, rep_id) = setup();
        let token = create(&conn, &rep_id, Duration::hours(1)).unwrap();
        assert_eq!(token.len(), 64);

        let rep = lookup(&conn, &token).unwrap().unwrap();
        assert_eq!(rep.email, "rep@example.com");

        assert!(revoke(&conn, &token).unwrap());
        assert!(lookup(&conn, &token).unwrap().is_none());
        assert!(!revoke(&conn, &token).unwrap());
    }

    #[test]
    fn expired_tokens_are_rejected() {
        let (_dir, conn, rep_id) = setup();
        let token = create(&conn, &rep_id, Duration::seconds(-1)).unwrap();
        assert!(lookup(&conn, &token).unwrap().is_none());
    }

    #[test]
    fn unrepresentable_lifetime_is_an_error_not_a_panic() {
        let (_dir, conn, rep_id) = setup();
        assert!(matches!(
            create(&conn, &rep_id, Duration::MAX),
            Err(ApiError::Internal(_))
        ));
    }
}
