//! Shared application state injected into handlers as `web::Data<AppState>`.

use crate::db::Db;
use chrono::Duration;

/// Cloned into every Actix worker. Holds no connection, only what is needed
/// to open one, plus the session lifetime applied at login.
#[derive(Clone, Debug)]
pub struct AppState {
    pub db: Db,
    pub session_ttl: Duration,
}

impl AppState {
    pub fn new(db: Db, session_hours: i64) -> Self {
        Self {
            db,
            session_ttl: Duration::hours(session_hours),
        }
    }
}
