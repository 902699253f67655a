use crate::db::Db;
use crate::services;
use crate::state::AppState;
use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{web, App, Error};
use tempfile::TempDir;

/// Fresh database in a temporary directory plus helpers to build the app and
/// mint tokens. The directory lives as long as the context.
pub struct TestContext {
    _dir: TempDir,
    pub state: AppState,
}

impl TestContext {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        let db = Db::new(dir.path().join("intake.sqlite"));
        db.init().expect("schema");
        Self {
            _dir: dir,
            state: AppState::new(db, 1),
        }
    }

    pub fn app(
        &self,
    ) -> App<
        impl ServiceFactory<
            ServiceRequest,
            Config = (),
            Response = ServiceResponse<impl MessageBody>,
            Error = Error,
            InitError = (),
        >,
    > {
        let state = self.state.clone();
        App::new()
            .app_data(web::Data::new(state))
            .configure(|cfg| services::configure(cfg, 1024 * 1024))
    }

    pub fn seed_account(&self, email: &str, password: &str) {
        let conn = self.state.db.open().expect("open");
        services::auth::ensure_account(&conn, email, password).expect("seed account");
    }

    pub fn token_for(&self, email: &str) -> String {
        let conn = self.state.db.open().expect("open");
        services::auth::create_test_session(&conn, email).expect("session")
    }
}
