mod assets;
mod config;
mod db;
mod error;
mod services;
mod state;
#[cfg(test)]
mod test_support;

use crate::config::Config;
use crate::db::Db;
use crate::state::AppState;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::{error, info};
use std::io;
use std::thread;
use std::time::Duration;

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = Config::from_env().map_err(|e| {
        error!("Invalid configuration: {}", e);
        io::Error::new(io::ErrorKind::InvalidInput, e)
    })?;

    let db = Db::new(&config.db_path);
    db.init().map_err(|e| {
        error!("Could not initialise {}: {}", config.db_path.display(), e);
        io::Error::new(io::ErrorKind::Other, e)
    })?;
    info!("Using database {}", db.path().display());

    if let Some(seed) = &config.seed_account {
        let created = db
            .open()
            .and_then(|conn| services::auth::ensure_account(&conn, &seed.email, &seed.password))
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
        if created {
            info!("Created seed account {}", seed.email);
        }
    }

    let url = config.url();
    if config.open_browser {
        let url_clone = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            let _ = webbrowser::open(&url_clone);
        });
    }

    let state = AppState::new(db, config.session_hours);
    let max_body_bytes = config.max_body_bytes;

    info!("Server running at {}", url);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(state.clone()))
            .configure(|cfg| services::configure(cfg, max_body_bytes))
            .default_service(web::route().to(assets::serve_embedded))
    })
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}
