mod auth;
mod config;
mod database;
mod db;
mod error;
mod middleware;
mod models;
mod routes;
mod service;
mod session;
mod templates;

#[cfg(test)]
pub mod test_utils;

pub use config::Config;

use crate::db::stage_db;
use crate::middleware::RequestLogger;
use crate::routes as app_routes;
use rocket::fs::FileServer;
use rocket::{Build, Rocket, catchers};
use tracing_subscriber::EnvFilter;

fn init_tracing(log_level: &str, json_format: bool) {
    // RUST_LOG takes precedence over the configured level, e.g.
    //   RUST_LOG=equipment_tracker::routes=debug
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::fmt().with_env_filter(filter).with_target(true).with_line_number(true);

    // A subscriber may already be installed when several instances are built
    // in one process (tests); keeping the first one is fine.
    let _ = if json_format { subscriber.json().try_init() } else { subscriber.try_init() };
}

fn ensure_rocket_secret_key() {
    let profile = std::env::var("ROCKET_PROFILE").unwrap_or_else(|_| "debug".to_string());

    // Session cookies are encrypted with this key; a generated one would log
    // everybody out on every restart.
    if profile != "debug" && std::env::var("ROCKET_SECRET_KEY").is_err() {
        panic!(
            "ROCKET_SECRET_KEY is required for profile '{}'. Generate one with: openssl rand -base64 32",
            profile
        );
    }
}

pub fn build_rocket(config: Config) -> Rocket<Build> {
    init_tracing(&config.logging.level, config.logging.json_format);
    ensure_rocket_secret_key();

    let figment = rocket::Config::figment()
        .merge(("address", config.server.address.clone()))
        .merge(("port", config.server.port))
        .merge(("template_dir", config.templates.dir.clone()));

    rocket::custom(figment)
        .attach(RequestLogger)
        .attach(stage_db(config.database.clone()))
        .attach(templates::fairing())
        .mount("/", app_routes::routes())
        .mount("/templates", FileServer::from(config.templates.dir.as_str()))
        .register(
            "/",
            catchers![app_routes::error::unauthorized, app_routes::error::not_found, app_routes::error::internal_error],
        )
        .manage(config)
}
