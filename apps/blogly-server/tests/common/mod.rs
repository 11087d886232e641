//! Shared fixtures for the route tests.

#![allow(dead_code)]

use actix_web::body::to_bytes;
use actix_web::dev::ServiceResponse;
use actix_web::http::header;

use blogly_core::domain::{NewUser, User};
use blogly_core::ports::BaseRepository;
use blogly_infra::{DatabaseConfig, DatabaseConnections};
use blogly_server::state::AppState;
use migration::{Migrator, MigratorTrait};

/// Application state over a fresh, migrated in-memory database.
pub async fn test_state() -> AppState {
    let db = DatabaseConnections::init(&DatabaseConfig::in_memory())
        .await
        .expect("in-memory database");
    Migrator::up(&db.main, None).await.expect("migrations");

    AppState::from_connections(db).expect("templates")
}

/// Build the full route table over `state` and initialise it as a test service.
macro_rules! test_app {
    ($state:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($state.clone()))
                .configure(blogly_server::handlers::configure_routes),
        )
        .await
    };
}

pub(crate) use test_app;

pub async fn seed_user(state: &AppState, first: &str, last: &str) -> User {
    state
        .users
        .insert(NewUser::new(first.to_string(), last.to_string(), None))
        .await
        .expect("seed user")
}

pub fn location(resp: &ServiceResponse) -> &str {
    resp.headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

pub async fn body_text(resp: ServiceResponse) -> String {
    let bytes = to_bytes(resp.into_body()).await.expect("body");
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}
