//! Migration CLI tool.
//!
//! Reads `DATABASE_URL` (optionally from `.env`). The CLI installs its own
//! tracing subscriber.

use sea_orm_migration::prelude::*;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    cli::run_cli(migration::Migrator).await;
}
