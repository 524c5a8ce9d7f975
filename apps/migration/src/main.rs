//! Migration CLI tool.
//!
//! Reads `DATABASE_URL` (from the environment or `.env`) and runs the
//! standard SeaORM migration commands (`up`, `down`, `status`, `fresh`).

use sea_orm_migration::prelude::*;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // The CLI installs its own tracing subscriber.
    cli::run_cli(migration::Migrator).await;
}
