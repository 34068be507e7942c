//! Finance Service Library
//!
//! Accounts and their financial entries (income and expenses), served
//! over HTTP and persisted with SeaORM.

pub mod api;
pub mod config;
pub mod infra;
pub mod repository;
pub mod service;

use std::sync::Arc;

use tracing::info;

use common::{AppError, AppResult};

use crate::api::{create_router, AppState};
use crate::config::FinanceServiceConfig;
use crate::infra::Database;

/// Run migrations (for CLI commands).
pub async fn run_migrations(
    config: &FinanceServiceConfig,
    action: MigrateAction,
) -> AppResult<()> {
    let db = Database::connect_without_migrations(&config.database).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await?;
            for (name, applied) in status {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}

/// Migration action type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}

/// Connect, migrate and serve the HTTP API until the process is stopped.
pub async fn run_server(config: FinanceServiceConfig) -> AppResult<()> {
    info!("Starting {}...", config.service.service_name);

    let db = Arc::new(Database::connect(&config.database).await?);
    let app = create_router(AppState::from_database(db));

    let addr = config.service.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind to {}: {}", addr, e)))?;

    info!("Finance service listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    Ok(())
}
