//! Onboarding Service Library
//!
//! Submission intake, HR checklist workflow, persistence and reference data
//! seeding. The gateway embeds this crate through `connect_service`.

pub mod config;
pub mod infra;
pub mod repository;
pub mod seed;
pub mod service;

use std::sync::Arc;

use tracing::info;

use crate::config::OnboardingServiceConfig;
use crate::infra::Database;
use crate::repository::{FixtureStore, SubmissionStore};
use crate::seed::{SeedReport, Seeder};
use crate::service::{OnboardingManager, OnboardingService};

/// Connect to the database and build the onboarding service.
pub async fn connect_service(
    config: &OnboardingServiceConfig,
) -> Result<Arc<dyn OnboardingService>, Box<dyn std::error::Error>> {
    let db = if config.auto_migrate {
        Database::connect_and_migrate(&config.database).await?
    } else {
        Database::connect(&config.database).await?
    };

    let repo = Arc::new(SubmissionStore::new(db.get_connection()));
    Ok(Arc::new(OnboardingManager::new(repo)))
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(action: MigrateAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = OnboardingServiceConfig::from_env();
    let db = Database::connect(&config.database).await?;

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
#[derive(Debug, Clone, Copy)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}

/// Load reference fixtures, skipping rows that already exist.
pub async fn run_seed() -> Result<SeedReport, Box<dyn std::error::Error>> {
    let config = OnboardingServiceConfig::from_env();
    let db = if config.auto_migrate {
        Database::connect_and_migrate(&config.database).await?
    } else {
        Database::connect(&config.database).await?
    };

    let seeder = Seeder::new(Arc::new(FixtureStore::new(db.get_connection())));
    Ok(seeder.run().await?)
}
