//! Seed command - Loads users into the store from a JSON file.
//!
//! The file holds a JSON array of creation payloads; each entry is
//! validated before insert. With `--reset` the store is emptied first,
//! which also resets the id sequence semantics to a known state.

use std::sync::Arc;

use validator::Validate;

use crate::cli::args::SeedArgs;
use crate::config::Config;
use crate::domain::CreateUser;
use crate::errors::{AppError, AppResult};
use crate::infra::{Database, UserRepository, UserStore};

/// Execute the seed command
pub async fn execute(args: SeedArgs, config: Config) -> AppResult<()> {
    let db = Arc::new(Database::connect(&config).await);
    let repo = UserStore::new(db.get_connection());

    let raw = std::fs::read_to_string(&args.file)
        .map_err(|e| AppError::internal(format!("Failed to read {}: {}", args.file, e)))?;

    let payloads: Vec<CreateUser> = serde_json::from_str(&raw)
        .map_err(|e| AppError::validation(format!("Invalid seed file: {}", e)))?;

    // Validate everything up front so a bad entry aborts before any write.
    for payload in &payloads {
        payload
            .validate()
            .map_err(|e| AppError::validation(format!("Invalid seed entry: {}", e)))?;
    }

    if args.reset {
        let removed = repo.delete_all().await?;
        tracing::info!("Removed {} existing users", removed);
    }

    let mut created = 0;
    for payload in payloads {
        let user = repo.create(payload).await?;
        tracing::debug!("Seeded user {}", user.id);
        created += 1;
    }

    tracing::info!("Seeded {} users from {}", created, args.file);
    Ok(())
}
