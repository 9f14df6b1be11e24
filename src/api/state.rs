//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::{Database, UserStore};
use crate::services::{UserManager, UserService};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// User service
    pub user_service: Arc<dyn UserService>,
    /// Database connection (used by the status probe)
    pub database: Arc<Database>,
    /// Application configuration
    pub config: Config,
}

impl AppState {
    /// Create application state from a database connection and config.
    ///
    /// Wires the SeaORM-backed repository into the user service.
    pub fn from_database(database: Arc<Database>, config: Config) -> Self {
        let repo = Arc::new(UserStore::new(database.get_connection()));
        let user_service = Arc::new(UserManager::new(repo));

        Self {
            user_service,
            database,
            config,
        }
    }

    /// Create application state with a manually injected service.
    pub fn new(
        user_service: Arc<dyn UserService>,
        database: Arc<Database>,
        config: Config,
    ) -> Self {
        Self {
            user_service,
            database,
            config,
        }
    }
}
