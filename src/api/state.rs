//! Application state - Dependency injection container.
//!
//! Built once at startup and handed to every handler through axum's
//! `State` extractor; nothing here is process-global.

use std::sync::Arc;

use crate::infra::{Database, UserRepository, UserStore};
use crate::services::UserService;

/// Application state shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    /// User façade
    pub user_service: Arc<UserService>,
    /// Connection handle, absent when the repository is not SQL-backed
    pub database: Option<Database>,
}

impl AppState {
    /// Create application state over a live database connection.
    ///
    /// The SeaORM repository and the health check share the same handle.
    pub fn from_database(database: Database) -> Self {
        let repo = Arc::new(UserStore::new(database.shared_connection()));

        Self {
            user_service: Arc::new(UserService::new(repo)),
            database: Some(database),
        }
    }

    /// Create application state with a manually injected repository.
    pub fn with_repository(repo: Arc<dyn UserRepository>) -> Self {
        Self {
            user_service: Arc::new(UserService::new(repo)),
            database: None,
        }
    }
}
