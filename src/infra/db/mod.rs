//! Database connection handle.

use std::sync::Arc;

use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};

use crate::errors::AppResult;

mod factory;

pub use factory::{ConnectionFactory, Driver};

/// The process-wide connection handle.
///
/// Wraps the driver's pool behind an `Arc`; clones and repositories share
/// the same pool.
#[derive(Clone)]
pub struct Database {
    connection: Arc<DatabaseConnection>,
}

impl Database {
    /// Wrap an already-open connection.
    pub fn from_connection(connection: DatabaseConnection) -> Self {
        Self {
            connection: Arc::new(connection),
        }
    }

    /// Get a reference to the database connection.
    pub fn connection(&self) -> &DatabaseConnection {
        &self.connection
    }

    /// Get a shared handle to the database connection.
    pub fn shared_connection(&self) -> Arc<DatabaseConnection> {
        Arc::clone(&self.connection)
    }

    /// Check database connectivity by executing a simple query.
    pub async fn ping(&self) -> AppResult<()> {
        self.connection
            .execute(Statement::from_string(
                self.connection.get_database_backend(),
                "SELECT 1".to_string(),
            ))
            .await?;
        Ok(())
    }

    /// Close the underlying pool.
    ///
    /// Only the last holder can close it; while other handles are alive
    /// the pool is released when the last of them drops.
    pub async fn close(self) -> AppResult<()> {
        match Arc::try_unwrap(self.connection) {
            Ok(connection) => {
                connection.close().await?;
                tracing::info!("Database connection closed");
            }
            Err(shared) => {
                tracing::warn!(
                    holders = Arc::strong_count(&shared),
                    "Database connection still shared, releasing this handle"
                );
            }
        }
        Ok(())
    }
}
