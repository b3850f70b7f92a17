//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 3000;

// =============================================================================
// Database
// =============================================================================

/// Driver used when `DB_DRIVER` is unset
pub const DEFAULT_DB_DRIVER: &str = "mysql";

/// Database host used when `DB_HOST` is unset
pub const DEFAULT_DB_HOST: &str = "localhost";

/// PostgreSQL `sslmode` used when `DB_SSLMODE` is unset
pub const DEFAULT_PG_SSLMODE: &str = "prefer";

/// Driver selector values
pub const DRIVER_MYSQL: &str = "mysql";
pub const DRIVER_POSTGRESQL: &str = "postgresql";
pub const DRIVER_POSTGRES_ALIAS: &str = "postgres";

// =============================================================================
// Response Messages
// =============================================================================

pub const MSG_USER_NOT_FOUND: &str = "User not found.";
pub const MSG_RECORD_CREATED: &str = "Record created successfully.";
pub const MSG_RECORD_UPDATED: &str = "Record updated successfully.";
pub const MSG_RECORD_DELETED: &str = "Record deleted successfully.";
pub const MSG_INTERNAL_ERROR: &str = "An internal error occurred.";
pub const MSG_SERVICE_UNAVAILABLE: &str = "Database unavailable.";
