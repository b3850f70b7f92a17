//! Infrastructure layer - External systems integration
//!
//! This module handles all database concerns:
//! - Dialect selection and the single connection handle
//! - Repositories over that handle

pub mod db;
pub mod repositories;

pub use db::{ConnectionFactory, Database, Driver};
pub use repositories::{InMemoryUserStore, UserRepository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::MockUserRepository;
