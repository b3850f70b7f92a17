//! Repository layer - Data access abstraction
//!
//! `UserRepository` is the persistence contract; `UserStore` runs it
//! against SQL through SeaORM and `InMemoryUserStore` keeps rows in a map.

pub(crate) mod entities;
mod memory;
mod user_repository;

pub use memory::InMemoryUserStore;
pub use user_repository::{UserRepository, UserStore};

// Export mock for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
