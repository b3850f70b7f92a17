//! Application services layer.
//!
//! Services sit between HTTP handlers and repositories and depend on
//! the repository trait, never on a concrete store.

mod user_service;

pub use user_service::UserService;
