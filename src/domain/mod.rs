//! Domain layer - Core entities
//!
//! Plain data types that the rest of the crate passes around.
//! No database or HTTP dependencies beyond serde and schema derives.

pub mod credential;
pub mod user;

pub use credential::Credential;
pub use user::User;
