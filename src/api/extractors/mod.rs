//! Custom extractors.

pub mod user_fields;

pub use user_fields::UserFields;
