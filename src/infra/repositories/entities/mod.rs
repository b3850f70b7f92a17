//! SeaORM entity definitions
//!
//! Database rows, kept apart from the domain `User`.

pub mod user;

pub use user::{ActiveModel as UserActiveModel, Column as UserColumn, Entity as UserEntity, Model as UserModel};
