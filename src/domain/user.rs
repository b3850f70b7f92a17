//! User domain entity.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A person record.
///
/// `id` is assigned by the database on insert and never changes afterwards;
/// the text fields are only ever replaced together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "John")]
    pub name: String,
    #[schema(example = "Doe")]
    pub surname: String,
    #[schema(example = "john@doe.com")]
    pub email: String,
}

impl User {
    pub fn new(
        id: i32,
        name: impl Into<String>,
        surname: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            surname: surname.into(),
            email: email.into(),
        }
    }
}
