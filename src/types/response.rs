use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::User;

/// Message-only response
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Record created successfully.")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Body of `GET /users`.
///
/// `result` is `null` rather than `[]` when there are no users, which is
/// what existing clients of this endpoint expect.
#[derive(Debug, Serialize, ToSchema)]
pub struct UserList {
    pub result: Option<Vec<User>>,
    pub count: usize,
}

impl From<Vec<User>> for UserList {
    fn from(users: Vec<User>) -> Self {
        let count = users.len();
        Self {
            result: (!users.is_empty()).then_some(users),
            count,
        }
    }
}
