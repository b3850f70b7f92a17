//! User service - the façade HTTP handlers call into.
//!
//! Forwards each operation to the repository it was built with, so the
//! transport layer never names a concrete repository type.

use std::sync::Arc;

use crate::domain::User;
use crate::errors::AppResult;
use crate::infra::UserRepository;

/// Pass-through façade over one `UserRepository`.
#[derive(Clone)]
pub struct UserService {
    repo: Arc<dyn UserRepository>,
}

impl UserService {
    /// Create new user service over the given repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn find_by_id(&self, id: i32) -> AppResult<User> {
        self.repo.find_by_id(id).await
    }

    pub async fn save(&self, name: String, surname: String, email: String) -> AppResult<()> {
        self.repo.save(name, surname, email).await
    }

    pub async fn update(&self, id: i32, name: String, surname: String, email: String) -> AppResult<()> {
        self.repo.update(id, name, surname, email).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repo.delete(id).await
    }

    pub async fn get_all(&self) -> AppResult<Vec<User>> {
        self.repo.get_all().await
    }
}
