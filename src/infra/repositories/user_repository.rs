//! User repository: the persistence contract and its SeaORM implementation.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{
    sea_query::Expr, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter, Set,
};

use super::entities::{UserActiveModel, UserColumn, UserEntity};
use crate::domain::User;
use crate::errors::{AppResult, OptionExt};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Every method is a single statement against the shared connection.
/// `update` and `delete` succeed silently when no row has the given id.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID, `AppError::NotFound` when absent
    async fn find_by_id(&self, id: i32) -> AppResult<User>;

    /// Insert a new user; the database assigns the id
    async fn save(&self, name: String, surname: String, email: String) -> AppResult<()>;

    /// Replace all text fields of a user
    async fn update(&self, id: i32, name: String, surname: String, email: String) -> AppResult<()>;

    /// Delete user by ID
    async fn delete(&self, id: i32) -> AppResult<()>;

    /// List all users in database order
    async fn get_all(&self) -> AppResult<Vec<User>>;
}

/// SeaORM-backed implementation of `UserRepository`.
///
/// Works against any backend the connection was opened for; statements
/// are built by SeaORM with bound parameters.
pub struct UserStore {
    db: Arc<DatabaseConnection>,
}

impl UserStore {
    /// Create new repository instance over the shared connection
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_id(&self, id: i32) -> AppResult<User> {
        UserEntity::find_by_id(id)
            .one(&*self.db)
            .await?
            .map(User::from)
            .ok_or_not_found()
    }

    async fn save(&self, name: String, surname: String, email: String) -> AppResult<()> {
        let active_model = UserActiveModel {
            id: NotSet,
            name: Set(name),
            surname: Set(surname),
            email: Set(email),
        };

        UserEntity::insert(active_model)
            .exec_without_returning(&*self.db)
            .await?;
        Ok(())
    }

    async fn update(&self, id: i32, name: String, surname: String, email: String) -> AppResult<()> {
        let result = UserEntity::update_many()
            .col_expr(UserColumn::Name, Expr::value(name))
            .col_expr(UserColumn::Surname, Expr::value(surname))
            .col_expr(UserColumn::Email, Expr::value(email))
            .filter(UserColumn::Id.eq(id))
            .exec(&*self.db)
            .await?;

        if result.rows_affected == 0 {
            tracing::debug!(id, "Update matched no user");
        }
        Ok(())
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let result = UserEntity::delete_by_id(id).exec(&*self.db).await?;

        if result.rows_affected == 0 {
            tracing::debug!(id, "Delete matched no user");
        }
        Ok(())
    }

    async fn get_all(&self) -> AppResult<Vec<User>> {
        let models = UserEntity::find().all(&*self.db).await?;

        Ok(models.into_iter().map(User::from).collect())
    }
}
