//! In-memory `UserRepository`, used where a live database is not wanted
//! (unit and router tests).

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::UserRepository;
use crate::domain::User;
use crate::errors::{AppResult, OptionExt};

#[derive(Debug)]
struct Table {
    rows: BTreeMap<i32, User>,
    next_id: i32,
}

/// Map-backed user table with auto-increment ids.
///
/// Ids start at 1 and are never reused, even after a delete.
#[derive(Debug)]
pub struct InMemoryUserStore {
    table: RwLock<Table>,
}

impl Default for InMemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table {
                rows: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Number of stored users
    pub async fn len(&self) -> usize {
        self.table.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl UserRepository for InMemoryUserStore {
    async fn find_by_id(&self, id: i32) -> AppResult<User> {
        self.table.read().await.rows.get(&id).cloned().ok_or_not_found()
    }

    async fn save(&self, name: String, surname: String, email: String) -> AppResult<()> {
        let mut table = self.table.write().await;
        let id = table.next_id;
        table.next_id += 1;
        table.rows.insert(id, User::new(id, name, surname, email));
        Ok(())
    }

    async fn update(&self, id: i32, name: String, surname: String, email: String) -> AppResult<()> {
        if let Some(user) = self.table.write().await.rows.get_mut(&id) {
            user.name = name;
            user.surname = surname;
            user.email = email;
        }
        Ok(())
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        self.table.write().await.rows.remove(&id);
        Ok(())
    }

    async fn get_all(&self) -> AppResult<Vec<User>> {
        Ok(self.table.read().await.rows.values().cloned().collect())
    }
}
