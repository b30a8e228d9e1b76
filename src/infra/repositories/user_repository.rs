//! In-memory user repository.

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::domain::User;

#[cfg(test)]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// All users in storage order
    async fn find_all(&self) -> Vec<User>;

    /// First user whose id matches
    async fn find_by_id(&self, id: i64) -> Option<User>;

    /// Insert or replace by id; the stored entry moves to the end
    async fn save(&self, user: User) -> User;

    /// Remove every user with `id`.
    ///
    /// Returns `true` when the store size did NOT change, i.e. when no
    /// user matched.
    async fn delete_by_id(&self, id: i64) -> bool;
}

/// Ordered in-memory collection of users.
///
/// At most one entry per id exists after any `save`.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository holding the given users, in order
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: RwLock::new(users),
        }
    }

    /// Create a repository holding the three example users
    pub fn seeded() -> Self {
        Self::with_users(User::seed())
    }

    /// Number of stored users
    pub fn len(&self) -> usize {
        self.users.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.read().is_empty()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_all(&self) -> Vec<User> {
        self.users.read().clone()
    }

    async fn find_by_id(&self, id: i64) -> Option<User> {
        self.users.read().iter().find(|u| u.id == id).cloned()
    }

    async fn save(&self, user: User) -> User {
        let mut users = self.users.write();
        let before = users.len();
        users.retain(|u| u.id != user.id);
        let replaced = before != users.len();
        users.push(user.clone());

        tracing::debug!(user_id = user.id, replaced, "User saved");
        user
    }

    async fn delete_by_id(&self, id: i64) -> bool {
        let mut users = self.users.write();
        let before = users.len();
        users.retain(|u| u.id != id);
        let unchanged = before == users.len();

        tracing::debug!(user_id = id, removed = before - users.len(), "Delete by id");
        unchanged
    }
}
