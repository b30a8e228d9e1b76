//! User service - Facade over the user repository.
//!
//! Forwards every call unchanged; no validation or error translation.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::User;
use crate::infra::UserRepository;

#[cfg(test)]
use mockall::automock;

/// User service trait for dependency injection.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserService: Send + Sync {
    /// List every stored user
    async fn find_all(&self) -> Vec<User>;

    /// Look up a user by id
    async fn find_by_id(&self, id: i64) -> Option<User>;

    /// Insert or replace a user by id
    async fn save(&self, user: User) -> User;

    /// Remove a user; `true` means nothing matched (see `UserRepository::delete_by_id`)
    async fn delete_by_id(&self, id: i64) -> bool;
}

/// Concrete implementation of UserService backed by a repository.
pub struct UserManager<R: UserRepository> {
    repo: Arc<R>,
}

impl<R: UserRepository> UserManager<R> {
    /// Create new user service instance
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R: UserRepository> UserService for UserManager<R> {
    async fn find_all(&self) -> Vec<User> {
        self.repo.find_all().await
    }

    async fn find_by_id(&self, id: i64) -> Option<User> {
        self.repo.find_by_id(id).await
    }

    async fn save(&self, user: User) -> User {
        self.repo.save(user).await
    }

    async fn delete_by_id(&self, id: i64) -> bool {
        self.repo.delete_by_id(id).await
    }
}
