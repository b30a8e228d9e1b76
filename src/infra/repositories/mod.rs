//! Repository layer - Data access abstraction
//!
//! Repositories hide how records are kept. The only backend is an
//! in-process collection; nothing survives a restart.

mod user_repository;

pub use user_repository::{InMemoryUserRepository, UserRepository};

#[cfg(test)]
pub use user_repository::MockUserRepository;
