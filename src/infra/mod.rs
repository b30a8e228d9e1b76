//! Infrastructure layer - Storage and external systems
//!
//! - In-memory user repository
//! - HTTP clients for the third-party quote and random-user APIs

pub mod clients;
pub mod repositories;

pub use clients::{ClientError, QuoteClient, RandomUserClient};
pub use repositories::{InMemoryUserRepository, UserRepository};

#[cfg(test)]
pub use repositories::MockUserRepository;
