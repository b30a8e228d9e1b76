//! Application services layer - Use cases.
//!
//! Services depend on traits so handlers can be tested against
//! stand-ins. The user service is a pure pass-through to its repository.

pub mod container;
mod greeting_service;
mod quote_service;
mod random_user_service;
mod user_service;

// Service Container
pub use container::Services;

// Service traits and implementations
pub use greeting_service::{GreetingService, MessageBoard};
pub use quote_service::{QuoteProvider, QuoteService};
pub use random_user_service::{RandomUserProvider, RandomUserService};
pub use user_service::{UserManager, UserService};

#[cfg(test)]
pub use quote_service::MockQuoteService;
#[cfg(test)]
pub use random_user_service::MockRandomUserService;
#[cfg(test)]
pub use user_service::MockUserService;
