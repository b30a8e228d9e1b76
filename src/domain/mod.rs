//! Domain layer - Records exchanged by the service
//!
//! Plain value types with no behavior beyond formatting helpers.
//! Upstream payloads (`Quote`, `RandomUser`) tolerate unknown and
//! missing fields.

pub mod greeting;
pub mod quote;
pub mod random_user;
pub mod user;

pub use greeting::{Greeting, Hello};
pub use quote::Quote;
pub use random_user::{Coordinates, Location, Name, Picture, RandomUser, RandomUserEnvelope, Street};
pub use user::User;
