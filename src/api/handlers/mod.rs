//! HTTP request handlers.

pub mod external_handler;
pub mod greeting_handler;
pub mod hello_handler;
pub mod page_handler;
pub mod user_handler;

pub use external_handler::external_routes;
pub use greeting_handler::greeting_routes;
pub use hello_handler::hello_routes;
pub use page_handler::page_routes;
pub use user_handler::user_routes;
