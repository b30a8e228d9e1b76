//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{external_handler, greeting_handler, hello_handler, user_handler};
use crate::domain::{
    Coordinates, Greeting, Hello, Location, Name, Picture, Quote, RandomUser, Street, User,
};

/// OpenAPI documentation for Web Service Basics
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Web Service Basics",
        version = "0.1.0",
        description = "In-memory user resource, greetings and third-party API pass-through",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    paths(
        // User endpoints
        user_handler::list_users,
        user_handler::get_user,
        user_handler::create_user,
        user_handler::delete_user,
        // Greeting endpoints
        greeting_handler::greeting,
        hello_handler::hello,
        hello_handler::bye,
        // Third-party pass-through
        external_handler::random_quote,
        external_handler::random_user,
    ),
    components(
        schemas(
            User,
            Greeting,
            Hello,
            Quote,
            RandomUser,
            Name,
            Location,
            Street,
            Coordinates,
            Picture,
        )
    ),
    tags(
        (name = "Users", description = "In-memory user store"),
        (name = "Greetings", description = "Greeting and hello resources"),
        (name = "External", description = "Random quote and random user APIs")
    )
)]
pub struct ApiDoc;
