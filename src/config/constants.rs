//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

// =============================================================================
// Routes
// =============================================================================

/// Base path of the versioned JSON API
pub const API_V0_PREFIX: &str = "/api/v0";

/// Users resource, relative to the API prefix
pub const USERS_RESOURCE: &str = "/users";

/// Default value of the `name` query parameter on greeting endpoints
pub const DEFAULT_GREETING_NAME: &str = "World";

// =============================================================================
// Third-party APIs
// =============================================================================

/// Random quote endpoint
pub const DEFAULT_QUOTE_API_URL: &str = "https://api.chucknorris.io/jokes/random";

/// Random user generator endpoint
pub const DEFAULT_RANDOM_USER_API_URL: &str = "https://randomuser.me/api/";

// =============================================================================
// Views
// =============================================================================

/// Heading shown above the greeting message board
pub const DEFAULT_WELCOME_TEXT: &str = "Welcome to the greeting board";
