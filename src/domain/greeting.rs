use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Numbered greeting returned by `GET /greeting`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Greeting {
    /// Sequence number, starting at 1
    #[schema(example = 1)]
    pub id: u64,
    #[schema(example = "Hello, World!")]
    pub content: String,
}

/// Echo of the `name` parameter returned by `GET /hello`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Hello {
    #[schema(example = "World")]
    pub name: String,
}
