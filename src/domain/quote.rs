//! Random quote payload.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Quote as served by the random quote API.
///
/// Upstream also sends `categories`, `created_at` and `updated_at`; those
/// are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct Quote {
    #[schema(example = "5uHPfGrnSiqjgYUwz-DAog")]
    pub id: String,
    #[schema(example = "https://api.chucknorris.io/jokes/5uHPfGrnSiqjgYUwz-DAog")]
    pub url: String,
    /// Quote text
    pub value: String,
    #[schema(example = "https://api.chucknorris.io/img/avatar/chuck-norris.png")]
    pub icon_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ignores_unknown_fields() {
        let quote: Quote = serde_json::from_str(
            r#"{
                "categories": [],
                "created_at": "2020-01-05 13:42:25.099703",
                "icon_url": "https://example.com/icon.png",
                "id": "abc",
                "updated_at": "2020-01-05 13:42:25.099703",
                "url": "https://example.com/jokes/abc",
                "value": "A quote."
            }"#,
        )
        .unwrap();

        assert_eq!(quote.id, "abc");
        assert_eq!(quote.value, "A quote.");
        assert_eq!(quote.icon_url, "https://example.com/icon.png");
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let quote: Quote = serde_json::from_str(r#"{"value": "only text"}"#).unwrap();
        assert_eq!(quote.value, "only text");
        assert!(quote.id.is_empty());
        assert!(quote.icon_url.is_empty());
    }
}
