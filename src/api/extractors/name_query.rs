//! `?name=` query extractor tolerating repeated keys.

use axum::{
    async_trait,
    extract::{rejection::QueryRejection, FromRequestParts, Query},
    http::request::Parts,
};
use utoipa::IntoParams;

use crate::config::DEFAULT_GREETING_NAME;

/// `?name=` query parameter, `World` when absent or empty.
///
/// Repeated keys are joined with commas, so `?name=a&name=b` reads as `a,b`.
#[derive(Debug, Default, PartialEq, Eq, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct NameQuery {
    /// Name to greet
    pub name: Option<String>,
}

impl NameQuery {
    fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let values: Vec<String> = pairs
            .into_iter()
            .filter(|(key, _)| key == "name")
            .map(|(_, value)| value)
            .collect();

        Self {
            name: (!values.is_empty()).then(|| values.join(",")),
        }
    }

    pub fn name_or_default(self) -> String {
        self.name
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| DEFAULT_GREETING_NAME.to_string())
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for NameQuery
where
    S: Send + Sync,
{
    type Rejection = QueryRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::from_request_parts(parts, state).await?;
        Ok(Self::from_pairs(pairs))
    }
}
