//! Random user generator payload.
//!
//! Only the fields rendered by the user page, plus the location's
//! coordinates passed through by the JSON endpoint, are kept; the upstream
//! envelope also carries `login`, `dob`, `registered`, `id`, `nat` and an
//! `info` block, all of which are ignored.

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// Upstream response envelope
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RandomUserEnvelope {
    pub results: Vec<RandomUser>,
}

/// Randomly generated person
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct RandomUser {
    #[schema(example = "female")]
    pub gender: String,
    pub name: Name,
    pub location: Location,
    #[schema(example = "jennie.nichols@example.com")]
    pub email: String,
    #[schema(example = "(272) 790-0888")]
    pub phone: String,
    #[schema(example = "(489) 330-2385")]
    pub cell: String,
    pub picture: Picture,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct Name {
    #[schema(example = "Miss")]
    pub title: String,
    #[schema(example = "Jennie")]
    pub first: String,
    #[schema(example = "Nichols")]
    pub last: String,
}

impl Name {
    /// `"<first> <last>"`
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first, self.last)
    }

    /// `"<title> <first> <last>"`
    pub fn full_title(&self) -> String {
        format!("{} {}", self.title, self.full_name())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct Location {
    pub street: Street,
    #[schema(example = "Billings")]
    pub city: String,
    #[schema(example = "Michigan")]
    pub state: String,
    #[schema(example = "United States")]
    pub country: String,
    /// Sent as a string or a number depending on nationality
    #[serde(deserialize_with = "string_or_number")]
    #[schema(example = "63104")]
    pub postcode: String,
    pub coordinates: Coordinates,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct Street {
    #[schema(example = 8929)]
    pub number: u32,
    #[schema(example = "Valwood Pkwy")]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct Coordinates {
    #[schema(example = "-69.8246")]
    pub latitude: String,
    #[schema(example = "134.8719")]
    pub longitude: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct Picture {
    pub large: String,
    pub medium: String,
    pub thumbnail: String,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        serde_json::Value::Null => Ok(String::new()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number, got {}",
            other
        ))),
    }
}
