//! Custom request extractors.

mod json_body;
mod name_query;

pub use json_body::JsonBody;
pub use name_query::NameQuery;
