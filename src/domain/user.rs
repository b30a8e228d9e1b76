//! User domain record.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// User record held by the in-memory store.
///
/// The id is supplied by the caller; nothing is generated server side.
/// The password is kept as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Caller-assigned identifier
    #[schema(example = 4)]
    pub id: i64,
    /// Email address
    #[schema(example = "user4@exemple.com")]
    pub email: String,
    /// Display name
    #[schema(example = "User Four")]
    pub name: String,
    /// Password, stored in plaintext
    #[schema(example = "password4")]
    pub password: String,
}

impl User {
    pub fn new(
        id: i64,
        email: impl Into<String>,
        name: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            id,
            email: email.into(),
            name: name.into(),
            password: password.into(),
        }
    }

    /// Users loaded into the store at process start.
    pub fn seed() -> Vec<User> {
        vec![
            User::new(1, "user1@exemple.com", "User One", "password1"),
            User::new(2, "user2@exemple.com", "User Two", "password2"),
            User::new(3, "user3@exemple.com", "User Three", "password3"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_json_field_names() {
        let user = User::new(7, "a@b.c", "Seven", "pw");
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 7, "email": "a@b.c", "name": "Seven", "password": "pw"})
        );
    }

    #[test]
    fn test_seed_has_unique_ids() {
        let seed = User::seed();
        let ids: HashSet<i64> = seed.iter().map(|u| u.id).collect();
        assert_eq!(ids.len(), seed.len());
        assert_eq!(ids, HashSet::from([1, 2, 3]));
    }
}
