use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock};

use crate::models::now_rfc3339;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Users keyed by id, seeded at startup
///
/// Created users are stored and show up in later reads.
#[derive(Debug)]
pub struct UserDirectory {
    users: RwLock<BTreeMap<i64, User>>,
}

impl UserDirectory {
    pub fn new(users: impl IntoIterator<Item = User>) -> Self {
        let users = users.into_iter().map(|user| (user.id, user)).collect();
        Self {
            users: RwLock::new(users),
        }
    }

    /// Directory holding the three demo users
    pub fn seeded() -> Self {
        let seed = [
            (1, "Zhang San", "zhangsan@example.com"),
            (2, "Li Si", "lisi@example.com"),
            (3, "Wang Wu", "wangwu@example.com"),
        ];
        Self::new(seed.into_iter().map(|(id, name, email)| User {
            id,
            name: name.to_string(),
            email: email.to_string(),
            created_at: None,
        }))
    }

    /// All users ordered by id
    pub fn list(&self) -> Vec<User> {
        let users = self.users.read().unwrap_or_else(PoisonError::into_inner);
        users.values().cloned().collect()
    }

    pub fn get(&self, id: i64) -> Option<User> {
        let users = self.users.read().unwrap_or_else(PoisonError::into_inner);
        users.get(&id).cloned()
    }

    /// Store a new user under the next free id
    pub fn create(&self, name: impl Into<String>, email: impl Into<String>) -> User {
        let mut users = self.users.write().unwrap_or_else(PoisonError::into_inner);
        let id = users.keys().next_back().map_or(1, |last| last + 1);

        let user = User {
            id,
            name: name.into(),
            email: email.into(),
            created_at: Some(now_rfc3339()),
        };
        users.insert(id, user.clone());

        tracing::info!(id, email = %user.email, "User created");
        user
    }
}
