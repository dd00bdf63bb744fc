use crate::model::UserId;
use chrono::{DateTime, Utc};

/// A registered seller.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](actor_framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](actor_framework::ResourceActor).
/// Email addresses are unique across users (compared case-insensitively).
#[derive(Clone, PartialEq)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub password_hash: String,
    pub created: DateTime<Utc>,
}

// The hash stays out of logs.
impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("surname", &self.surname)
            .field("email", &self.email)
            .field("created", &self.created)
            .finish_non_exhaustive()
    }
}

/// Payload for registering a user. The password is already hashed.
#[derive(Clone)]
pub struct UserCreate {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub password_hash: String,
}

impl std::fmt::Debug for UserCreate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserCreate")
            .field("name", &self.name)
            .field("surname", &self.surname)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}
