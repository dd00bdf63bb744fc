use crate::model::{CustomerId, UserId};
use chrono::{DateTime, Utc};

/// A seller's client. Exposed as `Client` in the GraphQL schema.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](actor_framework::ActorEntity) trait.
/// Email addresses are unique across clients; the owning seller never changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub company: String,
    pub phone: Option<String>,
    pub created: DateTime<Utc>,
    pub seller: UserId,
}

/// Payload for creating a client. `seller` is the acting seller, never user input.
#[derive(Debug, Clone)]
pub struct CustomerCreate {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub company: String,
    pub phone: Option<String>,
    pub seller: UserId,
}

/// Replacement of a client's details, performed on behalf of `actor`.
#[derive(Debug, Clone)]
pub struct CustomerUpdate {
    pub actor: UserId,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub company: String,
    pub phone: Option<String>,
}
