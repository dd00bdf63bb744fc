//! # User Actor
//!
//! Registered sellers. No dependencies (`Context = ()`) and no custom actions.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`User`]
//! - [`error`] - [`UserError`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust,ignore
//! let (actor, client) = user_actor::new(32);
//! tokio::spawn(actor.run(()));
//!
//! let user = client.register("Ana", "Ruiz", "ana@example.com", "secret").await?;
//! let same = client.authenticate("ana@example.com", "secret").await?;
//! ```
//!
//! Emails are unique: the actor rejects a second registration with
//! [`UserError::AlreadyExists`] inside the same message that would store it, so two
//! concurrent registrations cannot both succeed.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::UserClient;
use crate::model::User;
use actor_framework::ResourceActor;

/// Creates a new User actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<User>, UserClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, UserClient::new(generic_client))
}
