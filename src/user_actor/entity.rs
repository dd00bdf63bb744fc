//! Entity trait implementation for the User domain type.
//!
//! See the trait implementation on [`User`] for method documentation.

use crate::model::{required, User, UserCreate, UserId};
use crate::user_actor::UserError;
use actor_framework::ActorEntity;
use async_trait::async_trait;
use chrono::Utc;

#[async_trait]
impl ActorEntity for User {
    type Id = UserId;
    type Create = UserCreate;
    type Update = ();
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = UserError;

    fn id(&self) -> &UserId {
        &self.id
    }

    /// Creates a new User. Name, surname and email are trimmed and required.
    fn from_create_params(id: UserId, params: UserCreate) -> Result<Self, UserError> {
        Ok(Self {
            id,
            name: required("name", &params.name).map_err(UserError::ValidationError)?,
            surname: required("surname", &params.surname).map_err(UserError::ValidationError)?,
            email: required("email", &params.email).map_err(UserError::ValidationError)?,
            password_hash: params.password_hash,
            created: Utc::now(),
        })
    }

    fn check_conflict(&self, other: &Self) -> Result<(), UserError> {
        if self.email.eq_ignore_ascii_case(&other.email) {
            return Err(UserError::AlreadyExists(self.email.clone()));
        }
        Ok(())
    }

    /// Profiles are immutable once registered.
    async fn on_update(&mut self, _update: (), _ctx: &()) -> Result<(), UserError> {
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), UserError> {
        Ok(())
    }
}
