//! # ActorEntity Trait
//!
//! The contract a resource type must satisfy to be managed by a [`ResourceActor`](crate::ResourceActor).
//! It names the identifier, the DTOs for creation and update, the custom actions, the
//! runtime context and the error type, and provides the lifecycle hooks the actor calls.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::check_conflict`]
//! - [`ActorEntity::on_create`]
//! - [`ActorEntity::on_delete`]
//!
//! All default to `Ok(())`.

use async_trait::async_trait;
use std::fmt::{Debug, Display};

/// Trait that any resource entity must implement to be managed by `ResourceActor`.
///
/// Hooks are async so they can call other actors through the clients held in
/// `Context`. `on_update` runs against a copy that only replaces the stored entity on
/// success; `handle_action` mutates the stored entity directly, so an action that fails
/// must leave `self` untouched.
#[async_trait]
pub trait ActorEntity: Clone + Debug + Send + Sync + 'static {
    /// Identifier. Generated by the actor from a sequential `u32`; its `Ord` is the
    /// iteration order of [`ResourceClient::find`](crate::ResourceClient::find).
    type Id: Ord + Clone + Send + Sync + Display + Debug + From<u32>;

    /// Payload required to create a new instance.
    type Create: Send + Sync + Debug;

    /// Payload required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Resource-specific operations (e.g. `AdjustStock`).
    type Action: Send + Sync + Debug;

    /// Result returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// Dependencies injected into the actor at `run()`. Use `()` if none.
    type Context: Send + Sync;

    /// One error enum per actor, shared by every hook.
    type Error: std::error::Error + Send + Sync + 'static;

    /// The entity's identifier.
    fn id(&self) -> &Self::Id;

    /// Builds the entity from its new id and the creation payload.
    /// Called synchronously before `on_create`; reject malformed payloads here.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Unique constraint check against another stored entity. Runs after
    /// `from_create_params` and after `on_update`, once per other entity in the store.
    fn check_conflict(&self, _other: &Self) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Lifecycle Hooks (Async) ---

    /// Called after `from_create_params`, before the entity is stored.
    /// An error here discards the entity.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received for a stored entity.
    async fn on_update(
        &mut self,
        update: Self::Update,
        ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed. An error keeps it stored.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Handle a custom resource-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
