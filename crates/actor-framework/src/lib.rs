//! # Actor Framework
//!
//! Building blocks for resource-oriented actors on top of Tokio. Every resource type
//! (users, products, customers, orders, ...) is owned by exactly one [`ResourceActor`]
//! task that keeps the entities in memory and processes requests one at a time.
//!
//! ## Why ROA + Actor Model?
//!
//! - **Resource-Oriented Architecture**: every resource speaks the same verbs
//!   (Create, Get, Find, Update, Delete) plus resource-specific **Actions**.
//! - **Actor Model**: state is owned by a single task, so a read-check-write that happens
//!   inside one message handler cannot interleave with another request for the same store.
//!
//! When resources need to coordinate (an order adjusting product stock), the dependent
//! actor receives the other actors' clients as its runtime **Context** and talks to them
//! through messages, never through shared memory.
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - domain types and their lifecycle hooks
//! 2. **Runtime Layer** ([`ResourceActor`]) - the message loop and the entity store
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - typed request/response API
//!
//! ## Errors
//!
//! Hooks return the entity's own `Error` type. The actor boxes it into
//! [`FrameworkError::EntityError`] to send it back over the response channel, and
//! [`FrameworkError::downcast`] recovers the typed error on the client side, so callers
//! keep a single `Result` channel with the precise error kind.
//!
//! ## Context Injection
//!
//! Dependencies are passed to [`ResourceActor::run`] rather than to the constructor.
//! All actors can be created first and wired afterwards:
//!
//! ```rust,ignore
//! let (customer_actor, customer_client) = ResourceActor::<Customer>::new(32);
//! let (product_actor, product_client) = ResourceActor::<Product>::new(32);
//! let (order_actor, order_client) = ResourceActor::<Order>::new(32);
//!
//! tokio::spawn(customer_actor.run(()));
//! tokio::spawn(product_actor.run(()));
//! tokio::spawn(order_actor.run((customer_client.clone(), product_client.clone())));
//! ```
//!
//! ## Testing
//!
//! See [`mock`] for a [`MockClient`](mock::MockClient) with queued expectations, useful to
//! run a real actor against scripted dependencies.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{Filter, ResourceRequest, Response};
