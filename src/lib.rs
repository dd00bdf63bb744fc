//! # Sales Orders
//!
//! > **A GraphQL service for sellers, their clients, a product catalog and orders.**
//!
//! Every resource lives in its own resource actor built on the
//! [`actor_framework`] crate: one Tokio task per entity type, owning its state and
//! serving requests sequentially. The GraphQL layer talks to the actors only through
//! typed clients.
//!
//! ## 🏗️ Architecture Notes
//!
//! ### 1. Inventory-consistent orders
//! Placing or updating an order adjusts product stock from inside the order actor's
//! hooks. Each product adjustment is a single compare-and-set message to the product
//! actor, and a failed order reverts the adjustments it already made. See
//! [`order_actor`].
//!
//! ### 2. One error channel
//! Every fallible operation returns a `Result` with the resource's own error enum.
//! Errors raised inside an actor hook come back through the framework and are
//! downcast to that enum by the client. At the GraphQL boundary each enum becomes a
//! message plus an `extensions.code` ([`graphql::errors`]).
//!
//! ### 3. Sellers
//! Requests carry an optional JWT. Clients and orders are scoped to the seller it
//! names; see [`auth`].
//!
//! ## 🗺️ Module Tour
//!
//! - **Domain** ([`model`]): plain data types and typed identifiers.
//! - **Actors** ([`user_actor`], [`product_actor`], [`customer_actor`], [`order_actor`]):
//!   `ActorEntity` implementations and error enums.
//! - **Interface** ([`clients`]): typed wrappers around `ResourceClient`.
//! - **Orchestrator** ([`lifecycle`]): starts and wires the actors, shuts them down.
//! - **Boundary** ([`graphql`], [`server`], [`auth`], [`config`]), plus [`reports`]
//!   for the sales rankings.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! SECRET=change-me RUST_LOG=info cargo run
//! # playground at http://127.0.0.1:4000/graphql
//! ```

pub mod auth;
pub mod clients;
pub mod config;
pub mod customer_actor;
pub mod graphql;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod product_actor;
pub mod reports;
pub mod server;
pub mod user_actor;
