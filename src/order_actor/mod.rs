//! # Order Actor
//!
//! Orders, and the stock reconciliation that runs when one is placed or changed.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Order`]
//! - [`reconcile`] - [`StockPlan`](reconcile::StockPlan): line items to stock adjustments
//! - [`error`] - [`OrderError`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Dependencies
//!
//! The actor's context is `(CustomerClient, ProductClient)`. Its hooks await those
//! actors, so while one order is being placed the order actor handles nothing else:
//! order mutations are serialized among themselves.
//!
//! ```rust,ignore
//! let (order_actor, order_client) = order_actor::new(32);
//! tokio::spawn(order_actor.run((customer_client.clone(), product_client.clone())));
//! ```

pub mod entity;
pub mod error;
pub mod reconcile;

pub use error::*;

use crate::clients::OrderClient;
use crate::model::Order;
use actor_framework::ResourceActor;

/// Creates a new Order actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Order>, OrderClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, OrderClient::new(generic_client))
}
