//! Type-safe wrappers around [`ResourceClient`](actor_framework::ResourceClient).
//!
//! Each client implements [`ActorClient`](actor_framework::ActorClient) for the shared
//! `get`/`list`/`find`/`delete` verbs and adds the operations specific to its resource.
//! Framework errors are mapped back to the resource's own error enum, so an
//! `InsufficientStock` raised inside the product actor arrives as
//! `ProductError::InsufficientStock` at the caller.

/// Maps a [`FrameworkError`](actor_framework::FrameworkError) into a resource error enum.
///
/// `NotFound` and typed entity errors keep their kind; anything else is a communication
/// failure.
macro_rules! map_framework_error {
    ($error:ident, $e:expr) => {
        match $e {
            actor_framework::FrameworkError::NotFound(id) => $error::NotFound(id),
            other => other
                .downcast::<$error>()
                .unwrap_or_else(|e| $error::ActorCommunicationError(e.to_string())),
        }
    };
}

pub(crate) use map_framework_error;

pub mod customer_client;
pub mod order_client;
pub mod product_client;
pub mod user_client;

pub use customer_client::*;
pub use order_client::*;
pub use product_client::*;
pub use user_client::*;
