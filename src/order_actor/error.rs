//! Error types for the Order actor.

use crate::customer_actor::CustomerError;
use crate::product_actor::ProductError;
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The order, its client, or one of its products was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The acting seller does not own the client or the order.
    #[error("Unauthorized")]
    Unauthorized,

    /// A line asks for more units than the named product has in stock.
    #[error("Insufficient stock for '{0}'")]
    InsufficientStock(String),

    /// The order data provided is invalid.
    #[error("Order validation error: {0}")]
    ValidationError(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<ProductError> for OrderError {
    fn from(e: ProductError) -> Self {
        match e {
            ProductError::NotFound(id) => OrderError::NotFound(id),
            ProductError::InsufficientStock(name) => OrderError::InsufficientStock(name),
            ProductError::ValidationError(msg) => OrderError::ValidationError(msg),
            ProductError::ActorCommunicationError(msg) => {
                OrderError::ActorCommunicationError(msg)
            }
        }
    }
}

impl From<CustomerError> for OrderError {
    fn from(e: CustomerError) -> Self {
        match e {
            CustomerError::NotFound(id) => OrderError::NotFound(id),
            // The order path only reads clients.
            CustomerError::AlreadyExists(email) => OrderError::ActorCommunicationError(format!(
                "unexpected duplicate client {email} while reading clients"
            )),
            CustomerError::ValidationError(msg) => OrderError::ValidationError(msg),
            CustomerError::ActorCommunicationError(msg) => {
                OrderError::ActorCommunicationError(msg)
            }
        }
    }
}
