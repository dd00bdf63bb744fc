//! Error types for the Customer actor.

use thiserror::Error;

/// Errors that can occur during client (customer) operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CustomerError {
    /// The client does not exist, or belongs to another seller.
    #[error("Client not found: {0}")]
    NotFound(String),

    /// A client with the same email already exists.
    #[error("Client already exists: {0}")]
    AlreadyExists(String),

    /// The client data provided is invalid.
    #[error("Client validation error: {0}")]
    ValidationError(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
