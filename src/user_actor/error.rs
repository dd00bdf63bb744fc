//! Error types for the User actor.

use thiserror::Error;

/// Errors that can occur during user operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UserError {
    /// The requested user was not found.
    #[error("User not found: {0}")]
    NotFound(String),

    /// A user with the same email is already registered.
    #[error("User already exists: {0}")]
    AlreadyExists(String),

    /// The password does not match the stored hash.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// The user data provided is invalid.
    #[error("User validation error: {0}")]
    ValidationError(String),

    /// Hashing or verifying a password failed.
    #[error("Password hashing error: {0}")]
    PasswordHash(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
