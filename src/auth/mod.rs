//! # Authentication
//!
//! Sellers authenticate with email and password (`authUser`) and receive an HS256 JWT.
//! Each request presents it in the `Authorization` header, optionally prefixed with
//! `Bearer `. A valid token becomes the request's [`Seller`]; an invalid or expired one
//! is logged and the request continues unauthenticated, so only seller-scoped
//! operations fail.
//!
//! - [`password`] - bcrypt hashing, run on the blocking pool
//! - [`token`] - [`TokenService`] issuing and verifying tokens

pub mod password;
pub mod token;

pub use token::*;

use crate::model::UserId;
use thiserror::Error;

/// The authenticated seller a request acts on behalf of.
#[derive(Debug, Clone, PartialEq)]
pub struct Seller {
    pub id: UserId,
    pub email: String,
    pub name: String,
    pub surname: String,
}

/// Errors raised while authenticating a request or hashing a password.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The operation needs a seller and the request carries none.
    #[error("Not authenticated")]
    Unauthenticated,

    #[error("Invalid token: {0}")]
    InvalidToken(jsonwebtoken::errors::Error),

    #[error("Token carries a malformed user id: {0}")]
    MalformedSubject(String),

    /// The token names a user that is not registered under that email in this process.
    #[error("Token does not match a registered user: {0}")]
    UnknownSeller(String),

    #[error("Token encoding failed: {0}")]
    Encoding(#[from] jsonwebtoken::errors::Error),

    #[error("Password hashing failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    #[error("Password hashing task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Strips an optional `Bearer ` prefix from an `Authorization` header value.
/// Returns `None` when no token is left.
pub fn bearer_token(header: &str) -> Option<&str> {
    let header = header.trim();
    let token = header.strip_prefix("Bearer ").unwrap_or(header).trim();
    (!token.is_empty()).then_some(token)
}
