//! Machine-readable error codes for GraphQL responses.
//!
//! Every domain error is reported with its message and an `extensions.code`:
//!
//! ```json
//! { "message": "Insufficient stock for 'Laptop'", "extensions": { "code": "INSUFFICIENT_STOCK" } }
//! ```

use crate::auth::AuthError;
use crate::customer_actor::CustomerError;
use crate::model::ParseIdError;
use crate::order_actor::OrderError;
use crate::product_actor::ProductError;
use crate::user_actor::UserError;
use async_graphql::ErrorExtensions;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Unauthenticated,
    NotFound,
    InsufficientStock,
    BadUserInput,
    AlreadyExists,
    InvalidCredentials,
    Internal,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::Unauthenticated => "UNAUTHENTICATED",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::InsufficientStock => "INSUFFICIENT_STOCK",
            ErrorCode::BadUserInput => "BAD_USER_INPUT",
            ErrorCode::AlreadyExists => "ALREADY_EXISTS",
            ErrorCode::InvalidCredentials => "INVALID_CREDENTIALS",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

/// Errors that know their [`ErrorCode`].
pub trait Coded {
    fn code(&self) -> ErrorCode;
}

impl Coded for UserError {
    fn code(&self) -> ErrorCode {
        match self {
            UserError::NotFound(_) => ErrorCode::NotFound,
            UserError::AlreadyExists(_) => ErrorCode::AlreadyExists,
            UserError::InvalidCredentials => ErrorCode::InvalidCredentials,
            UserError::ValidationError(_) => ErrorCode::BadUserInput,
            UserError::PasswordHash(_) | UserError::ActorCommunicationError(_) => {
                ErrorCode::Internal
            }
        }
    }
}

impl Coded for ProductError {
    fn code(&self) -> ErrorCode {
        match self {
            ProductError::NotFound(_) => ErrorCode::NotFound,
            ProductError::InsufficientStock(_) => ErrorCode::InsufficientStock,
            ProductError::ValidationError(_) => ErrorCode::BadUserInput,
            ProductError::ActorCommunicationError(_) => ErrorCode::Internal,
        }
    }
}

impl Coded for CustomerError {
    fn code(&self) -> ErrorCode {
        match self {
            CustomerError::NotFound(_) => ErrorCode::NotFound,
            CustomerError::AlreadyExists(_) => ErrorCode::AlreadyExists,
            CustomerError::ValidationError(_) => ErrorCode::BadUserInput,
            CustomerError::ActorCommunicationError(_) => ErrorCode::Internal,
        }
    }
}

impl Coded for OrderError {
    fn code(&self) -> ErrorCode {
        match self {
            OrderError::NotFound(_) => ErrorCode::NotFound,
            OrderError::Unauthorized => ErrorCode::Unauthenticated,
            OrderError::InsufficientStock(_) => ErrorCode::InsufficientStock,
            OrderError::ValidationError(_) => ErrorCode::BadUserInput,
            OrderError::ActorCommunicationError(_) => ErrorCode::Internal,
        }
    }
}

impl Coded for AuthError {
    fn code(&self) -> ErrorCode {
        match self {
            AuthError::Unauthenticated
            | AuthError::InvalidToken(_)
            | AuthError::MalformedSubject(_)
            | AuthError::UnknownSeller(_) => ErrorCode::Unauthenticated,
            AuthError::Encoding(_) | AuthError::Hash(_) | AuthError::Task(_) => {
                ErrorCode::Internal
            }
        }
    }
}

impl Coded for ParseIdError {
    fn code(&self) -> ErrorCode {
        ErrorCode::BadUserInput
    }
}

macro_rules! impl_error_extensions {
    ($($error:ty),+ $(,)?) => {
        $(
            impl ErrorExtensions for $error {
                fn extend(&self) -> async_graphql::Error {
                    let code = self.code().as_str();
                    async_graphql::Error::new(self.to_string())
                        .extend_with(|_, e| e.set("code", code))
                }
            }
        )+
    };
}

impl_error_extensions!(UserError, ProductError, CustomerError, OrderError, AuthError, ParseIdError);

/// Converts a domain result into a GraphQL result carrying the error code.
pub trait CodedResultExt<T> {
    fn coded(self) -> async_graphql::Result<T>;
}

impl<T, E: ErrorExtensions> CodedResultExt<T> for Result<T, E> {
    fn coded(self) -> async_graphql::Result<T> {
        self.map_err(|e| e.extend())
    }
}
