//! bcrypt hashing. Both operations are CPU-bound and run on Tokio's blocking pool.

use crate::auth::AuthError;

/// Work factor used for new hashes.
pub const COST: u32 = 10;

pub async fn hash(password: &str) -> Result<String, AuthError> {
    let password = password.to_string();
    Ok(tokio::task::spawn_blocking(move || bcrypt::hash(password, COST)).await??)
}

pub async fn verify(password: &str, hash: &str) -> Result<bool, AuthError> {
    let (password, hash) = (password.to_string(), hash.to_string());
    Ok(tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash)).await??)
}
