use crate::auth::{AuthError, Seller};
use crate::model::User;
use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default token lifetime: ten hours.
pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(36_000);

/// JWT claims. `id` is the user's external id (`user_<n>`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    pub id: String,
    pub email: String,
    pub name: String,
    pub surname: String,
    pub iat: i64,
    pub exp: i64,
}

/// Issues and verifies HS256 tokens with a shared secret.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenService {
    pub fn new(secret: &str, ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl,
        }
    }

    pub fn issue(&self, user: &User) -> Result<String, AuthError> {
        let iat = Utc::now().timestamp();
        let ttl = i64::try_from(self.ttl.as_secs()).unwrap_or(i64::MAX);
        let claims = Claims {
            id: user.id.to_string(),
            email: user.email.clone(),
            name: user.name.clone(),
            surname: user.surname.clone(),
            iat,
            exp: iat.saturating_add(ttl),
        };
        Ok(jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &self.encoding,
        )?)
    }

    /// Checks signature and expiry and returns the seller the token names.
    pub fn verify(&self, token: &str) -> Result<Seller, AuthError> {
        let claims = jsonwebtoken::decode::<Claims>(token, &self.decoding, &self.validation)
            .map_err(AuthError::InvalidToken)?
            .claims;
        let id = claims
            .id
            .parse()
            .map_err(|_| AuthError::MalformedSubject(claims.id.clone()))?;
        Ok(Seller {
            id,
            email: claims.email,
            name: claims.name,
            surname: claims.surname,
        })
    }
}
