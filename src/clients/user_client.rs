use crate::auth::password;
use crate::clients::map_framework_error;
use crate::model::{User, UserCreate};
use crate::user_actor::UserError;
use actor_framework::{ActorClient, Filter, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument, warn};

/// Client for interacting with the User actor.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
}

impl UserClient {
    pub fn new(inner: ResourceClient<User>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<User> for UserClient {
    type Error = UserError;

    fn inner(&self) -> &ResourceClient<User> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        map_framework_error!(UserError, e)
    }
}

impl UserClient {
    /// Registers a seller. The password is hashed before it reaches the actor.
    #[instrument(skip(self, password))]
    pub async fn register(
        &self,
        name: &str,
        surname: &str,
        email: &str,
        password: &str,
    ) -> Result<User, UserError> {
        debug!("Sending request");
        let password_hash = password::hash(password)
            .await
            .map_err(|e| UserError::PasswordHash(e.to_string()))?;
        self.inner
            .create(UserCreate {
                name: name.to_string(),
                surname: surname.to_string(),
                email: email.to_string(),
                password_hash,
            })
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        let email = email.trim().to_string();
        let mut found = self
            .find(Filter::new(move |user: &User| {
                user.email.eq_ignore_ascii_case(&email)
            }))
            .await?;
        Ok(found.pop())
    }

    /// The user behind `email`, if `password` matches its hash.
    ///
    /// # Errors
    /// `NotFound` for an unknown email, `InvalidCredentials` for a wrong password.
    #[instrument(skip(self, password))]
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<User, UserError> {
        let user = self
            .find_by_email(email)
            .await?
            .ok_or_else(|| UserError::NotFound(email.to_string()))?;
        let matches = password::verify(password, &user.password_hash)
            .await
            .map_err(|e| UserError::PasswordHash(e.to_string()))?;
        if !matches {
            warn!(user_id = %user.id, "Password mismatch");
            return Err(UserError::InvalidCredentials);
        }
        Ok(user)
    }
}
