//! # ActorClient Trait
//!
//! Common interface for resource-specific clients: default `get`, `list`, `find` and
//! `delete` built on a generic [`ResourceClient`], with framework errors mapped into the
//! resource's own error type.
use crate::{ActorEntity, Filter, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit standard operations.
///
/// ```rust,ignore
/// #[derive(Clone)]
/// pub struct ProductClient { inner: ResourceClient<Product> }
///
/// #[async_trait]
/// impl ActorClient<Product> for ProductClient {
///     type Error = ProductError;
///     fn inner(&self) -> &ResourceClient<Product> { &self.inner }
///     fn map_error(e: FrameworkError) -> ProductError { /* ... */ }
/// }
///
/// // get(), list(), find() and delete() are now available on ProductClient.
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the resource error type. Implementations usually try
    /// [`FrameworkError::downcast`] first so hook errors keep their kind.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Every stored entity, in id order.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }

    /// Entities matching `filter`, in id order.
    #[tracing::instrument(skip(self, filter))]
    async fn find(&self, filter: Filter<T>) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().find(filter).await.map_err(Self::map_error)
    }

    /// Delete an entity by ID, returning what was removed.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<T, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
