//! # Product Client
//!
//! Provides a high‑level API for interacting with the `Product` actor.
//! It wraps a `ResourceClient<Product>` and exposes domain‑specific methods.
use crate::clients::map_framework_error;
use crate::model::{Product, ProductCreate, ProductId, ProductUpdate};
use crate::product_actor::{ProductAction, ProductActionResult, ProductError};
use actor_framework::{ActorClient, Filter, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        map_framework_error!(ProductError, e)
    }
}

fn unexpected(result: ProductActionResult) -> ProductError {
    ProductError::ActorCommunicationError(format!("unexpected action result {result:?}"))
}

impl ProductClient {
    #[instrument(skip(self))]
    pub async fn create(&self, params: ProductCreate) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update(&self, id: ProductId, update: ProductUpdate) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Products whose name matches `text` (see [`Product::matches_text`]).
    #[instrument(skip(self))]
    pub async fn search(&self, text: &str) -> Result<Vec<Product>, ProductError> {
        let text = text.to_string();
        self.find(Filter::new(move |product: &Product| product.matches_text(&text)))
            .await
    }

    /// Check the current stock level for a product.
    #[instrument(skip(self))]
    pub async fn check_stock(&self, id: ProductId) -> Result<u32, ProductError> {
        debug!(%id, "Checking stock");
        match self
            .inner
            .perform_action(id, ProductAction::CheckStock)
            .await
            .map_err(Self::map_error)?
        {
            ProductActionResult::CheckStock(level) => Ok(level),
            other => Err(unexpected(other)),
        }
    }

    /// Applies `stock -= delta` atomically and returns the product afterwards.
    ///
    /// # Errors
    /// `InsufficientStock` (naming the product) when `delta` exceeds the stock, in which
    /// case nothing changed.
    #[instrument(skip(self))]
    pub async fn adjust_stock(&self, id: ProductId, delta: i64) -> Result<Product, ProductError> {
        debug!(%id, delta, "Adjusting stock");
        match self
            .inner
            .perform_action(id, ProductAction::AdjustStock { delta })
            .await
            .map_err(Self::map_error)?
        {
            ProductActionResult::StockAdjusted(product) => Ok(product),
            other => Err(unexpected(other)),
        }
    }
}
