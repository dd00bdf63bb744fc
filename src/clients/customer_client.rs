use crate::clients::map_framework_error;
use crate::customer_actor::CustomerError;
use crate::model::{Customer, CustomerCreate, CustomerId, CustomerUpdate, UserId};
use actor_framework::{ActorClient, Filter, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Customer actor.
///
/// Seller-scoped lookups report another seller's client as `NotFound`.
#[derive(Clone)]
pub struct CustomerClient {
    inner: ResourceClient<Customer>,
}

impl CustomerClient {
    pub fn new(inner: ResourceClient<Customer>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Customer> for CustomerClient {
    type Error = CustomerError;

    fn inner(&self) -> &ResourceClient<Customer> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        map_framework_error!(CustomerError, e)
    }
}

impl CustomerClient {
    #[instrument(skip(self))]
    pub async fn create(&self, params: CustomerCreate) -> Result<Customer, CustomerError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update(
        &self,
        id: CustomerId,
        update: CustomerUpdate,
    ) -> Result<Customer, CustomerError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn for_seller(&self, seller: UserId) -> Result<Vec<Customer>, CustomerError> {
        self.find(Filter::new(move |customer: &Customer| customer.seller == seller))
            .await
    }

    #[instrument(skip(self))]
    pub async fn get_for_seller(
        &self,
        seller: UserId,
        id: CustomerId,
    ) -> Result<Customer, CustomerError> {
        self.get(id)
            .await?
            .filter(|customer| customer.seller == seller)
            .ok_or_else(|| CustomerError::NotFound(id.to_string()))
    }

    /// Deletes a client owned by `seller`. The owner never changes, so checking it
    /// before the delete cannot race.
    #[instrument(skip(self))]
    pub async fn delete_for_seller(
        &self,
        seller: UserId,
        id: CustomerId,
    ) -> Result<Customer, CustomerError> {
        self.get_for_seller(seller, id).await?;
        self.delete(id).await
    }
}
