use crate::clients::map_framework_error;
use crate::model::{Order, OrderCreate, OrderId, OrderState, OrderUpdate, UserId};
use crate::order_actor::OrderError;
use actor_framework::{ActorClient, Filter, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, info, instrument, warn};

/// Client for interacting with the Order actor.
///
/// Orchestration (client ownership, stock reconciliation) happens in the Order
/// actor's `on_create` and `on_update` hooks; this client only adds the seller-scoped
/// queries and the ownership check on delete.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        map_framework_error!(OrderError, e)
    }
}

fn warn_on_total_mismatch(claimed: Option<f64>, order: &Order) {
    if let Some(claimed) = claimed {
        if (claimed - order.total).abs() > 1e-6 {
            warn!(order_id = %order.id, claimed, computed = order.total, "Ignoring client-supplied total");
        }
    }
}

impl OrderClient {
    #[instrument(skip(self, params), fields(actor = %params.actor, client = %params.client))]
    pub async fn place_order(&self, params: OrderCreate) -> Result<Order, OrderError> {
        debug!(?params, "place_order called");
        let claimed = params.total;
        let order = self.inner.create(params).await.map_err(Self::map_error)?;
        warn_on_total_mismatch(claimed, &order);
        info!(order_id = %order.id, "Order created");
        Ok(order)
    }

    #[instrument(skip(self, update), fields(actor = %update.actor))]
    pub async fn update_order(&self, id: OrderId, update: OrderUpdate) -> Result<Order, OrderError> {
        debug!(?update, "update_order called");
        let claimed = update.total;
        let order = self.inner.update(id, update).await.map_err(Self::map_error)?;
        warn_on_total_mismatch(claimed, &order);
        Ok(order)
    }

    /// Deletes an order of `actor`. Stock is not returned.
    ///
    /// # Errors
    /// `NotFound` for a missing order, `Unauthorized` (order kept) for another seller's.
    #[instrument(skip(self))]
    pub async fn delete_order(&self, actor: UserId, id: OrderId) -> Result<Order, OrderError> {
        self.get_for_seller(actor, id).await?;
        self.delete(id).await
    }

    #[instrument(skip(self))]
    pub async fn get_for_seller(&self, actor: UserId, id: OrderId) -> Result<Order, OrderError> {
        let order = self
            .get(id)
            .await?
            .ok_or_else(|| OrderError::NotFound(id.to_string()))?;
        if order.seller != actor {
            warn!(order_id = %id, %actor, owner = %order.seller, "Order belongs to another seller");
            return Err(OrderError::Unauthorized);
        }
        Ok(order)
    }

    #[instrument(skip(self))]
    pub async fn for_seller(&self, actor: UserId) -> Result<Vec<Order>, OrderError> {
        self.find(Filter::new(move |order: &Order| order.seller == actor))
            .await
    }

    #[instrument(skip(self))]
    pub async fn for_seller_in_state(
        &self,
        actor: UserId,
        state: OrderState,
    ) -> Result<Vec<Order>, OrderError> {
        self.find(Filter::new(move |order: &Order| {
            order.seller == actor && order.state == state
        }))
        .await
    }

    /// Every order in `Completed` state, for the sales reports.
    #[instrument(skip(self))]
    pub async fn completed(&self) -> Result<Vec<Order>, OrderError> {
        self.find(Filter::new(|order: &Order| order.state == OrderState::Completed))
            .await
    }
}
