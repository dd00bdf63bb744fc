//! Entity trait implementation for the Order domain type.
//!
//! Placing and updating an order is where the service keeps inventory consistent; see
//! [`reconcile`](super::reconcile) for how line items become stock adjustments.
//!
//! ## Create
//! 1. Line items are validated before anything is read.
//! 2. The client must exist (`NotFound`) and belong to the acting seller (`Unauthorized`).
//! 3. Stock is taken product by product; a failure reverts what was already taken.
//! 4. Line names and prices are copied from the catalog, and the total is computed.
//!
//! ## Update
//! Same checks against the (possibly new) client, plus the order itself must belong to
//! the acting seller. When new line items are supplied, only the difference against the
//! current ones is applied to stock.

use super::reconcile::StockPlan;
use crate::clients::{CustomerClient, ProductClient};
use crate::model::{
    CustomerId, LineItem, LineRequest, Order, OrderCreate, OrderId, OrderUpdate, Product,
    UserId,
};
use crate::order_actor::OrderError;
use actor_framework::{ActorClient, ActorEntity};
use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, info, warn};

fn validate(lines: &[LineRequest]) -> Result<(), OrderError> {
    if lines.is_empty() {
        return Err(OrderError::ValidationError(
            "an order needs at least one line".into(),
        ));
    }
    if let Some(line) = lines.iter().find(|line| line.quantity == 0) {
        return Err(OrderError::ValidationError(format!(
            "quantity for {} must be positive",
            line.product
        )));
    }
    Ok(())
}

fn pending(request: &LineRequest) -> LineItem {
    LineItem {
        product: request.product,
        quantity: request.quantity,
        name: String::new(),
        price: 0.0,
    }
}

/// Copies name and price from `taken` into every line whose product is not in `keep`.
fn snapshot(lines: &mut [LineItem], taken: &[Product], keep: &[LineItem]) {
    for line in lines
        .iter_mut()
        .filter(|line| keep.iter().all(|kept| kept.product != line.product))
    {
        if let Some(product) = taken.iter().find(|p| p.id == line.product) {
            line.name = product.name.clone();
            line.price = product.price;
        }
    }
}

/// Fails unless `client` exists and belongs to `actor`.
async fn check_client(
    customers: &CustomerClient,
    client: CustomerId,
    actor: UserId,
) -> Result<(), OrderError> {
    let customer = customers
        .get(client)
        .await?
        .ok_or_else(|| OrderError::NotFound(client.to_string()))?;
    if customer.seller != actor {
        warn!(%client, %actor, owner = %customer.seller, "Client belongs to another seller");
        return Err(OrderError::Unauthorized);
    }
    Ok(())
}

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = OrderUpdate;
    type Action = ();
    type ActionResult = ();
    type Context = (CustomerClient, ProductClient);
    type Error = OrderError;

    fn id(&self) -> &OrderId {
        &self.id
    }

    /// The seller is always the acting seller; `params.total` is not used.
    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, OrderError> {
        validate(&params.lines)?;
        Ok(Self {
            id,
            lines: params.lines.iter().map(pending).collect(),
            total: 0.0,
            client: params.client,
            seller: params.actor,
            state: params.state.unwrap_or_default(),
            created: Utc::now(),
        })
    }

    async fn on_create(&mut self, ctx: &Self::Context) -> Result<(), OrderError> {
        let (customers, products) = ctx;
        check_client(customers, self.client, self.seller).await?;

        let plan = StockPlan::for_create(&self.lines);
        debug!(order_id = %self.id, plan = ?plan.adjustments(), "Taking stock");
        let taken = plan.apply(products).await?;

        snapshot(&mut self.lines, &taken, &[]);
        self.total = self.computed_total();
        info!(order_id = %self.id, lines = self.lines.len(), total = self.total, "Order placed");
        Ok(())
    }

    async fn on_update(&mut self, update: OrderUpdate, ctx: &Self::Context) -> Result<(), OrderError> {
        let (customers, products) = ctx;
        if let Some(lines) = &update.lines {
            validate(lines)?;
        }
        check_client(customers, update.client, update.actor).await?;
        if self.seller != update.actor {
            warn!(order_id = %self.id, actor = %update.actor, owner = %self.seller, "Order belongs to another seller");
            return Err(OrderError::Unauthorized);
        }

        if let Some(requests) = update.lines {
            let mut lines: Vec<LineItem> = requests
                .iter()
                .map(|request| {
                    match self.lines.iter().find(|line| line.product == request.product) {
                        Some(previous) => LineItem {
                            quantity: request.quantity,
                            ..previous.clone()
                        },
                        None => pending(request),
                    }
                })
                .collect();

            let plan = StockPlan::between(&self.lines, &lines);
            debug!(order_id = %self.id, plan = ?plan.adjustments(), "Reconciling stock");
            let taken = plan.apply(products).await?;

            snapshot(&mut lines, &taken, &self.lines);
            self.lines = lines;
            self.total = self.computed_total();
        }

        self.client = update.client;
        if let Some(state) = update.state {
            self.state = state;
        }
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &Self::Context) -> Result<(), OrderError> {
        Ok(())
    }
}
