use crate::model::{CustomerId, OrderId, ProductId, UserId};
use chrono::{DateTime, Utc};

/// Order status. New orders are `Pending`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum OrderState {
    #[default]
    Pending,
    Completed,
    Canceled,
}

/// One product line of an order, with the name and unit price captured when the
/// product was first added.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    pub product: ProductId,
    pub quantity: u32,
    pub name: String,
    pub price: f64,
}

impl LineItem {
    pub fn subtotal(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// A requested `(product, quantity)` pair, as submitted by the seller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRequest {
    pub product: ProductId,
    pub quantity: u32,
}

/// A customer order.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](actor_framework::ActorEntity) trait.
/// Its `on_create` and `on_update` hooks reconcile product stock through the
/// customer and product clients injected as the actor's context.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: OrderId,
    pub lines: Vec<LineItem>,
    pub total: f64,
    pub client: CustomerId,
    pub seller: UserId,
    pub state: OrderState,
    pub created: DateTime<Utc>,
}

impl Order {
    /// Sum of price × quantity over every line.
    pub fn computed_total(&self) -> f64 {
        self.lines.iter().map(LineItem::subtotal).sum()
    }
}

/// Payload for placing an order on behalf of `actor`.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub actor: UserId,
    pub client: CustomerId,
    pub lines: Vec<LineRequest>,
    /// The total the caller computed. Never stored; the order's total is recomputed
    /// from catalog prices.
    pub total: Option<f64>,
    pub state: Option<OrderState>,
}

/// Replacement input for an existing order, performed on behalf of `actor`.
///
/// `lines: None` keeps the current line items and stock untouched.
#[derive(Debug, Clone)]
pub struct OrderUpdate {
    pub actor: UserId,
    pub client: CustomerId,
    pub lines: Option<Vec<LineRequest>>,
    pub total: Option<f64>,
    pub state: Option<OrderState>,
}
