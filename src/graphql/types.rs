//! GraphQL object and input types.
//!
//! Objects are built from the domain model at the boundary; identifiers travel as
//! their `<kind>_<n>` string form.

use super::errors::CodedResultExt;
use crate::clients::CustomerClient;
use crate::model::{self, LineRequest, ProductId};
use crate::order_actor::OrderError;
use actor_framework::ActorClient;
use async_graphql::{ComplexObject, Context, Enum, InputObject, SimpleObject, ID};
use chrono::{DateTime, Utc};

fn timestamp(created: DateTime<Utc>) -> String {
    created.to_rfc3339()
}

#[derive(Enum, Debug, Clone, Copy, PartialEq, Eq)]
#[graphql(name = "OrderState", remote = "crate::model::OrderState")]
pub enum OrderStateValue {
    Pending,
    Completed,
    Canceled,
}

#[derive(SimpleObject, Debug, Clone)]
pub struct User {
    pub id: ID,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub created: String,
}

impl From<model::User> for User {
    fn from(user: model::User) -> Self {
        Self {
            id: ID(user.id.to_string()),
            name: user.name,
            surname: user.surname,
            email: user.email,
            created: timestamp(user.created),
        }
    }
}

#[derive(SimpleObject, Debug, Clone)]
pub struct Token {
    pub token: String,
}

#[derive(SimpleObject, Debug, Clone)]
pub struct Product {
    pub id: ID,
    pub name: String,
    /// Units in stock.
    pub exists: u32,
    pub price: f64,
    pub created: String,
}

impl From<model::Product> for Product {
    fn from(product: model::Product) -> Self {
        Self {
            id: ID(product.id.to_string()),
            name: product.name,
            exists: product.stock,
            price: product.price,
            created: timestamp(product.created),
        }
    }
}

#[derive(SimpleObject, Debug, Clone)]
pub struct Client {
    pub id: ID,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub company: String,
    pub phone: Option<String>,
    pub created: String,
    pub seller: ID,
}

impl From<model::Customer> for Client {
    fn from(customer: model::Customer) -> Self {
        Self {
            id: ID(customer.id.to_string()),
            name: customer.name,
            surname: customer.surname,
            email: customer.email,
            company: customer.company,
            phone: customer.phone,
            created: timestamp(customer.created),
            seller: ID(customer.seller.to_string()),
        }
    }
}

/// One line of an order.
#[derive(SimpleObject, Debug, Clone)]
pub struct OrderGroup {
    pub id: ID,
    pub quantity: u32,
    pub name: String,
    pub price: f64,
}

#[derive(SimpleObject, Debug, Clone)]
#[graphql(complex)]
pub struct Order {
    pub id: ID,
    pub orders: Vec<OrderGroup>,
    pub total: f64,
    pub seller: ID,
    pub created: String,
    pub state: OrderStateValue,
    #[graphql(skip)]
    pub client_id: model::CustomerId,
}

#[ComplexObject]
impl Order {
    /// The full client record, or null once the client has been deleted.
    async fn client(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Client>> {
        let customers = ctx.data::<CustomerClient>()?;
        let customer = customers.get(self.client_id).await.coded()?;
        Ok(customer.map(Client::from))
    }
}

impl From<model::Order> for Order {
    fn from(order: model::Order) -> Self {
        Self {
            id: ID(order.id.to_string()),
            orders: order
                .lines
                .into_iter()
                .map(|line| OrderGroup {
                    id: ID(line.product.to_string()),
                    quantity: line.quantity,
                    name: line.name,
                    price: line.price,
                })
                .collect(),
            total: order.total,
            seller: ID(order.seller.to_string()),
            created: timestamp(order.created),
            state: order.state.into(),
            client_id: order.client,
        }
    }
}

#[derive(SimpleObject, Debug, Clone)]
pub struct TopClient {
    pub total: f64,
    pub client: Vec<Client>,
}

#[derive(SimpleObject, Debug, Clone)]
pub struct TopSeller {
    pub total: f64,
    pub user: Vec<User>,
}

#[derive(InputObject, Debug, Clone)]
pub struct UserInput {
    pub name: String,
    pub surname: String,
    pub email: String,
    #[graphql(secret)]
    pub password: String,
}

#[derive(InputObject, Debug, Clone)]
pub struct AuthInput {
    pub email: String,
    #[graphql(secret)]
    pub password: String,
}

#[derive(InputObject, Debug, Clone)]
pub struct ProductInput {
    pub name: String,
    pub exists: u32,
    pub price: f64,
}

#[derive(InputObject, Debug, Clone)]
pub struct ClientInput {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub company: String,
    pub phone: Option<String>,
}

/// A requested order line. `name` and `price` are accepted for compatibility and
/// ignored; they are taken from the catalog.
#[derive(InputObject, Debug, Clone)]
pub struct OrderProductInput {
    pub id: Option<ID>,
    pub quantity: Option<i32>,
    pub name: Option<String>,
    pub price: Option<f64>,
}

impl OrderProductInput {
    pub fn to_request(&self) -> Result<LineRequest, OrderError> {
        let id = self
            .id
            .as_ref()
            .ok_or_else(|| OrderError::ValidationError("order line without a product id".into()))?;
        let product: ProductId = id
            .parse()
            .map_err(|e: model::ParseIdError| OrderError::ValidationError(e.to_string()))?;
        let quantity = self.quantity.ok_or_else(|| {
            OrderError::ValidationError(format!("order line for {product} without a quantity"))
        })?;
        let quantity = u32::try_from(quantity).map_err(|_| {
            OrderError::ValidationError(format!("quantity for {product} must not be negative"))
        })?;
        Ok(LineRequest { product, quantity })
    }
}

#[derive(InputObject, Debug, Clone)]
pub struct OrderInput {
    pub orders: Option<Vec<OrderProductInput>>,
    pub total: Option<f64>,
    pub client: ID,
    pub state: Option<OrderStateValue>,
}

impl OrderInput {
    /// The requested lines, or `None` when the input carries none.
    pub fn lines(&self) -> Result<Option<Vec<LineRequest>>, OrderError> {
        self.orders
            .as_ref()
            .map(|orders| orders.iter().map(OrderProductInput::to_request).collect())
            .transpose()
    }

    pub fn state(&self) -> Option<model::OrderState> {
        self.state.map(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(id: Option<&str>, quantity: Option<i32>) -> OrderProductInput {
        OrderProductInput {
            id: id.map(|id| ID(id.to_string())),
            quantity,
            name: None,
            price: None,
        }
    }

    #[test]
    fn order_lines_convert_to_requests() {
        let request = line(Some("product_2"), Some(3)).to_request().unwrap();
        assert_eq!(request, LineRequest { product: ProductId(2), quantity: 3 });
    }

    #[test]
    fn incomplete_order_lines_are_rejected() {
        for input in [
            line(None, Some(1)),
            line(Some("product_1"), None),
            line(Some("product_1"), Some(-2)),
            line(Some("client_1"), Some(1)),
        ] {
            assert!(matches!(input.to_request(), Err(OrderError::ValidationError(_))));
        }
    }

    #[test]
    fn missing_orders_keep_current_lines() {
        let input = OrderInput {
            orders: None,
            total: None,
            client: ID("client_1".into()),
            state: Some(OrderStateValue::Completed),
        };
        assert_eq!(input.lines(), Ok(None));
        assert_eq!(input.state(), Some(model::OrderState::Completed));
    }
}
