//! Entity trait implementation for the Product domain type, including the stock
//! actions.

use super::actions::{ProductAction, ProductActionResult};
use crate::model::{required, Product, ProductCreate, ProductId, ProductUpdate};
use crate::product_actor::ProductError;
use actor_framework::ActorEntity;
use async_trait::async_trait;
use chrono::Utc;

fn valid_price(price: f64) -> Result<f64, ProductError> {
    if !price.is_finite() || price < 0.0 {
        return Err(ProductError::ValidationError(format!(
            "price must be a non-negative number, got {price}"
        )));
    }
    Ok(price)
}

#[async_trait]
impl ActorEntity for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Update = ProductUpdate;
    type Action = ProductAction;
    type ActionResult = ProductActionResult;
    type Context = ();
    type Error = ProductError;

    fn id(&self) -> &ProductId {
        &self.id
    }

    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, ProductError> {
        Ok(Self {
            id,
            name: required("name", &params.name).map_err(ProductError::ValidationError)?,
            stock: params.stock,
            price: valid_price(params.price)?,
            created: Utc::now(),
        })
    }

    async fn on_update(&mut self, update: ProductUpdate, _ctx: &()) -> Result<(), ProductError> {
        self.name = required("name", &update.name).map_err(ProductError::ValidationError)?;
        self.price = valid_price(update.price)?;
        self.stock = update.stock;
        Ok(())
    }

    /// # Actions
    /// - `CheckStock`: current stock, no change
    /// - `AdjustStock`: `stock -= delta`, rejected without change if it would go negative
    async fn handle_action(
        &mut self,
        action: ProductAction,
        _ctx: &(),
    ) -> Result<ProductActionResult, ProductError> {
        match action {
            ProductAction::CheckStock => Ok(ProductActionResult::CheckStock(self.stock)),
            ProductAction::AdjustStock { delta } => {
                let next = i64::from(self.stock) - delta;
                if next < 0 {
                    return Err(ProductError::InsufficientStock(self.name.clone()));
                }
                self.stock = u32::try_from(next).map_err(|_| {
                    ProductError::ValidationError(format!("stock of '{}' would overflow", self.name))
                })?;
                Ok(ProductActionResult::StockAdjusted(self.clone()))
            }
        }
    }
}
