//! # Stock Reconciliation
//!
//! Turns an order's line items into per-product stock adjustments and applies them
//! through the product actor.
//!
//! Lines are matched by product id, never by position. For every product the plan holds
//! `new quantity - previous quantity` (repeated lines summed), so a reordered list
//! changes nothing, a product that disappears returns all its units, and a new product
//! takes all of them.
//!
//! Each adjustment is one `AdjustStock` message, checked and applied atomically by the
//! product actor. There is no transaction across products: when an adjustment fails,
//! the ones already applied for the same request are reverted, newest first.

use crate::clients::ProductClient;
use crate::model::{LineItem, Product, ProductId};
use crate::order_actor::OrderError;
use crate::product_actor::ProductError;
use tracing::{debug, warn};

/// Net stock change per product. Positive deltas take units, negative ones return them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StockPlan {
    adjustments: Vec<(ProductId, i64)>,
}

fn quantities(lines: &[LineItem]) -> Vec<(ProductId, i64)> {
    let mut totals: Vec<(ProductId, i64)> = Vec::new();
    for line in lines {
        let quantity = i64::from(line.quantity);
        match totals.iter_mut().find(|(id, _)| *id == line.product) {
            Some((_, sum)) => *sum += quantity,
            None => totals.push((line.product, quantity)),
        }
    }
    totals
}

impl StockPlan {
    /// Every line of a new order is a full take.
    pub fn for_create(lines: &[LineItem]) -> Self {
        Self::between(&[], lines)
    }

    /// Takes are listed before returns, so a failed take never has to undo a return.
    pub fn between(previous: &[LineItem], next: &[LineItem]) -> Self {
        let before = quantities(previous);
        let after = quantities(next);

        let mut adjustments: Vec<(ProductId, i64)> = after
            .iter()
            .map(|&(id, quantity)| {
                let old = before
                    .iter()
                    .find(|(prev, _)| *prev == id)
                    .map_or(0, |&(_, q)| q);
                (id, quantity - old)
            })
            .chain(
                before
                    .iter()
                    .filter(|(id, _)| after.iter().all(|(next, _)| next != id))
                    .map(|&(id, quantity)| (id, -quantity)),
            )
            .filter(|&(_, delta)| delta != 0)
            .collect();
        adjustments.sort_by_key(|&(_, delta)| delta < 0);

        Self { adjustments }
    }

    pub fn adjustments(&self) -> &[(ProductId, i64)] {
        &self.adjustments
    }

    pub fn is_empty(&self) -> bool {
        self.adjustments.is_empty()
    }

    /// Applies the plan, returning each product that had units taken as it was right
    /// after the take.
    ///
    /// Returning units to a product that no longer exists is skipped with a warning.
    pub async fn apply(&self, products: &ProductClient) -> Result<Vec<Product>, OrderError> {
        let mut applied: Vec<(ProductId, i64)> = Vec::with_capacity(self.adjustments.len());
        let mut taken = Vec::new();

        for &(id, delta) in &self.adjustments {
            match products.adjust_stock(id, delta).await {
                Ok(product) => {
                    applied.push((id, delta));
                    if delta > 0 {
                        taken.push(product);
                    }
                }
                Err(ProductError::NotFound(_)) if delta < 0 => {
                    warn!(%id, delta, "Product no longer exists, units not returned");
                }
                Err(e) => {
                    warn!(%id, delta, error = %e, applied = applied.len(), "Stock adjustment failed");
                    compensate(&applied, products).await;
                    return Err(e.into());
                }
            }
        }

        Ok(taken)
    }
}

async fn compensate(applied: &[(ProductId, i64)], products: &ProductClient) {
    for &(id, delta) in applied.iter().rev() {
        match products.adjust_stock(id, -delta).await {
            Ok(_) => debug!(%id, delta = -delta, "Compensated"),
            Err(e) => warn!(%id, delta = -delta, error = %e, "Compensation failed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(product: u32, quantity: u32) -> LineItem {
        LineItem {
            product: ProductId(product),
            quantity,
            name: String::new(),
            price: 0.0,
        }
    }

    fn plan(previous: &[LineItem], next: &[LineItem]) -> Vec<(u32, i64)> {
        StockPlan::between(previous, next)
            .adjustments()
            .iter()
            .map(|&(id, delta)| (id.0, delta))
            .collect()
    }

    #[test]
    fn create_takes_every_line_and_sums_repeats() {
        let lines = [line(1, 2), line(2, 1), line(1, 3)];
        let plan = StockPlan::for_create(&lines);
        let deltas: Vec<(u32, i64)> = plan.adjustments().iter().map(|&(id, d)| (id.0, d)).collect();
        assert_eq!(deltas, vec![(1, 5), (2, 1)]);
    }

    #[test]
    fn update_uses_deltas_matched_by_product() {
        assert_eq!(plan(&[line(1, 3)], &[line(1, 1)]), vec![(1, -2)]);
        assert_eq!(plan(&[line(1, 2)], &[line(1, 9)]), vec![(1, 7)]);
    }

    #[test]
    fn reordering_lines_changes_nothing() {
        let before = [line(1, 2), line(2, 4)];
        let after = [line(2, 4), line(1, 2)];
        assert!(StockPlan::between(&before, &after).is_empty());
    }

    #[test]
    fn added_products_take_and_removed_products_return() {
        let before = [line(1, 2), line(2, 4)];
        let after = [line(3, 1), line(1, 2)];
        assert_eq!(plan(&before, &after), vec![(3, 1), (2, -4)]);
    }

    #[test]
    fn takes_come_before_returns() {
        let before = [line(1, 5), line(2, 1)];
        let after = [line(1, 1), line(2, 3)];
        assert_eq!(plan(&before, &after), vec![(2, 2), (1, -4)]);
    }
}
