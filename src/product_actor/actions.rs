//! Custom actions for the Product actor.
//!
//! Stock is never written by a caller that read it earlier: the check and the write
//! happen inside one `AdjustStock` message, so concurrent orders cannot both pass a
//! stale check.

use crate::model::Product;

/// Custom actions for Product entities.
#[derive(Debug, Clone)]
pub enum ProductAction {
    /// Reads the current stock level.
    CheckStock,
    /// Applies `stock -= delta` if that keeps stock non-negative; a negative delta
    /// returns units to stock.
    ///
    /// # Errors
    /// `InsufficientStock` naming the product when `delta` exceeds the stock.
    AdjustStock { delta: i64 },
}

/// Results from ProductActions - variants match 1:1 with ProductAction
#[derive(Debug, Clone)]
pub enum ProductActionResult {
    /// The current stock level.
    CheckStock(u32),
    /// The product after the adjustment.
    StockAdjusted(Product),
}
