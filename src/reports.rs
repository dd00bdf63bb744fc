//! # Sales Reports
//!
//! Rankings over completed orders: which clients bought the most and which sellers
//! sold the most. Orders in any other state are ignored.

use crate::model::{CustomerId, Order, OrderState, UserId};
use std::collections::BTreeMap;

/// Number of entries in the best-clients ranking.
pub const BEST_CLIENTS_LIMIT: usize = 10;
/// Number of entries in the best-sellers ranking.
pub const BEST_SELLERS_LIMIT: usize = 3;

/// Sums completed order totals per key, sorted by total descending (ties by key) and
/// truncated to `limit` after sorting.
pub fn rank_by<K: Ord + Copy>(
    orders: &[Order],
    key: impl Fn(&Order) -> K,
    limit: usize,
) -> Vec<(K, f64)> {
    let mut totals: BTreeMap<K, f64> = BTreeMap::new();
    for order in orders.iter().filter(|o| o.state == OrderState::Completed) {
        *totals.entry(key(order)).or_default() += order.total;
    }

    let mut ranked: Vec<(K, f64)> = totals.into_iter().collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
    ranked.truncate(limit);
    ranked
}

pub fn best_clients(orders: &[Order]) -> Vec<(CustomerId, f64)> {
    rank_by(orders, |order| order.client, BEST_CLIENTS_LIMIT)
}

pub fn best_sellers(orders: &[Order]) -> Vec<(UserId, f64)> {
    rank_by(orders, |order| order.seller, BEST_SELLERS_LIMIT)
}
