use crate::model::ProductId;
use chrono::{DateTime, Utc};

/// A catalog product and its stock level.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](actor_framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](actor_framework::ResourceActor).
///
/// See [`impl ActorEntity for Product`](#impl-ActorEntity-for-Product) for details on:
/// - Creation parameters ([`ProductCreate`])
/// - Update parameters ([`ProductUpdate`])
/// - Custom actions ([`ProductAction`](crate::product_actor::ProductAction))
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Units available. Only changed through `AdjustStock` or a full update.
    pub stock: u32,
    pub price: f64,
    pub created: DateTime<Utc>,
}

impl Product {
    /// Word search over the name, case-insensitive.
    ///
    /// Matches when any word of `text` equals a word of the name or is a prefix of one.
    /// A query without words matches nothing.
    pub fn matches_text(&self, text: &str) -> bool {
        let name = self.name.to_lowercase();
        let name_words: Vec<&str> = name.split_whitespace().collect();
        text.to_lowercase().split_whitespace().any(|query| {
            name_words
                .iter()
                .any(|word| word.starts_with(query))
        })
    }
}

/// Payload for creating a product.
#[derive(Debug, Clone)]
pub struct ProductCreate {
    pub name: String,
    pub stock: u32,
    pub price: f64,
}

/// Full replacement of a product's fields.
#[derive(Debug, Clone)]
pub struct ProductUpdate {
    pub name: String,
    pub stock: u32,
    pub price: f64,
}
