//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered by
//! `RUST_LOG` (default `info`), without module targets.
//!
//! - `info`: state changes (actor started, entity created, order placed)
//! - `warn`: rejected operations and compensations
//! - `debug`: payloads, logged once where a request enters a client
//!
//! ```bash
//! RUST_LOG=debug cargo run
//! RUST_LOG=sales_orders::order_actor=debug,info cargo run
//! ```
//!
//! Placing an order at `info` reads roughly:
//!
//! ```text
//! INFO place_order{actor=user_1 client=client_1}: Action ok entity_type="Product" id=product_1
//! INFO place_order{actor=user_1 client=client_1}: Order placed order_id=order_1 lines=1 total=1800.0
//! INFO place_order{actor=user_1 client=client_1}: Created entity_type="Order" id=order_1 size=1
//! ```

use tracing_subscriber::EnvFilter;

/// Initializes the global subscriber. Call once, from `main`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .compact()
        .init();
}
