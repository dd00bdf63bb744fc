//! # System Lifecycle & Orchestration
//!
//! Individual actors are simple; wiring them together is where the complexity lives.
//!
//! 1. **Actor Creation** - every actor and its client, with no dependencies yet
//! 2. **Dependency Injection** - the order actor receives the customer and product
//!    clients through `run(context)`
//! 3. **Graceful Shutdown** - drop the clients, then await every actor task
//!
//! ## Dependency graph
//!
//! ```text
//! Order ──> Customer
//!   └─────> Product
//! User
//! ```
//!
//! The graph is acyclic, so closing channels is enough to stop every actor: once the
//! order actor exits, the clients in its context are dropped and the customer and
//! product actors follow.
//!
//! See [`tracing`] for the logging setup.

pub mod order_system;
pub mod tracing;

pub use self::order_system::OrderSystem;
pub use self::tracing::setup_tracing;
