use crate::clients::{CustomerClient, OrderClient, ProductClient, UserClient};
use crate::config::DEFAULT_ACTOR_BUFFER;
use crate::{customer_actor, order_actor, product_actor, user_actor};
use tracing::{error, info};

/// The runtime orchestrator: starts every resource actor, wires the order actor to
/// the customer and product actors, and shuts everything down.
///
/// # Example
///
/// ```ignore
/// let system = OrderSystem::new();
///
/// let product = system.product_client.create(params).await?;
/// let order = system.order_client.place_order(order_params).await?;
///
/// system.shutdown().await?;
/// ```
pub struct OrderSystem {
    pub user_client: UserClient,
    pub product_client: ProductClient,
    pub customer_client: CustomerClient,
    pub order_client: OrderClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl Default for OrderSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderSystem {
    /// Starts the system with the default channel capacity. Must be called inside a
    /// Tokio runtime.
    pub fn new() -> Self {
        Self::with_buffer(DEFAULT_ACTOR_BUFFER)
    }

    pub fn with_buffer(buffer_size: usize) -> Self {
        // 1. Create actors (no dependencies)
        let (user_actor, user_client) = user_actor::new(buffer_size);
        let (product_actor, product_client) = product_actor::new(buffer_size);
        let (customer_actor, customer_client) = customer_actor::new(buffer_size);
        let (order_actor, order_client) = order_actor::new(buffer_size);

        // 2. Start actors with injected context
        let user_handle = tokio::spawn(user_actor.run(()));
        let product_handle = tokio::spawn(product_actor.run(()));
        let customer_handle = tokio::spawn(customer_actor.run(()));
        let order_handle = tokio::spawn(
            order_actor.run((customer_client.clone(), product_client.clone())),
        );

        Self {
            user_client,
            product_client,
            customer_client,
            order_client,
            handles: vec![user_handle, product_handle, customer_handle, order_handle],
        }
    }

    /// Drops this system's clients and waits for every actor to stop.
    ///
    /// Actors stop once all clones of their client are gone, so clones handed out
    /// elsewhere (the GraphQL schema holds some) must be dropped first. The order actor
    /// holds the customer and product clients; it stops first and releases them.
    pub async fn shutdown(self) -> Result<(), tokio::task::JoinError> {
        info!("Shutting down system...");

        drop(self.order_client);
        drop(self.user_client);
        drop(self.product_client);
        drop(self.customer_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Actor task failed");
                return Err(e);
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
