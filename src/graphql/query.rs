use super::errors::CodedResultExt;
use super::types::{Client, Order, OrderStateValue, Product, TopClient, TopSeller, User};
use super::{parse_id, seller};
use crate::clients::{CustomerClient, OrderClient, ProductClient, UserClient};
use crate::model::{CustomerId, OrderId, ProductId};
use crate::product_actor::ProductError;
use crate::reports;
use actor_framework::ActorClient;
use async_graphql::{Context, Object, Result, ID};

#[derive(Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// The authenticated seller.
    async fn get_user(&self, ctx: &Context<'_>) -> Result<User> {
        Ok(seller(ctx).await?.into())
    }

    async fn get_products(&self, ctx: &Context<'_>) -> Result<Vec<Product>> {
        let products = ctx.data::<ProductClient>()?.list().await.coded()?;
        Ok(products.into_iter().map(Product::from).collect())
    }

    async fn get_product(&self, ctx: &Context<'_>, id: ID) -> Result<Product> {
        let id: ProductId = parse_id(&id)?;
        ctx.data::<ProductClient>()?
            .get(id)
            .await
            .coded()?
            .map(Product::from)
            .ok_or_else(|| ProductError::NotFound(id.to_string()))
            .coded()
    }

    async fn get_clients(&self, ctx: &Context<'_>) -> Result<Vec<Client>> {
        let customers = ctx.data::<CustomerClient>()?.list().await.coded()?;
        Ok(customers.into_iter().map(Client::from).collect())
    }

    /// Clients of the authenticated seller.
    async fn get_seller_clients(&self, ctx: &Context<'_>) -> Result<Vec<Client>> {
        let seller = seller(ctx).await?;
        let customers = ctx
            .data::<CustomerClient>()?
            .for_seller(seller.id)
            .await
            .coded()?;
        Ok(customers.into_iter().map(Client::from).collect())
    }

    async fn get_client(&self, ctx: &Context<'_>, id: ID) -> Result<Client> {
        let seller = seller(ctx).await?;
        let id: CustomerId = parse_id(&id)?;
        let customer = ctx
            .data::<CustomerClient>()?
            .get_for_seller(seller.id, id)
            .await
            .coded()?;
        Ok(customer.into())
    }

    async fn get_orders(&self, ctx: &Context<'_>) -> Result<Vec<Order>> {
        let orders = ctx.data::<OrderClient>()?.list().await.coded()?;
        Ok(orders.into_iter().map(Order::from).collect())
    }

    async fn get_seller_orders(&self, ctx: &Context<'_>) -> Result<Vec<Order>> {
        let seller = seller(ctx).await?;
        let orders = ctx
            .data::<OrderClient>()?
            .for_seller(seller.id)
            .await
            .coded()?;
        Ok(orders.into_iter().map(Order::from).collect())
    }

    async fn get_order(&self, ctx: &Context<'_>, id: ID) -> Result<Order> {
        let seller = seller(ctx).await?;
        let id: OrderId = parse_id(&id)?;
        let order = ctx
            .data::<OrderClient>()?
            .get_for_seller(seller.id, id)
            .await
            .coded()?;
        Ok(order.into())
    }

    /// Orders of the authenticated seller in `state`.
    async fn get_orders_by_state(
        &self,
        ctx: &Context<'_>,
        state: OrderStateValue,
    ) -> Result<Vec<Order>> {
        let seller = seller(ctx).await?;
        let orders = ctx
            .data::<OrderClient>()?
            .for_seller_in_state(seller.id, state.into())
            .await
            .coded()?;
        Ok(orders.into_iter().map(Order::from).collect())
    }

    /// Clients ranked by the total of their completed orders.
    async fn get_best_clients(&self, ctx: &Context<'_>) -> Result<Vec<TopClient>> {
        let completed = ctx.data::<OrderClient>()?.completed().await.coded()?;
        let customers = ctx.data::<CustomerClient>()?;

        let mut ranking = Vec::new();
        for (id, total) in reports::best_clients(&completed) {
            let client = customers.get(id).await.coded()?;
            ranking.push(TopClient {
                total,
                client: client.into_iter().map(Client::from).collect(),
            });
        }
        Ok(ranking)
    }

    /// Sellers ranked by the total of their completed orders.
    async fn get_best_sellers(&self, ctx: &Context<'_>) -> Result<Vec<TopSeller>> {
        let completed = ctx.data::<OrderClient>()?.completed().await.coded()?;
        let users = ctx.data::<UserClient>()?;

        let mut ranking = Vec::new();
        for (id, total) in reports::best_sellers(&completed) {
            let user = users.get(id).await.coded()?;
            ranking.push(TopSeller {
                total,
                user: user.into_iter().map(User::from).collect(),
            });
        }
        Ok(ranking)
    }

    async fn get_products_by_text(&self, ctx: &Context<'_>, text: String) -> Result<Vec<Product>> {
        let products = ctx.data::<ProductClient>()?.search(&text).await.coded()?;
        Ok(products.into_iter().map(Product::from).collect())
    }
}
