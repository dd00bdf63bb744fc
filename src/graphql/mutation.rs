use super::errors::CodedResultExt;
use super::types::{
    AuthInput, Client, ClientInput, Order, OrderInput, Product, ProductInput, Token, User,
    UserInput,
};
use super::{parse_id, seller};
use crate::auth::TokenService;
use crate::clients::{CustomerClient, OrderClient, ProductClient, UserClient};
use crate::model::{
    CustomerCreate, CustomerId, CustomerUpdate, OrderCreate, OrderId, OrderUpdate, ProductCreate,
    ProductId, ProductUpdate,
};
use actor_framework::ActorClient;
use async_graphql::{Context, Object, Result, ID};

#[derive(Default)]
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Registers a seller.
    async fn new_user(&self, ctx: &Context<'_>, input: UserInput) -> Result<User> {
        let user = ctx
            .data::<UserClient>()?
            .register(&input.name, &input.surname, &input.email, &input.password)
            .await
            .coded()?;
        Ok(user.into())
    }

    /// Exchanges email and password for a signed token.
    async fn auth_user(&self, ctx: &Context<'_>, input: AuthInput) -> Result<Token> {
        let user = ctx
            .data::<UserClient>()?
            .authenticate(&input.email, &input.password)
            .await
            .coded()?;
        let token = ctx.data::<TokenService>()?.issue(&user).coded()?;
        Ok(Token { token })
    }

    async fn new_product(&self, ctx: &Context<'_>, input: ProductInput) -> Result<Product> {
        let product = ctx
            .data::<ProductClient>()?
            .create(ProductCreate {
                name: input.name,
                stock: input.exists,
                price: input.price,
            })
            .await
            .coded()?;
        Ok(product.into())
    }

    async fn update_product(
        &self,
        ctx: &Context<'_>,
        id: ID,
        input: ProductInput,
    ) -> Result<Product> {
        let id: ProductId = parse_id(&id)?;
        let product = ctx
            .data::<ProductClient>()?
            .update(
                id,
                ProductUpdate {
                    name: input.name,
                    stock: input.exists,
                    price: input.price,
                },
            )
            .await
            .coded()?;
        Ok(product.into())
    }

    async fn delete_product(&self, ctx: &Context<'_>, id: ID) -> Result<String> {
        let id: ProductId = parse_id(&id)?;
        ctx.data::<ProductClient>()?.delete(id).await.coded()?;
        Ok("Product deleted".to_string())
    }

    /// Creates a client owned by the authenticated seller.
    async fn new_client(&self, ctx: &Context<'_>, input: ClientInput) -> Result<Client> {
        let seller = seller(ctx).await?;
        let customer = ctx
            .data::<CustomerClient>()?
            .create(CustomerCreate {
                name: input.name,
                surname: input.surname,
                email: input.email,
                company: input.company,
                phone: input.phone,
                seller: seller.id,
            })
            .await
            .coded()?;
        Ok(customer.into())
    }

    async fn update_client(&self, ctx: &Context<'_>, id: ID, input: ClientInput) -> Result<Client> {
        let seller = seller(ctx).await?;
        let id: CustomerId = parse_id(&id)?;
        let customer = ctx
            .data::<CustomerClient>()?
            .update(
                id,
                CustomerUpdate {
                    actor: seller.id,
                    name: input.name,
                    surname: input.surname,
                    email: input.email,
                    company: input.company,
                    phone: input.phone,
                },
            )
            .await
            .coded()?;
        Ok(customer.into())
    }

    async fn delete_client(&self, ctx: &Context<'_>, id: ID) -> Result<String> {
        let seller = seller(ctx).await?;
        let id: CustomerId = parse_id(&id)?;
        let customer = ctx
            .data::<CustomerClient>()?
            .delete_for_seller(seller.id, id)
            .await
            .coded()?;
        Ok(format!("Client '{}' deleted", customer.name))
    }

    /// Places an order for one of the seller's clients, taking stock for every line.
    async fn new_order(&self, ctx: &Context<'_>, input: OrderInput) -> Result<Order> {
        let seller = seller(ctx).await?;
        let client: CustomerId = parse_id(&input.client)?;
        let lines = input.lines().coded()?.unwrap_or_default();
        let order = ctx
            .data::<OrderClient>()?
            .place_order(OrderCreate {
                actor: seller.id,
                client,
                lines,
                total: input.total,
                state: input.state(),
            })
            .await
            .coded()?;
        Ok(order.into())
    }

    /// Replaces an order's client, state and, when given, its lines.
    async fn update_order(&self, ctx: &Context<'_>, id: ID, input: OrderInput) -> Result<Order> {
        let seller = seller(ctx).await?;
        let id: OrderId = parse_id(&id)?;
        let client: CustomerId = parse_id(&input.client)?;
        let order = ctx
            .data::<OrderClient>()?
            .update_order(
                id,
                OrderUpdate {
                    actor: seller.id,
                    client,
                    lines: input.lines().coded()?,
                    total: input.total,
                    state: input.state(),
                },
            )
            .await
            .coded()?;
        Ok(order.into())
    }

    async fn delete_order(&self, ctx: &Context<'_>, id: ID) -> Result<String> {
        let seller = seller(ctx).await?;
        let id: OrderId = parse_id(&id)?;
        ctx.data::<OrderClient>()?
            .delete_order(seller.id, id)
            .await
            .coded()?;
        Ok("Order deleted".to_string())
    }
}
