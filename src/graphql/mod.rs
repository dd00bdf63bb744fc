//! # GraphQL API
//!
//! The schema exposes the service's queries and mutations over the resource clients.
//! Clients and the [`TokenService`] are schema data; the authenticated [`Seller`], when
//! there is one, is request data added by the HTTP handler.
//!
//! Seller-scoped operations call [`seller`] first. Without a token they fail with
//! `UNAUTHENTICATED` before any actor is contacted; with one, the token's id and email
//! must still name the same registered user. Ids restart with the process, so a token
//! issued before a restart could otherwise act as whoever now holds its id.

pub mod errors;
pub mod mutation;
pub mod query;
pub mod types;

pub use mutation::MutationRoot;
pub use query::QueryRoot;

use crate::auth::{AuthError, Seller, TokenService};
use crate::clients::UserClient;
use crate::lifecycle::OrderSystem;
use crate::model::{ParseIdError, User};
use actor_framework::ActorClient;
use async_graphql::{Context, EmptySubscription, ErrorExtensions, Schema, ID};
use errors::CodedResultExt;
use std::str::FromStr;
use tracing::warn;

pub type SalesSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Builds the schema with clones of the system's clients.
pub fn build_schema(system: &OrderSystem, tokens: TokenService) -> SalesSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(system.user_client.clone())
        .data(system.product_client.clone())
        .data(system.customer_client.clone())
        .data(system.order_client.clone())
        .data(tokens)
        .finish()
}

/// The registered user the request acts on behalf of.
pub(crate) async fn seller(ctx: &Context<'_>) -> async_graphql::Result<User> {
    let claimed = ctx
        .data_opt::<Seller>()
        .ok_or_else(|| AuthError::Unauthenticated.extend())?;
    match ctx.data::<UserClient>()?.get(claimed.id).await.coded()? {
        Some(user) if user.email.eq_ignore_ascii_case(&claimed.email) => Ok(user),
        _ => {
            warn!(seller = %claimed.id, email = %claimed.email, "Token does not match a registered user");
            Err(AuthError::UnknownSeller(claimed.id.to_string()).extend())
        }
    }
}

pub(crate) fn parse_id<I>(id: &ID) -> async_graphql::Result<I>
where
    I: FromStr<Err = ParseIdError>,
{
    id.parse::<I>().coded()
}
