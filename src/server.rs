//! # HTTP Surface
//!
//! | Route | |
//! |-------|---|
//! | `POST /graphql` | GraphQL over HTTP (JSON) |
//! | `GET /graphql` | GraphQL playground |
//! | `GET /health` | `ok` |
//!
//! [`build_router`] returns the bare router; `main` attaches the tracing layer.

use crate::auth::{bearer_token, TokenService};
use crate::graphql::SalesSchema;
use async_graphql::http::{playground_source, GraphQLPlaygroundConfig};
use axum::{
    extract::State,
    http::{header::AUTHORIZATION, HeaderMap},
    response::{Html, IntoResponse},
    routing::get,
    Json, Router,
};
use tracing::{debug, warn};

#[derive(Clone)]
pub struct AppState {
    pub schema: SalesSchema,
    pub tokens: TokenService,
}

pub fn build_router(schema: SalesSchema, tokens: TokenService) -> Router {
    Router::new()
        .route("/graphql", get(playground).post(graphql_handler))
        .route("/health", get(health))
        .with_state(AppState { schema, tokens })
}

/// Executes a GraphQL request, on behalf of the token's seller when a valid token is
/// present. Invalid tokens are logged and the request runs unauthenticated.
pub(crate) async fn graphql_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(mut request): Json<async_graphql::Request>,
) -> Json<async_graphql::Response> {
    let token = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(bearer_token);
    if let Some(token) = token {
        match state.tokens.verify(token) {
            Ok(seller) => {
                debug!(seller = %seller.id, "Authenticated request");
                request = request.data(seller);
            }
            Err(e) => warn!(error = %e, "Ignoring invalid token"),
        }
    }

    Json(state.schema.execute(request).await)
}

pub(crate) async fn playground() -> impl IntoResponse {
    Html(playground_source(GraphQLPlaygroundConfig::new("/graphql")))
}

pub(crate) async fn health() -> &'static str {
    "ok"
}
