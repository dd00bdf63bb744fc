//! Service entry point: load configuration, start the actors, serve GraphQL.

use anyhow::Context;
use sales_orders::auth::TokenService;
use sales_orders::config::Config;
use sales_orders::graphql::build_schema;
use sales_orders::lifecycle::{setup_tracing, OrderSystem};
use sales_orders::server::build_router;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{info, Level};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Silent if the file does not exist.
    let _ = dotenvy::from_filename("var.env");

    setup_tracing();

    let config = Config::from_env().context("invalid configuration")?;

    let system = OrderSystem::with_buffer(config.actor_buffer);
    let tokens = TokenService::new(&config.secret, config.token_ttl);
    let schema = build_schema(&system, tokens.clone());

    let app = build_router(schema, tokens).layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_response(DefaultOnResponse::new().level(Level::INFO)),
    );

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;
    info!("sales-orders listening on http://{}/graphql", config.addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server crashed")?;

    // The router, and with it the schema's clients, is gone once serve returns.
    system.shutdown().await.context("actor shutdown failed")?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    info!("Shutdown requested");
}
