use std::sync::Arc;

use clap::Parser;

use crate::{application::http::server::http_server, args::Args};

mod application;
mod args;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args = Arc::new(Args::parse());

    let state = http_server::state(args.clone());
    let router = http_server::router(state)?;

    let addr = format!("{}:{}", args.server.host, args.server.port);
    tracing::info!("Foodlytic API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
