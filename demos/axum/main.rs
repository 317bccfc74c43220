mod admission;
mod error;
mod routes;

use std::net::SocketAddr;

use axum::{
    Router, middleware,
    routing::{get, post},
};
use origin_gate::AppConfig;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(%err, "invalid configuration");
            std::process::exit(1);
        }
    };

    let state = admission::AppState::from_config(&config).expect("configuration already validated");

    let app = Router::new()
        .route("/api/auth/login", post(routes::login))
        .route("/api/auth/profile", get(routes::profile))
        .route("/api/payment/checkout", post(routes::checkout))
        .route("/api/shipping/quote", get(routes::quote))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            admission::admission_middleware,
        ))
        .with_state(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!(%addr, "server listening");

    axum::serve(
        tokio::net::TcpListener::bind(addr)
            .await
            .expect("bind server port"),
        app,
    )
    .await
    .expect("server loop");
}
