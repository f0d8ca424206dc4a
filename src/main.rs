//! Vehicle routing solver service — axum entry point.

use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use vrp_engine::config::Config;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("vrp_engine=info".parse().unwrap()))
        .init();

    let config = Config::from_env();
    vrp_engine::console::print_banner(&config);

    let app = vrp_engine::api::create_router();
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .unwrap_or_else(|err| panic!("failed to bind {addr}: {err}"));
    axum::serve(listener, app)
        .await
        .unwrap_or_else(|err| panic!("server error: {err}"));
}
