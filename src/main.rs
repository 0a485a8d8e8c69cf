use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use piclumen_relay::{api, config, UpstreamClient};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    config::Config::dotenv_load();
    let config = config::Config::new().expect("Failed to load configuration");
    config::Config::log_env_vars();

    let upstream = UpstreamClient::with_timeout(config.upstream_url.clone(), config.upstream_timeout);
    let state = Arc::new(api::routes::AppState { upstream });
    let app = api::routes::router(state);

    // Run our application with safe parsing
    let host_str = config.api_host.clone();
    let port_str = config.api_port.clone();
    let ip: std::net::IpAddr = host_str.parse().unwrap_or_else(|_| {
        tracing::warn!("Invalid API_HOST '{}', falling back to 127.0.0.1", host_str);
        std::net::IpAddr::from([127, 0, 0, 1])
    });
    let port: u16 = port_str.parse().unwrap_or_else(|_| {
        tracing::warn!("Invalid API_PORT '{}', falling back to 8000", port_str);
        8000
    });
    let socket_address = SocketAddr::new(ip, port);
    tracing::info!("listening on {}, relaying to {}", socket_address, config.upstream_url);
    axum::Server::bind(&socket_address)
        .serve(app.into_make_service())
        .await
        .expect("server error");
}
