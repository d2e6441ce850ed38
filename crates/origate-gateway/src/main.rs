//! origate gateway binary.
//!
//! Startup order:
//! - tracing (fmt + EnvFilter)
//! - optional YAML config (`ORIGATE_CONFIG`), defaults otherwise
//! - environment origin sources -> allow-list compile (once)
//! - bind and serve

use std::net::SocketAddr;
use tracing_subscriber::{fmt, EnvFilter};

use origate_gateway::{app_state, config, router};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cfg = match std::env::var("ORIGATE_CONFIG") {
        Ok(path) => config::load_from_file(&path).expect("config load failed"),
        Err(_) => config::GatewayConfig::default(),
    };
    let listen: SocketAddr = cfg
        .gateway
        .listen
        .parse()
        .expect("gateway.listen must be a valid SocketAddr");

    let state = app_state::AppState::new(cfg, config::OriginSources::from_env())
        .expect("state build failed");
    let app = router::build_router(state);

    tracing::info!(%listen, "origate-gateway starting");
    let listener = tokio::net::TcpListener::bind(listen).await.expect("failed to bind");

    axum::serve(listener, app).await.expect("server failed");
}
