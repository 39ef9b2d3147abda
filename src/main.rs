use candidate_tracker::{
    config::{get_config, init_config},
    database::medium::create_medium,
    middleware::cors::cors_layer,
    routes,
    services::candidate_service::CandidateService,
    AppState,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    init_config()?;
    let config = get_config();

    let medium = create_medium()?;
    let candidate_service = CandidateService::with_latency(medium, config.simulated_latency);
    info!(
        "Candidate store ready, simulated latency {} ms",
        config.simulated_latency.as_millis()
    );

    let app_state = AppState::new(candidate_service.clone());
    let app = routes::api_router()
        .with_state(app_state)
        .layer(cors_layer(&config.cors_origins))
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutting down, flushing candidate store");
    candidate_service.flush().await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {:?}", e);
        std::future::pending::<()>().await;
    }
}
