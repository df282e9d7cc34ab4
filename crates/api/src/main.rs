use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use skillswap_api::config::ServerConfig;
use skillswap_api::router::build_app_router;
use skillswap_api::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("skillswap_api=debug,tower_http=debug"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = config.port, "Configuration loaded");

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL is required");
    let pool = skillswap_db::create_pool(&database_url)
        .await
        .expect("Postgres connection failed");
    skillswap_db::health_check(&pool)
        .await
        .expect("Postgres ping failed");
    skillswap_db::run_migrations(&pool)
        .await
        .expect("Migration run failed");
    tracing::info!("Database ready");

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    let app = build_app_router(state, &config);

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port))
        .await
        .expect("Could not bind listen address");
    let addr = listener.local_addr().expect("Listener has no local address");
    tracing::info!(%addr, "SkillSwap API listening");

    // The drain deadline starts counting when the shutdown signal fires,
    // not at server start.
    let drain_secs = config.shutdown_timeout_secs;
    let (drain_tx, drain_rx) = tokio::sync::oneshot::channel::<()>();

    let server = async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                shutdown_signal().await;
                let _ = drain_tx.send(());
            })
            .await
    };
    let drain_deadline = async move {
        let _ = drain_rx.await;
        tokio::time::sleep(Duration::from_secs(drain_secs)).await;
    };

    tokio::select! {
        result = server => {
            result.expect("Server error");
            tracing::info!("In-flight requests drained, shutting down");
        }
        () = drain_deadline => {
            tracing::warn!(drain_secs, "Drain deadline exceeded, aborting remaining connections");
        }
    }
}

/// Resolve when the process receives SIGINT or, on Unix, SIGTERM.
async fn shutdown_signal() {
    #[cfg(unix)]
    let sigterm = async {
        use tokio::signal::unix::{signal, SignalKind};
        signal(SignalKind::terminate())
            .expect("SIGTERM handler installation failed")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let sigterm = std::future::pending::<()>();

    tokio::select! {
        result = tokio::signal::ctrl_c() => {
            result.expect("SIGINT handler installation failed");
            tracing::info!("SIGINT received, draining");
        }
        () = sigterm => {
            tracing::info!("SIGTERM received, draining");
        }
    }
}
