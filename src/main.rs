//! Taskboard HTTP server.
//!
//! Reads configuration from the environment (and `.env` when present),
//! connects to `PostgreSQL` with bounded retry, runs pending migrations, and serves
//! the JSON API until SIGINT or SIGTERM.

use std::net::SocketAddr;
use std::sync::Arc;
use taskboard::{
    config::AppConfig,
    http::{AppState, router},
    task::adapters::postgres::{
        PostgresGroupRepository, PostgresTaskRepository, RetryPolicy, connect_with_retry,
        run_migrations,
    },
};
use tokio::net::TcpListener;
use tokio::sync::Notify;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

const DEFAULT_LOG_FILTER: &str = "taskboard=info,tower_http=info";

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let dotenv = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();
    match dotenv {
        Ok(path) => info!(path = %path.display(), "loaded environment file"),
        Err(err) => debug!(error = %err, "no environment file loaded"),
    }

    let config = AppConfig::from_env()?;
    info!(
        server_port = config.server_port,
        database = ?config.database,
        pool_size = config.pool_size,
        "starting taskboard"
    );

    let policy = RetryPolicy {
        attempts: config.connect_attempts,
        backoff: config.connect_backoff,
    };
    let pool = connect_with_retry(&config.database_url(), config.pool_size, policy).await?;
    let applied = run_migrations(&pool).await?;
    info!(applied, "database migrations up to date");

    let state = AppState::new(
        Arc::new(PostgresTaskRepository::new(pool.clone())),
        Arc::new(PostgresGroupRepository::new(pool)),
    );
    let app = router(state).layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "listening");

    let shutdown = Arc::new(Notify::new());
    let trigger = Arc::clone(&shutdown);
    let mut server = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async move { trigger.notified().await })
            .await
    });

    tokio::select! {
        result = &mut server => {
            result??;
            return Ok(());
        }
        () = shutdown_signal() => {}
    }

    info!(grace_secs = config.shutdown_grace.as_secs(), "shutdown requested, draining requests");
    shutdown.notify_one();
    if let Ok(result) = tokio::time::timeout(config.shutdown_grace, &mut server).await {
        result??;
    } else {
        warn!("grace period elapsed, dropping in-flight requests");
        server.abort();
    }

    info!("taskboard stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                warn!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
}
