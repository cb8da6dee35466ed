use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;

use edudbt::EduStore;
use edudbt::config::Config;
use edudbt::router::{AppState, edu_router};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = Config::load()?;
    edudbt::logging::init_tracing(&cfg.basic.loglevel);

    info!(
        database_url = %cfg.store.database_url,
        listen_addr = %cfg.basic.listen_addr,
        loglevel = %cfg.basic.loglevel,
        max_connections = cfg.store.max_connections
    );

    let store = EduStore::connect(&cfg.store).await?;

    let app = edu_router(AppState::new(store.clone()));
    let listener = TcpListener::bind(&cfg.basic.listen_addr).await?;
    info!("HTTP server listening on {}", cfg.basic.listen_addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.close().await;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("shutdown signal received");
}
