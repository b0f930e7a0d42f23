use crate::{create_router, AppState};
use sqlmorph_core::{Result, Settings};
use tokio::signal;
use tracing::info;

pub struct Server {
    state: AppState,
    host: String,
    port: u16,
}

impl Server {
    pub fn new(settings: &Settings) -> Result<Self> {
        let state = AppState::new(settings)?;
        Ok(Self {
            state,
            host: settings.server.host.clone(),
            port: settings.server.port,
        })
    }

    pub async fn run(self) -> Result<()> {
        let router = create_router(self.state);

        let listener = tokio::net::TcpListener::bind((self.host.as_str(), self.port)).await?;
        let addr = listener.local_addr()?;

        info!("SqlMorph API server listening on http://{}", addr);
        info!("API documentation:");
        info!("  POST /convert - Convert SQL between databases");
        info!("  POST /optimize - Optimize SQL for a specific database");
        info!("  GET /examples/{{dialect}} - Sample routines for a dialect");
        info!("  GET /health - Health check");

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down gracefully");
        },
        _ = terminate => {
            info!("Received SIGTERM, shutting down gracefully");
        },
    }
}
