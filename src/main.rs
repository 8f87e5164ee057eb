use api_rest::{AppState, cors_layer, router};
use tokio::net::TcpListener;
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tutorials_core::{CoreConfig, TutorialService, database_url_from_env_value};

/// Main entry point for the tutorials service
///
/// Opens the tutorial store once, serves the REST API until Ctrl+C or SIGTERM, then drains
/// in-flight requests before exiting.
///
/// # Environment Variables
/// - `MONGODB_URL`: Backing store connection string (default:
///   "mongodb://localhost:27017/tutorials_db"; `memory://` selects the in-memory store)
/// - `TUTORIALS_REST_ADDR`: REST server address (default: "0.0.0.0:8080")
/// - `TUTORIALS_CORS_ORIGIN`: Single allowed browser origin (default: any origin)
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the configuration is invalid or the store cannot be reached,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("tutorials_run=info".parse()?)
                .add_directive("tutorials_core=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cfg = CoreConfig::new(database_url_from_env_value(
        std::env::var("MONGODB_URL").ok(),
    ))?;
    let addr = std::env::var("TUTORIALS_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".into());
    let cors_origin = std::env::var("TUTORIALS_CORS_ORIGIN").ok();

    let store = match tutorials_core::connect(&cfg).await {
        Ok(store) => store,
        Err(e) => {
            tracing::error!("Cannot connect to the database: {:?}", e);
            return Err(e.into());
        }
    };

    let state = AppState::new(TutorialService::new(store));
    let app = router(state, cors_layer(cors_origin.as_deref())?);

    tracing::info!("++ Starting tutorials REST on {}", addr);
    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => tracing::info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                tracing::error!("Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
                tracing::info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
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
}
