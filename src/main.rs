use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use wishlist_buddy::{
    api::{AppState, build_router},
    config::{app::load_app_configuration, database},
    errors::Result,
};

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file, env vars can also be set externally
    dotenv().ok();

    // 3. Load the application configuration (fails without both role secrets)
    let config = load_app_configuration()
        .inspect_err(|e| error!("Critical error loading application configuration: {e}"))?;

    // 4. Open the database and make sure the schema exists
    let db = database::create_connection(&config.database_url).await?;
    database::create_tables(&db)
        .await
        .inspect(|_| info!("Database schema ready"))
        .inspect_err(|e| error!("Failed to create tables: {e}"))?;

    // 5. Serve the API
    let app = build_router(AppState::new(db, &config), &config)?;
    let listener = TcpListener::bind(&config.bind_address)
        .await
        .inspect_err(|e| error!("Failed to bind {}: {e}", config.bind_address))?;
    info!("Server running on {}", config.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
