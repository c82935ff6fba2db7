// src/main.rs

use trivia_api::config::Config;
use trivia_api::db::{self, Backend};
use trivia_api::routes;
use trivia_api::state::AppState;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration from environment (and .env, if present)
    let config = Config::from_env();

    let env_filter = EnvFilter::new(&config.rust_log);
    let stdout_layer = fmt::layer().with_writer(std::io::stdout).with_target(false);

    // File logging is optional; the guard must outlive the server.
    let (file_layer, _guard) = match &config.log_dir {
        Some(dir) => {
            let file_appender = tracing_appender::rolling::daily(dir, "trivia.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = fmt::layer().with_writer(non_blocking).with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    // Initialize Tracing (Logging)
    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .init();

    let backend = Backend::from_url(&config.database_url)
        .ok_or("DATABASE_URL must start with postgres://, postgresql:// or sqlite:")?;

    // Initialize Database Pool with Retry
    let pool = db::connect(&config.database_url, config.max_connections).await?;
    tracing::info!("Database connected ({:?})...", backend);

    // Run Migrations Automatically
    tracing::info!("Running migrations...");
    db::migrate(&pool, backend).await?;
    tracing::info!("Migrations applied successfully.");

    if config.seed_categories {
        match db::categories::seed_defaults(&pool).await {
            Ok(0) => {}
            Ok(n) => tracing::info!("Seeded {} default categories.", n),
            Err(e) => tracing::error!("Failed to seed categories: {:?}", e),
        }
    }

    let addr = config.bind_addr;
    let state = AppState { pool, backend };

    // Create the Axum application router
    let app = routes::create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Trivia API listening on {}", addr);

    // Start the server
    axum::serve(listener, app).await?;

    Ok(())
}
