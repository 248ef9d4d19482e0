//! Server binary: opens the database named by `DATABASE_URL`, creates missing
//! tables, optionally applies a seed file given as the first argument, and serves.

use movies_api::{apply_seed, build_router, connect, ensure_tables, load_seed, AppState, ServerConfig};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("movies_api=info,tower_http=info")),
        )
        .init();

    let pool = connect(&config.database_url, config.max_connections).await?;
    ensure_tables(&pool).await?;

    if let Some(seed_path) = std::env::args().nth(1) {
        let seed = load_seed(&seed_path).await?;
        apply_seed(&pool, &seed).await?;
    }

    let app = build_router(AppState { pool });
    let listener = TcpListener::bind(&config.listen_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
