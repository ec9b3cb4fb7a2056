//! docchat server binary
//!
//! Run with: cargo run --bin docchat-server

use docchat::{config::AppConfig, server::AppServer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "docchat=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env();

    tracing::info!("Configuration loaded");
    tracing::info!("  - Chat model: {}", config.model.chat_model);
    tracing::info!("  - Embedding model: {}", config.model.embed_model);
    tracing::info!("  - Chunk size: {}", config.chunking.chunk_size);
    tracing::info!("  - Retrieval top-k: {}", config.retrieval.top_k);
    tracing::info!("  - Session TTL: {}s", config.sessions.idle_ttl_secs);

    let server = AppServer::new(config)?;

    println!("docchat - document Q&A with session-scoped retrieval");
    println!();
    println!("  API:    http://{}", server.address());
    println!("  Health: http://{}/health", server.address());
    println!();
    println!("Endpoints:");
    println!("  POST   /upload       - Upload a PDF or text file");
    println!("  POST   /chat         - Ask a question against a session");
    println!("  GET    /sessions     - List sessions");
    println!("  GET    /session/:id  - Get a session summary");
    println!("  DELETE /session/:id  - Delete a session");
    println!();

    server.start().await?;

    Ok(())
}
