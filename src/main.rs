//! Idea board server binary.
//!
//! Configuration comes from the environment:
//! - `ATLAS_ADDR` — bind address, default `0.0.0.0:3000`
//! - `ATLAS_LAYOUT` — storage layout, `per-record` (default) or `blob`

use std::sync::Arc;

use atlas_board::{http, IdeaRepository, InMemoryRecordStore, Layout};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let addr = std::env::var("ATLAS_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let layout = match std::env::var("ATLAS_LAYOUT") {
        Ok(value) => value.parse::<Layout>()?,
        Err(_) => Layout::PerRecord,
    };

    // In-memory backend; durable deployments wire their own RecordStore.
    let repo = Arc::new(IdeaRepository::new(InMemoryRecordStore::new(), layout));

    tracing::info!("serving idea board on {} ({:?} layout)", addr, layout);
    http::serve(repo, &addr).await?;
    Ok(())
}
