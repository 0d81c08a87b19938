use anyhow::Result;
use guide_core::featured_limit;
use guide_http::{AppState, create_router};
use guide_service::ContentService;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::open_storage;

pub(crate) async fn run(db_path: &Path, host: &str, port: u16, static_dir: PathBuf) -> Result<()> {
    let storage = Arc::new(open_storage(db_path)?);
    storage.seed_if_empty()?;

    if !static_dir.is_dir() {
        tracing::warn!(dir = %static_dir.display(), "static directory not found, assets will 404");
    }

    let content = ContentService::new(storage).with_featured_limit(featured_limit());
    let state = Arc::new(AppState { content: Arc::new(content), static_dir });

    let router = create_router(state);
    let addr = format!("{host}:{port}");
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
