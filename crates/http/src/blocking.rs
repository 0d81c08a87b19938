//! Helper for running synchronous storage reads from async handlers.

use guide_service::ServiceError;
use tokio::task::spawn_blocking;

use crate::page_error::PageError;

/// Runs a blocking closure and maps both join and service errors to [`PageError`].
///
/// # Example
/// ```ignore
/// let content = Arc::clone(&state.content);
/// let page = blocking_page(move || content.home()).await?;
/// ```
pub async fn blocking_page<T, F>(f: F) -> Result<T, PageError>
where
    F: FnOnce() -> Result<T, ServiceError> + Send + 'static,
    T: Send + 'static,
{
    spawn_blocking(f)
        .await
        .map_err(|e| {
            tracing::error!("Join error: {}", e);
            PageError::Internal(anyhow::anyhow!("blocking task failed: {e}"))
        })?
        .map_err(PageError::from)
}
