// Extraction service seam used by the session state machine

use async_trait::async_trait;

use super::errors::BackendError;
use super::models::{DownloadResult, ServerStatus, VideoMetadata};

/// Request/response surface of the remote extraction service.
///
/// Implementations serialize requests and normalize failures into
/// [`BackendError`]; none of the session control flow lives here. Each
/// method is a single round trip with no retries.
#[async_trait]
pub trait ExtractorApi: Send + Sync {
    /// Informational status probe; a failure never blocks or alters any
    /// other operation
    async fn fetch_server_status(&self) -> Result<ServerStatus, BackendError>;

    /// Turn a source URL into a title, thumbnail, and list of renditions
    async fn fetch_metadata(&self, url: &str) -> Result<VideoMetadata, BackendError>;

    /// Turn (source URL, quality) into a concrete one-shot download link
    async fn resolve_download(
        &self,
        url: &str,
        quality: &str,
    ) -> Result<DownloadResult, BackendError>;
}
