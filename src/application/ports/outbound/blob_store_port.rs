//! Blob store port - binary asset storage behind a narrow interface
//!
//! The concrete driver (cloud bucket, local disk, ...) lives in the host
//! process; this crate only writes assets and resolves download URLs.

use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
pub enum BlobError {
    #[error("blob write failed: {0}")]
    WriteFailed(String),
    #[error("download URL resolution failed: {0}")]
    UrlResolution(String),
}

/// Port for binary asset storage.
#[async_trait]
pub trait BlobStorePort: Send + Sync {
    /// Write `bytes` under `bucket`/`path` with the given content type and
    /// return a download URL for the new object.
    async fn write(
        &self,
        bucket: &str,
        path: &str,
        bytes: &[u8],
        content_type: &str,
    ) -> Result<String, BlobError>;

    /// Resolve an existing object path to a download URL.
    async fn get_download_url(&self, bucket: &str, path: &str) -> Result<String, BlobError>;
}
