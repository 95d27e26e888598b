//! Upload coordinator: local files to durable URLs, order-preserving and
//! all-or-nothing.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use futures::future::join_all;
use tracing::{debug, info};

use crate::client::R2Client;
use crate::error::{StorageError, StorageResult};

/// Seam over the storage backend so the coordinator (and the pipeline
/// above it) can be exercised against a fake uploader in tests.
#[async_trait]
pub trait MediaUploader: Send + Sync {
    /// Upload one file and return its durable public URL.
    async fn upload(&self, path: &Path, key: &str, content_type: &str) -> StorageResult<String>;
}

#[async_trait]
impl MediaUploader for R2Client {
    async fn upload(&self, path: &Path, key: &str, content_type: &str) -> StorageResult<String> {
        self.upload_file(path, key, content_type).await
    }
}

/// Resolves an ordered list of local media files to durable URLs.
///
/// All uploads are issued concurrently; the result vector is aligned to
/// the input index order, never to completion order. If any single upload
/// fails, the whole resolution fails with the failing input's index and
/// every partial result is discarded.
pub struct UploadCoordinator<U> {
    uploader: U,
    key_prefix: String,
}

impl<U: MediaUploader> UploadCoordinator<U> {
    /// Create a coordinator that stores objects under `key_prefix`.
    pub fn new(uploader: U, key_prefix: impl Into<String>) -> Self {
        Self {
            uploader,
            key_prefix: key_prefix.into().trim_matches('/').to_string(),
        }
    }

    /// Upload every file and return their durable URLs in input order.
    pub async fn resolve(&self, files: &[PathBuf]) -> StorageResult<Vec<String>> {
        debug!("Resolving {} media file(s) to durable URLs", files.len());

        let uploads = files.iter().enumerate().map(|(index, path)| {
            let key = self.object_key(index, path);
            let content_type = content_type_for(path);
            async move {
                let key = key.map_err(|e| StorageError::upload_failed(index, e.to_string()))?;
                self.uploader
                    .upload(path, &key, content_type)
                    .await
                    .map_err(|e| StorageError::upload_failed(index, e.to_string()))
            }
        });

        // join_all keeps input order regardless of completion order
        let urls = join_all(uploads)
            .await
            .into_iter()
            .collect::<StorageResult<Vec<String>>>()?;

        info!("Resolved {} media file(s)", urls.len());
        Ok(urls)
    }

    fn object_key(&self, index: usize, path: &Path) -> StorageResult<String> {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| StorageError::InvalidKey(path.display().to_string()))?;
        Ok(format!("{}/{:03}-{}", self.key_prefix, index, file_name))
    }
}

/// Content type from the file extension; the storage side serves it as-is.
pub fn content_type_for(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("mp4") => "video/mp4",
        Some("mov") => "video/quicktime",
        Some("webm") => "video/webm",
        _ => "application/octet-stream",
    }
}
