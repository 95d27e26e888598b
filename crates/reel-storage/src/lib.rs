//! Durable media storage and the upload coordinator.
//!
//! Local media files are uploaded to Cloudflare R2 (S3 API) and resolved
//! to publicly retrievable URLs before composition. The coordinator is
//! all-or-nothing: one failed upload aborts the whole resolution.

pub mod client;
pub mod coordinator;
pub mod error;

pub use client::{R2Client, R2Config};
pub use coordinator::{MediaUploader, UploadCoordinator};
pub use error::{StorageError, StorageResult};
