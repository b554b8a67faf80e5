//! Course asset uploads.
//!
//! [`AssetUploader`] tries the configured S3-compatible bucket first and
//! falls back to a local directory. Callers get `None` only when both fail,
//! and treat that as "no asset".

pub mod local;
pub mod s3;
pub mod sigv4;

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn};

pub use local::LocalAssetStore;
pub use s3::{S3AssetStore, S3Settings};

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("Object storage is not configured: missing {0}")]
    NotConfigured(String),

    #[error("Invalid object storage endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("Invalid object key '{0}'")]
    InvalidKey(String),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Object storage responded with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Local write to {path} failed: {source}")]
    Local {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl UploadError {
    pub fn local(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        UploadError::Local {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

/// A place blobs can be written to under a key
#[async_trait]
pub trait AssetStore: Send + Sync {
    /// Store `bytes` under `key` and return the URL or path it can be read from
    async fn put(&self, key: &str, bytes: &[u8]) -> Result<String, UploadError>;

    fn is_remote(&self) -> bool;
}

/// Where an uploaded asset ended up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredAsset {
    pub location: String,
    pub remote: bool,
}

/// Remote-first uploader with local fallback
#[derive(Clone)]
pub struct AssetUploader {
    remote: Option<Arc<dyn AssetStore>>,
    fallback: Arc<dyn AssetStore>,
}

impl AssetUploader {
    pub fn new(remote: Option<Arc<dyn AssetStore>>, fallback: Arc<dyn AssetStore>) -> Self {
        Self { remote, fallback }
    }

    /// Build an uploader from optional bucket settings.
    ///
    /// Invalid settings are logged and leave the uploader local-only.
    pub fn from_settings(settings: Option<S3Settings>, fallback_dir: &Path, timeout: Duration) -> Self {
        let fallback: Arc<dyn AssetStore> = Arc::new(LocalAssetStore::new(fallback_dir));

        let remote = match settings {
            Some(settings) => match S3AssetStore::new(settings, timeout) {
                Ok(store) => Some(Arc::new(store) as Arc<dyn AssetStore>),
                Err(e) => {
                    warn!("Object storage disabled: {}", e);
                    None
                }
            },
            None => {
                info!(
                    "Object storage not configured, assets go to {}",
                    fallback_dir.display()
                );
                None
            }
        };

        Self::new(remote, fallback)
    }

    pub fn has_remote(&self) -> bool {
        self.remote.is_some()
    }

    /// Store a blob, remote first, and report where it went
    pub async fn store(&self, blob: &[u8], key: &str) -> Option<StoredAsset> {
        if let Some(remote) = &self.remote {
            match remote.put(key, blob).await {
                Ok(location) => {
                    return Some(StoredAsset {
                        location,
                        remote: remote.is_remote(),
                    })
                }
                Err(e) => warn!("Upload of {} failed, falling back to local disk: {}", key, e),
            }
        }

        match self.fallback.put(key, blob).await {
            Ok(location) => Some(StoredAsset {
                location,
                remote: self.fallback.is_remote(),
            }),
            Err(e) => {
                warn!("Could not store {} anywhere: {}", key, e);
                None
            }
        }
    }

    /// Upload a blob and return its URL, or the local path it fell back to
    pub async fn upload(&self, blob: &[u8], key: &str) -> Option<String> {
        self.store(blob, key).await.map(|stored| stored.location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    struct FailingStore;

    #[async_trait]
    impl AssetStore for FailingStore {
        async fn put(&self, key: &str, _bytes: &[u8]) -> Result<String, UploadError> {
            Err(UploadError::InvalidKey(key.to_string()))
        }

        fn is_remote(&self) -> bool {
            true
        }
    }

    struct RecordingStore;

    #[async_trait]
    impl AssetStore for RecordingStore {
        async fn put(&self, key: &str, _bytes: &[u8]) -> Result<String, UploadError> {
            Ok(format!("https://cdn.example.com/bucket/{}", key))
        }

        fn is_remote(&self) -> bool {
            true
        }
    }

    fn unreachable_settings() -> S3Settings {
        S3Settings {
            // Port 9 (discard) is closed on test machines
            endpoint: "http://127.0.0.1:9".to_string(),
            bucket: "assets".to_string(),
            access_key_id: "key".to_string(),
            secret_access_key: "secret".to_string(),
            region: "us-east-1".to_string(),
        }
    }

    #[tokio::test]
    async fn test_unreachable_remote_falls_back_to_local() {
        let temp_dir = TempDir::new().unwrap();
        let uploader = AssetUploader::from_settings(
            Some(unreachable_settings()),
            temp_dir.path(),
            Duration::from_secs(2),
        );
        assert!(uploader.has_remote());

        let location = uploader.upload(b"%PDF-1.4 test", "pdfs/lesson one.pdf").await.unwrap();

        let path = PathBuf::from(&location);
        assert_eq!(path.file_name().unwrap(), "lesson one.pdf");
        assert_eq!(fs::read(&path).unwrap(), b"%PDF-1.4 test");
    }

    #[tokio::test]
    async fn test_missing_configuration_goes_straight_to_local() {
        let temp_dir = TempDir::new().unwrap();
        let uploader = AssetUploader::from_settings(None, temp_dir.path(), Duration::from_secs(2));
        assert!(!uploader.has_remote());

        let stored = uploader.store(b"img", "thumbnails/a.png").await.unwrap();

        assert!(!stored.remote);
        assert_eq!(fs::read(&stored.location).unwrap(), b"img");
    }

    #[tokio::test]
    async fn test_remote_success_returns_url() {
        let temp_dir = TempDir::new().unwrap();
        let uploader = AssetUploader::new(
            Some(Arc::new(RecordingStore)),
            Arc::new(LocalAssetStore::new(temp_dir.path())),
        );

        let stored = uploader.store(b"img", "thumbnails/a.png").await.unwrap();

        assert!(stored.remote);
        assert_eq!(stored.location, "https://cdn.example.com/bucket/thumbnails/a.png");
        assert!(!temp_dir.path().join("a.png").exists());
    }

    #[tokio::test]
    async fn test_total_failure_returns_none() {
        let uploader = AssetUploader::new(Some(Arc::new(FailingStore)), Arc::new(FailingStore));

        assert_eq!(uploader.upload(b"x", "pdfs/a.pdf").await, None);
    }
}
