use std::path::Path;
use tracing::{info, warn};

use crate::domain::commands::assets::{UploadAssetCommand, UploadAssetResult};
use crate::domain::error::ServiceError;
use crate::storage::AssetUploader;

/// Service for course thumbnails and documents
#[derive(Clone)]
pub struct AssetService {
    uploader: AssetUploader,
}

impl AssetService {
    pub fn new(uploader: AssetUploader) -> Self {
        Self { uploader }
    }

    /// Upload a thumbnail or course document.
    ///
    /// Only the base name of `file_name` is used. A result without a
    /// location means the asset could not be stored and the course should
    /// be saved without it.
    pub async fn upload_asset(&self, command: UploadAssetCommand) -> Result<UploadAssetResult, ServiceError> {
        let file_name = base_file_name(&command.file_name)
            .ok_or_else(|| ServiceError::validation("File name cannot be empty"))?;

        if !command.kind.accepts(&file_name) {
            return Err(ServiceError::validation(format!(
                "'{}' is not an accepted file type, expected one of: {}",
                file_name,
                command.kind.allowed_extensions().join(", ")
            )));
        }
        if command.bytes.is_empty() {
            return Err(ServiceError::validation("Uploaded file is empty"));
        }

        let key = command.kind.object_key(&file_name);
        info!("Uploading {} ({} bytes)", key, command.bytes.len());

        match self.uploader.store(&command.bytes, &key).await {
            Some(stored) => Ok(UploadAssetResult {
                location: Some(stored.location),
                stored_remotely: stored.remote,
            }),
            None => {
                warn!("No location for {}, continuing without asset", key);
                Ok(UploadAssetResult {
                    location: None,
                    stored_remotely: false,
                })
            }
        }
    }
}

fn base_file_name(raw: &str) -> Option<String> {
    // Browsers on Windows may send the full client path
    let normalized = raw.trim().replace('\\', "/");
    let name = Path::new(&normalized).file_name()?.to_str()?.trim();
    if name.is_empty() || name == "." || name == ".." {
        return None;
    }
    Some(name.to_string())
}
