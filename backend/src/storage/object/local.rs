use async_trait::async_trait;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::{AssetStore, UploadError};

/// Stores assets on local disk under their base file name
#[derive(Debug, Clone)]
pub struct LocalAssetStore {
    directory: PathBuf,
}

impl LocalAssetStore {
    pub fn new<P: AsRef<Path>>(directory: P) -> Self {
        Self {
            directory: directory.as_ref().to_path_buf(),
        }
    }

    /// Where a blob uploaded under `key` lands, e.g. `pdfs/a.pdf` -> `<dir>/a.pdf`
    pub fn path_for(&self, key: &str) -> Result<PathBuf, UploadError> {
        let file_name = Path::new(key)
            .file_name()
            .ok_or_else(|| UploadError::InvalidKey(key.to_string()))?;
        Ok(self.directory.join(file_name))
    }
}

#[async_trait]
impl AssetStore for LocalAssetStore {
    async fn put(&self, key: &str, bytes: &[u8]) -> Result<String, UploadError> {
        let path = self.path_for(key)?;

        fs::create_dir_all(&self.directory).map_err(|e| UploadError::local(&self.directory, e))?;
        fs::write(&path, bytes).map_err(|e| UploadError::local(&path, e))?;

        debug!("Stored {} bytes at {}", bytes.len(), path.display());
        Ok(path.to_string_lossy().into_owned())
    }

    fn is_remote(&self) -> bool {
        false
    }
}
