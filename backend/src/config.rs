//! Runtime configuration.
//!
//! Server settings come from `ELEARN_*` environment variables layered over
//! defaults. Object storage credentials use the conventional AWS/Backblaze
//! variable names and are read verbatim, so key ids that look like numbers
//! keep their leading zeros.

use figment::{
    providers::{Env, Serialized},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::storage::object::S3Settings;

pub const DEFAULT_REGION: &str = "us-east-1";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Directory holding `users.csv`, `courses.csv` and `enrollments.csv`
    pub data_dir: PathBuf,
    pub bind_addr: String,
    /// Default tracing filter; `RUST_LOG` wins when set
    pub log_level: String,
    /// Where uploads land when object storage is unavailable
    pub upload_dir: PathBuf,
    pub upload_timeout_secs: u64,
    pub cors_origin: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            bind_addr: "127.0.0.1:3000".to_string(),
            log_level: "info".to_string(),
            upload_dir: PathBuf::from("data/uploads"),
            upload_timeout_secs: 30,
            cors_origin: "http://localhost:8080".to_string(),
        }
    }
}

impl ServerConfig {
    pub fn upload_timeout(&self) -> Duration {
        Duration::from_secs(self.upload_timeout_secs)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectStorageConfig {
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
    pub bucket: Option<String>,
    pub endpoint: Option<String>,
    pub region: Option<String>,
}

impl ObjectStorageConfig {
    pub fn from_env() -> Self {
        Self {
            access_key_id: Env::var("AWS_ACCESS_KEY_ID"),
            secret_access_key: Env::var("AWS_SECRET_ACCESS_KEY"),
            bucket: Env::var("BACKBLAZE_BUCKET"),
            endpoint: Env::var("B2_S3_ENDPOINT"),
            region: Env::var("AWS_REGION"),
        }
    }

    /// Bucket settings, or `None` when any required value is missing or blank
    pub fn s3_settings(&self) -> Option<S3Settings> {
        let required = |value: &Option<String>| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };

        Some(S3Settings {
            access_key_id: required(&self.access_key_id)?,
            secret_access_key: required(&self.secret_access_key)?,
            bucket: required(&self.bucket)?,
            endpoint: required(&self.endpoint)?,
            region: required(&self.region).unwrap_or_else(|| DEFAULT_REGION.to_string()),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub object_storage: ObjectStorageConfig,
}

impl AppConfig {
    /// Load from the process environment. Call `dotenvy::dotenv()` first to
    /// pick up a `.env` file.
    pub fn load() -> Result<Self, figment::Error> {
        let server = Figment::from(Serialized::defaults(ServerConfig::default()))
            .merge(Env::prefixed("ELEARN_"))
            .extract()?;

        Ok(Self {
            server,
            object_storage: ObjectStorageConfig::from_env(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    fn clear_storage_env(jail: &mut Jail) {
        for name in [
            "AWS_ACCESS_KEY_ID",
            "AWS_SECRET_ACCESS_KEY",
            "BACKBLAZE_BUCKET",
            "B2_S3_ENDPOINT",
            "AWS_REGION",
        ] {
            jail.set_env(name, "");
        }
    }

    #[test]
    fn test_defaults() {
        Jail::expect_with(|jail| {
            clear_storage_env(jail);

            let config = AppConfig::load()?;

            assert_eq!(config.server.data_dir, PathBuf::from("data"));
            assert_eq!(config.server.bind_addr, "127.0.0.1:3000");
            assert_eq!(config.server.upload_timeout(), Duration::from_secs(30));
            assert_eq!(config.object_storage.s3_settings(), None);
            Ok(())
        });
    }

    #[test]
    fn test_server_values_from_env() {
        Jail::expect_with(|jail| {
            jail.set_env("ELEARN_DATA_DIR", "/srv/elearn");
            jail.set_env("ELEARN_BIND_ADDR", "0.0.0.0:8000");
            jail.set_env("ELEARN_UPLOAD_TIMEOUT_SECS", "5");
            jail.set_env("ELEARN_LOG_LEVEL", "debug");

            let config = AppConfig::load()?;

            assert_eq!(config.server.data_dir, PathBuf::from("/srv/elearn"));
            assert_eq!(config.server.bind_addr, "0.0.0.0:8000");
            assert_eq!(config.server.upload_timeout_secs, 5);
            assert_eq!(config.server.log_level, "debug");
            Ok(())
        });
    }

    #[test]
    fn test_storage_settings_from_env() {
        Jail::expect_with(|jail| {
            clear_storage_env(jail);
            jail.set_env("AWS_ACCESS_KEY_ID", "0051234");
            jail.set_env("AWS_SECRET_ACCESS_KEY", "secret");
            jail.set_env("BACKBLAZE_BUCKET", "courses");
            jail.set_env("B2_S3_ENDPOINT", "https://s3.us-west-004.backblazeb2.com");

            let settings = AppConfig::load()?.object_storage.s3_settings().unwrap();

            assert_eq!(settings.access_key_id, "0051234");
            assert_eq!(settings.bucket, "courses");
            assert_eq!(settings.region, DEFAULT_REGION);
            Ok(())
        });
    }

    #[test]
    fn test_partial_storage_settings_are_ignored() {
        let config = ObjectStorageConfig {
            access_key_id: Some("key".to_string()),
            secret_access_key: Some("secret".to_string()),
            bucket: Some("  ".to_string()),
            endpoint: Some("https://s3.example.com".to_string()),
            region: None,
        };

        assert!(config.s3_settings().is_none());
    }
}
