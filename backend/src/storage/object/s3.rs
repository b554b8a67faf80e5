use async_trait::async_trait;
use chrono::Utc;
use reqwest::{Client, Url};
use std::time::Duration;
use tracing::{debug, info};

use super::sigv4::{self, Credentials};
use super::{AssetStore, UploadError};

/// Connection settings for an S3-compatible bucket
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct S3Settings {
    pub endpoint: String,
    pub bucket: String,
    pub access_key_id: String,
    pub secret_access_key: String,
    pub region: String,
}

/// Uploads assets with signed `PUT` requests using path-style addressing
#[derive(Clone)]
pub struct S3AssetStore {
    client: Client,
    settings: S3Settings,
    endpoint: Url,
}

impl S3AssetStore {
    pub fn new(settings: S3Settings, timeout: Duration) -> Result<Self, UploadError> {
        let endpoint = Url::parse(settings.endpoint.trim_end_matches('/'))
            .map_err(|e| UploadError::InvalidEndpoint(format!("{}: {}", settings.endpoint, e)))?;
        if endpoint.host_str().is_none() {
            return Err(UploadError::InvalidEndpoint(settings.endpoint.clone()));
        }

        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            settings,
            endpoint,
        })
    }

    /// Public URL of an object: `<endpoint>/<bucket>/<key>`
    pub fn public_url(&self, key: &str) -> String {
        format!(
            "{}/{}/{}",
            self.settings.endpoint.trim_end_matches('/'),
            self.settings.bucket,
            key
        )
    }

    fn canonical_uri(&self, key: &str) -> String {
        let base = self.endpoint.path().trim_end_matches('/');
        format!(
            "{}/{}/{}",
            base,
            sigv4::uri_encode(&self.settings.bucket, false),
            sigv4::uri_encode(key.trim_start_matches('/'), true)
        )
    }

    fn host(&self) -> String {
        let host = self.endpoint.host_str().unwrap_or_default();
        match self.endpoint.port() {
            Some(port) => format!("{}:{}", host, port),
            None => host.to_string(),
        }
    }
}

#[async_trait]
impl AssetStore for S3AssetStore {
    async fn put(&self, key: &str, bytes: &[u8]) -> Result<String, UploadError> {
        let canonical_uri = self.canonical_uri(key);
        let mut url = self.endpoint.clone();
        url.set_path(&canonical_uri);

        let credentials = Credentials {
            access_key_id: &self.settings.access_key_id,
            secret_access_key: &self.settings.secret_access_key,
            region: &self.settings.region,
            service: "s3",
        };
        let signed = sigv4::sign_request("PUT", &canonical_uri, &self.host(), bytes, &credentials, Utc::now());

        debug!("PUT {} ({} bytes)", url, bytes.len());
        let response = self
            .client
            .put(url)
            .header("x-amz-date", signed.amz_date)
            .header("x-amz-content-sha256", signed.content_sha256)
            .header("authorization", signed.authorization)
            .body(bytes.to_vec())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(UploadError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let location = self.public_url(key);
        info!("Uploaded {} to bucket {}", key, self.settings.bucket);
        Ok(location)
    }

    fn is_remote(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(endpoint: &str) -> S3Settings {
        S3Settings {
            endpoint: endpoint.to_string(),
            bucket: "course-assets".to_string(),
            access_key_id: "key".to_string(),
            secret_access_key: "secret".to_string(),
            region: "us-east-1".to_string(),
        }
    }

    #[test]
    fn test_public_url_format() {
        let store = S3AssetStore::new(settings("https://s3.example.com/"), Duration::from_secs(5)).unwrap();
        assert_eq!(
            store.public_url("pdfs/intro.pdf"),
            "https://s3.example.com/course-assets/pdfs/intro.pdf"
        );
    }

    #[test]
    fn test_canonical_uri_and_host() {
        let store = S3AssetStore::new(settings("http://127.0.0.1:9000"), Duration::from_secs(5)).unwrap();
        assert_eq!(store.canonical_uri("pdfs/my notes.pdf"), "/course-assets/pdfs/my%20notes.pdf");
        assert_eq!(store.host(), "127.0.0.1:9000");

        let default_port = S3AssetStore::new(settings("https://s3.example.com"), Duration::from_secs(5)).unwrap();
        assert_eq!(default_port.host(), "s3.example.com");
    }

    #[test]
    fn test_invalid_endpoint_is_rejected() {
        let result = S3AssetStore::new(settings("not a url"), Duration::from_secs(5));
        assert!(matches!(result, Err(UploadError::InvalidEndpoint(_))));
    }
}
