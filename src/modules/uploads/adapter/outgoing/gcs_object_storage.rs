use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::OnceCell;

use crate::modules::uploads::application::ports::outgoing::{ObjectStorage, ObjectStorageError};

/// Internal seam so the adapter can be tested without a real GCS client.
#[async_trait]
trait GcsClient: Send + Sync {
    async fn upload_object(
        &self,
        bucket: &str,
        name: &str,
        data: Vec<u8>,
        content_type: &str,
    ) -> Result<(), String>;

    async fn delete_object(&self, bucket: &str, name: &str) -> Result<(), String>;
}

#[cfg(test)]
struct ArcGcsClient(Arc<dyn GcsClient>);

#[cfg(test)]
#[async_trait]
impl GcsClient for ArcGcsClient {
    async fn upload_object(
        &self,
        bucket: &str,
        name: &str,
        data: Vec<u8>,
        content_type: &str,
    ) -> Result<(), String> {
        self.0.upload_object(bucket, name, data, content_type).await
    }

    async fn delete_object(&self, bucket: &str, name: &str) -> Result<(), String> {
        self.0.delete_object(bucket, name).await
    }
}

/// Uploaded media in a public GCS bucket.
///
/// Without a bucket every call reports `NotConfigured`; the client itself is
/// created lazily on first use.
#[derive(Clone)]
pub struct GcsObjectStorage {
    bucket: Option<String>,
    public_base_url: String,
    client: Arc<OnceCell<Box<dyn GcsClient>>>,
}

impl GcsObjectStorage {
    pub fn new(bucket: Option<String>, public_base_url: String) -> Self {
        Self {
            bucket,
            public_base_url: public_base_url.trim_end_matches('/').to_string(),
            client: Arc::new(OnceCell::new()),
        }
    }

    #[cfg(test)]
    fn with_client(bucket: Option<String>, public_base_url: &str, client: Arc<dyn GcsClient>) -> Self {
        let once = OnceCell::new();
        let _ = once.set(Box::new(ArcGcsClient(client)) as Box<dyn GcsClient>);

        Self {
            bucket,
            public_base_url: public_base_url.trim_end_matches('/').to_string(),
            client: Arc::new(once),
        }
    }

    fn bucket(&self) -> Result<&str, ObjectStorageError> {
        self.bucket.as_deref().ok_or(ObjectStorageError::NotConfigured)
    }

    async fn get_client(&self) -> Result<&dyn GcsClient, ObjectStorageError> {
        self.client
            .get_or_try_init(|| async {
                let real_client = RealGcsClient::new().await?;
                Ok::<_, String>(Box::new(real_client) as Box<dyn GcsClient>)
            })
            .await
            .map(|boxed| &**boxed)
            .map_err(ObjectStorageError::Backend)
    }

    fn public_url(&self, bucket: &str, path: &str) -> String {
        format!("{}/{}/{}", self.public_base_url, bucket, path)
    }
}

#[async_trait]
impl ObjectStorage for GcsObjectStorage {
    async fn upload(
        &self,
        path: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, ObjectStorageError> {
        let bucket = self.bucket()?;
        let client = self.get_client().await?;

        client
            .upload_object(bucket, path, bytes, content_type)
            .await
            .map_err(ObjectStorageError::Backend)?;

        Ok(self.public_url(bucket, path))
    }

    async fn delete(&self, path: &str) -> Result<(), ObjectStorageError> {
        let bucket = self.bucket()?;
        let client = self.get_client().await?;

        client
            .delete_object(bucket, path)
            .await
            .map_err(ObjectStorageError::Backend)
    }
}

// ============================================================================
// Real Google Cloud Storage client (google-cloud-storage)
// ============================================================================

struct RealGcsClient {
    client: google_cloud_storage::client::Client,
}

impl RealGcsClient {
    async fn new() -> Result<Self, String> {
        tracing::info!("Initializing GCS client...");

        let config = google_cloud_storage::client::ClientConfig::default()
            .with_auth()
            .await
            .map_err(|e| {
                tracing::error!("Failed to build GCS client config: {:?}", e);
                e.to_string()
            })?;

        tracing::info!("GCS client created");

        Ok(Self {
            client: google_cloud_storage::client::Client::new(config),
        })
    }
}

#[async_trait]
impl GcsClient for RealGcsClient {
    async fn upload_object(
        &self,
        bucket: &str,
        name: &str,
        data: Vec<u8>,
        content_type: &str,
    ) -> Result<(), String> {
        use google_cloud_storage::http::objects::upload::{
            Media, UploadObjectRequest, UploadType,
        };

        let upload_type = UploadType::Simple(Media {
            name: name.to_string().into(),
            content_type: content_type.to_string().into(),
            content_length: Some(data.len() as u64),
        });

        self.client
            .upload_object(
                &UploadObjectRequest {
                    bucket: bucket.to_string(),
                    ..Default::default()
                },
                data,
                &upload_type,
            )
            .await
            .map(|_| ())
            .map_err(|e| e.to_string())
    }

    async fn delete_object(&self, bucket: &str, name: &str) -> Result<(), String> {
        use google_cloud_storage::http::objects::delete::DeleteObjectRequest;

        self.client
            .delete_object(&DeleteObjectRequest {
                bucket: bucket.to_string(),
                object: name.to_string(),
                ..Default::default()
            })
            .await
            .map_err(|e| e.to_string())
    }
}

// ============================================================================
// Tests
// ============================================================================
