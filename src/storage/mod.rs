use async_trait::async_trait;

use crate::app::models::api_error::ApiError;

use self::models::file_properties::FileProperties;

pub mod backblaze;
pub mod models;

/// Owned, durable object storage. Objects written here are publicly
/// readable at the returned URL.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    async fn put_object(&self, file_properties: FileProperties) -> Result<String, ApiError>;
}
