use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct BackblazeUploadUrlResponse {
    #[serde(rename(deserialize = "uploadUrl"))]
    pub upload_url: String,
    #[serde(rename(deserialize = "authorizationToken"))]
    pub authorization_token: String,
}
