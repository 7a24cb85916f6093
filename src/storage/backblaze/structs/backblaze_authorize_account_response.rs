use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct BackblazeAuthorizeAccountResponse {
    #[serde(rename(deserialize = "authorizationToken"))]
    pub authorization_token: String,
    #[serde(rename(deserialize = "apiUrl"))]
    pub api_url: String,
    #[serde(rename(deserialize = "downloadUrl"))]
    pub download_url: String,
}
