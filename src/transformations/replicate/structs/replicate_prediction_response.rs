use serde::Deserialize;

use crate::transformations::replicate::enums::replicate_prediction_status::ReplicatePredictionStatus;

#[derive(Debug, Clone, Deserialize)]
pub struct ReplicatePredictionResponse {
    pub id: String,
    pub status: ReplicatePredictionStatus,
    #[serde(default)]
    pub output: Option<ReplicateOutput>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub logs: Option<String>,
}

/// Models return either a list of files or a single file.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ReplicateOutput {
    Many(Vec<String>),
    One(String),
}

impl ReplicatePredictionResponse {
    pub fn output_urls(&self) -> Vec<String> {
        let urls = match &self.output {
            Some(ReplicateOutput::Many(urls)) => urls.clone(),
            Some(ReplicateOutput::One(url)) => vec![url.to_string()],
            None => Vec::new(),
        };

        urls.into_iter().filter(|url| !url.is_empty()).collect()
    }
}
