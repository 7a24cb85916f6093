use uuid::Uuid;

use crate::{
    app::util::reqwest::get_bytes,
    storage::{models::file_properties::FileProperties, ObjectStore},
};

use super::{
    config::TransformConfig,
    errors::{user_facing_message, TransformError},
    models::{
        style_preset::StylePreset,
        transform_options::TransformOptions,
        transform_response::{TransformFailure, TransformResponse},
    },
    replicate::{
        self, enums::replicate_prediction_status::ReplicatePredictionStatus,
        models::input_spec::InputSpec,
        structs::replicate_prediction_response::ReplicatePredictionResponse,
    },
    sleeper::Sleeper,
};

/// A submitted prediction. `immediate` is set when the create call already
/// reached a terminal state.
#[derive(Debug)]
pub struct JobHandle {
    pub id: String,
    pub immediate: Option<ReplicatePredictionResponse>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct JobResult {
    pub id: String,
    pub artifact_url: String,
    pub outputs: Vec<String>,
}

impl JobResult {
    fn from_prediction(prediction: &ReplicatePredictionResponse) -> Option<Self> {
        let outputs = prediction.output_urls();
        let artifact_url = outputs.first()?.to_string();

        Some(Self {
            id: prediction.id.to_string(),
            artifact_url,
            outputs,
        })
    }
}

/// Drives one transformation from submission to a finished artifact.
/// Holds no state of its own; everything is borrowed for one request.
pub struct TransformationJobRunner<'a> {
    config: &'a TransformConfig,
    client: &'a reqwest::Client,
    sleeper: &'a dyn Sleeper,
    store: &'a dyn ObjectStore,
}

impl<'a> TransformationJobRunner<'a> {
    pub fn new(
        config: &'a TransformConfig,
        client: &'a reqwest::Client,
        sleeper: &'a dyn Sleeper,
        store: &'a dyn ObjectStore,
    ) -> Self {
        Self {
            config,
            client,
            sleeper,
            store,
        }
    }

    pub async fn submit(
        &self,
        image_url: &str,
        options: &TransformOptions,
    ) -> Result<JobHandle, TransformError> {
        if image_url.trim().is_empty() {
            return Err(TransformError::Validation(
                "Image URL is required".to_string(),
            ));
        }

        let preset: StylePreset = options.style.parse()?;
        let params = options.resolve(preset.config());
        let input_spec = InputSpec::new(&self.config.model_version, image_url, params);

        let prediction =
            replicate::service::create_prediction(&input_spec, self.config, self.client).await?;
        tracing::debug!(
            "created prediction {} ({}) with style {}",
            prediction.id,
            prediction.status.value(),
            preset
        );

        Ok(JobHandle {
            id: prediction.id.to_string(),
            immediate: prediction.status.is_terminal().then_some(prediction),
        })
    }

    pub async fn await_result(&self, handle: JobHandle) -> Result<JobResult, TransformError> {
        let prediction = match handle.immediate {
            Some(prediction) => {
                tracing::debug!("prediction {} finished without polling", handle.id);
                settle(prediction)?
            }
            None => self.poll(&handle.id).await?,
        };

        JobResult::from_prediction(&prediction)
            .ok_or_else(|| TransformError::Validation("no output produced".to_string()))
    }

    async fn poll(&self, id: &str) -> Result<ReplicatePredictionResponse, TransformError> {
        for attempt in 1..=self.config.poll_max_attempts {
            if attempt > 1 {
                self.sleeper.sleep(self.config.poll_interval).await;
            }

            let prediction =
                replicate::service::get_prediction_by_id(id, self.config, self.client).await?;
            tracing::debug!(
                "checked prediction {} (attempt {}): {}",
                id,
                attempt,
                prediction.status.value()
            );

            if prediction.status.is_terminal() {
                return settle(prediction);
            }
        }

        tracing::error!(
            "prediction {} timed out after {} attempts",
            id,
            self.config.poll_max_attempts
        );
        Err(TransformError::Timeout("job timed out".to_string()))
    }

    /// Copies a provider-hosted artifact into owned storage.
    pub async fn relocate(&self, artifact_url: &str) -> Result<String, TransformError> {
        let data = get_bytes(self.client, artifact_url)
            .await
            .map_err(|e| TransformError::Storage(e.message))?;

        let file_name = format!("transformed/{}.png", Uuid::new_v4());
        let url = self
            .store
            .put_object(FileProperties::png(file_name, data))
            .await
            .map_err(|e| TransformError::Storage(e.message))?;

        tracing::debug!("relocated {} to {}", artifact_url, url);
        Ok(url)
    }

    pub async fn run(
        &self,
        image_url: &str,
        options: &TransformOptions,
    ) -> Result<String, TransformError> {
        let handle = self.submit(image_url, options).await?;
        let result = self.await_result(handle).await?;
        tracing::debug!(
            "prediction {} produced {} output(s)",
            result.id,
            result.outputs.len()
        );

        if !self.config.relocate {
            return Ok(result.artifact_url);
        }

        self.relocate(&result.artifact_url).await
    }

    pub async fn transform(
        &self,
        image_url: &str,
        options: &TransformOptions,
    ) -> Result<TransformResponse, TransformFailure> {
        match self.run(image_url, options).await {
            Ok(url) => Ok(TransformResponse::succeeded(url)),
            Err(e) => {
                tracing::error!("transform failed: {}", e);
                Err(e.into())
            }
        }
    }
}

/// Turns a terminal prediction into its outcome.
fn settle(
    prediction: ReplicatePredictionResponse,
) -> Result<ReplicatePredictionResponse, TransformError> {
    match prediction.status {
        ReplicatePredictionStatus::Failed => {
            let error = prediction.error.as_deref().unwrap_or("Prediction failed");
            tracing::error!("prediction {} failed: {}", prediction.id, error);
            Err(TransformError::RemoteService(user_facing_message(error)))
        }
        ReplicatePredictionStatus::Canceled => {
            tracing::error!("prediction {} was canceled", prediction.id);
            Err(TransformError::RemoteService(
                "job was canceled".to_string(),
            ))
        }
        _ => {
            if let Some(logs) = &prediction.logs {
                tracing::trace!("prediction {} logs: {}", prediction.id, logs);
            }
            Ok(prediction)
        }
    }
}
