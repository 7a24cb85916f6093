use serde::{Deserialize, Serialize};

use super::style_preset::StyleConfig;

pub const DEFAULT_NUM_INFERENCE_STEPS: u32 = 50;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformOptions {
    pub style: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_negative_prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guidance_scale: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt_strength: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_inference_steps: Option<u32>,
}

/// Parameters actually sent to the generation service once overrides have
/// been applied on top of a preset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationParams {
    pub prompt: String,
    pub negative_prompt: String,
    pub guidance_scale: f64,
    pub prompt_strength: f64,
    pub num_inference_steps: u32,
}

impl TransformOptions {
    pub fn resolve(&self, preset: &StyleConfig) -> GenerationParams {
        GenerationParams {
            prompt: self
                .custom_prompt
                .clone()
                .unwrap_or_else(|| preset.prompt.to_string()),
            negative_prompt: self
                .custom_negative_prompt
                .clone()
                .unwrap_or_else(|| preset.negative_prompt.to_string()),
            guidance_scale: self.guidance_scale.unwrap_or(preset.guidance_scale),
            prompt_strength: self.prompt_strength.unwrap_or(preset.prompt_strength),
            num_inference_steps: self
                .num_inference_steps
                .unwrap_or(DEFAULT_NUM_INFERENCE_STEPS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transformations::models::style_preset::StylePreset;

    fn options(style: &str) -> TransformOptions {
        TransformOptions {
            style: style.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn absent_overrides_use_preset_defaults() {
        for preset in StylePreset::ALL {
            let config = preset.config();
            let params = options(preset.value()).resolve(config);

            assert_eq!(params.prompt, config.prompt);
            assert_eq!(params.negative_prompt, config.negative_prompt);
            assert_eq!(params.guidance_scale, config.guidance_scale);
            assert_eq!(params.prompt_strength, config.prompt_strength);
            assert_eq!(params.num_inference_steps, DEFAULT_NUM_INFERENCE_STEPS);
        }
    }

    #[test]
    fn present_overrides_win() {
        let config = StylePreset::Luxury.config();
        let params = TransformOptions {
            style: "luxury".to_string(),
            custom_prompt: Some("a gold bathroom".to_string()),
            custom_negative_prompt: Some("plastic".to_string()),
            guidance_scale: Some(7.5),
            prompt_strength: Some(0.35),
            num_inference_steps: Some(20),
        }
        .resolve(config);

        assert_eq!(
            params,
            GenerationParams {
                prompt: "a gold bathroom".to_string(),
                negative_prompt: "plastic".to_string(),
                guidance_scale: 7.5,
                prompt_strength: 0.35,
                num_inference_steps: 20,
            }
        );
    }

    #[test]
    fn overrides_apply_independently() {
        let config = StylePreset::Industrial.config();
        let params = TransformOptions {
            style: "industrial".to_string(),
            prompt_strength: Some(1.0),
            ..Default::default()
        }
        .resolve(config);

        assert_eq!(params.prompt, config.prompt);
        assert_eq!(params.guidance_scale, config.guidance_scale);
        assert_eq!(params.prompt_strength, 1.0);
    }

    #[test]
    fn overrides_outside_slider_ranges_are_forwarded() {
        let config = StylePreset::Modern.config();
        let params = TransformOptions {
            style: "modern".to_string(),
            guidance_scale: Some(25.0),
            prompt_strength: Some(1.5),
            num_inference_steps: Some(1000),
            ..Default::default()
        }
        .resolve(config);

        assert_eq!(params.guidance_scale, 25.0);
        assert_eq!(params.prompt_strength, 1.5);
        assert_eq!(params.num_inference_steps, 1000);
    }

    #[test]
    fn deserializes_camel_case_wire_format() {
        let options: TransformOptions = serde_json::from_value(serde_json::json!({
            "style": "rustic",
            "customPrompt": "barn loft",
            "numInferenceSteps": 30
        }))
        .unwrap();

        assert_eq!(options.style, "rustic");
        assert_eq!(options.custom_prompt.as_deref(), Some("barn loft"));
        assert_eq!(options.num_inference_steps, Some(30));
        assert_eq!(options.guidance_scale, None);
    }
}
