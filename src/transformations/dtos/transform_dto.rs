use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::transformations::models::transform_options::TransformOptions;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TransformDto {
    #[validate(length(min = 1, message = "Image URL is required"))]
    pub image_url: String,
    pub options: TransformOptions,
}

impl TransformDto {
    pub fn sanitized(&self) -> Self {
        Self {
            image_url: self.image_url.trim().to_string(),
            options: TransformOptions {
                style: self.options.style.trim().to_string(),
                ..self.options.clone()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn dto(value: serde_json::Value) -> TransformDto {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn requires_image_url() {
        let dto = dto(json!({ "imageUrl": "", "options": { "style": "modern" } }));
        assert!(dto.validate().is_err());
    }

    #[test]
    fn accepts_any_override_values() {
        let dto = dto(json!({
            "imageUrl": "https://x/room.jpg",
            "options": {
                "style": "modern",
                "guidanceScale": 25.0,
                "promptStrength": 1.5,
                "numInferenceSteps": 1000
            }
        }));

        assert!(dto.validate().is_ok());
        assert_eq!(dto.options.guidance_scale, Some(25.0));
        assert_eq!(dto.options.num_inference_steps, Some(1000));
    }

    #[test]
    fn accepts_well_formed_request() {
        let dto = dto(json!({
            "imageUrl": " https://x/room.jpg ",
            "options": { "style": " modern ", "guidanceScale": 12.0 }
        }))
        .sanitized();

        assert!(dto.validate().is_ok());
        assert_eq!(dto.image_url, "https://x/room.jpg");
        assert_eq!(dto.options.style, "modern");
        assert_eq!(dto.options.guidance_scale, Some(12.0));
    }
}
