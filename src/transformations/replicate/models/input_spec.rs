use serde::Serialize;

use crate::transformations::models::transform_options::GenerationParams;

#[derive(Debug, Serialize)]
pub struct InputSpec {
    pub version: String,
    pub input: InputSpecInteriorDesign,
}

#[derive(Debug, Serialize)]
pub struct InputSpecInteriorDesign {
    pub image: String,
    pub prompt: String,
    pub guidance_scale: f64,
    pub negative_prompt: String,
    pub prompt_strength: f64,
    pub num_inference_steps: u32,
}

impl InputSpec {
    pub fn new(version: &str, image: &str, params: GenerationParams) -> Self {
        Self {
            version: version.to_string(),
            input: InputSpecInteriorDesign {
                image: image.to_string(),
                prompt: params.prompt,
                guidance_scale: params.guidance_scale,
                negative_prompt: params.negative_prompt,
                prompt_strength: params.prompt_strength,
                num_inference_steps: params.num_inference_steps,
            },
        }
    }
}
