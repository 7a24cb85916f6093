pub mod style_preset;
pub mod transform_options;
pub mod transform_response;
