pub mod transform_json;
