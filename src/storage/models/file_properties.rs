use bytes::Bytes;
use mime::Mime;

pub static LONG_LIVED_CACHE_CONTROL: &str = "public,max-age=31536000";

#[derive(Debug, Clone)]
pub struct FileProperties {
    pub file_name: String,
    pub mime_type: Mime,
    pub cache_control: String,
    pub data: Bytes,
}

impl FileProperties {
    pub fn png(file_name: String, data: Bytes) -> Self {
        Self {
            file_name,
            mime_type: mime::IMAGE_PNG,
            cache_control: LONG_LIVED_CACHE_CONTROL.to_string(),
            data,
        }
    }
}
