use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::app::util::time;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct TransformationHistoryItem {
    pub id: String,
    pub user_id: String,
    pub original_image: String,
    pub transformed_image: String,
    pub style: String,
    pub created_at: i64,
}

impl TransformationHistoryItem {
    pub fn new(user_id: &str, original_image: &str, transformed_image: &str, style: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            original_image: original_image.to_string(),
            transformed_image: transformed_image.to_string(),
            style: style.to_string(),
            created_at: time::current_time_in_millis(),
        }
    }
}
