use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct UploadContentDto {
    pub title: String,
    pub body: String,
    pub anchor_text: Option<String>,
    pub target_url: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ContentDto {
    pub id: i32,
    pub purchase_id: i32,
    pub author_id: i32,
    pub title: String,
    pub body: String,
    pub anchor_text: Option<String>,
    pub target_url: Option<String>,
    pub created_at: DateTime<Utc>,
}
