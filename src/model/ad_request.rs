use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateAdRequestDto {
    pub website_id: i32,
    pub message: String,
    pub budget_cents: Option<i64>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct RespondAdRequestDto {
    pub accept: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct AdRequestDto {
    pub id: i32,
    pub website_id: i32,
    pub advertiser_id: i32,
    pub publisher_id: i32,
    pub message: String,
    pub budget_cents: Option<i64>,
    /// `"pending"`, `"accepted"` or `"declined"`
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub responded_at: Option<DateTime<Utc>>,
}
