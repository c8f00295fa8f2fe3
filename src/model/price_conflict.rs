use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::website::WebsiteDto;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct PriceConflictGroupDto {
    pub id: String,
    pub normalized_url: String,
    pub original_website_id: i32,
    /// `"open"` or `"resolved"`
    pub status: String,
    pub winner_website_id: Option<i32>,
    pub resolved_by: Option<i32>,
    pub resolved_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub members: Vec<WebsiteDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct ResolveConflictDto {
    pub winner_website_id: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ReconciliationReportDto {
    pub groups_opened: u64,
    pub listings_tagged: u64,
    pub claims_repaired: u64,
}
