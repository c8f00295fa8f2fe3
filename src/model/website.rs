use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateWebsiteDto {
    pub url: String,
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub price_cents: i64,
    pub domain_authority: Option<i32>,
    pub monthly_traffic: Option<i64>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct UpdateWebsiteDto {
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub price_cents: i64,
    pub domain_authority: Option<i32>,
    pub monthly_traffic: Option<i64>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct WebsiteDto {
    pub id: i32,
    pub owner_id: i32,
    pub url: String,
    pub normalized_url: String,
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub price_cents: i64,
    pub domain_authority: Option<i32>,
    pub monthly_traffic: Option<i64>,
    /// `"pending"`, `"priceConflict"`, `"approved"` or `"rejected"`
    pub status: String,
    pub is_original: bool,
    pub conflict_group_id: Option<String>,
    pub conflicts_with_id: Option<i32>,
    pub rejection_reason: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct PaginatedWebsitesDto {
    pub websites: Vec<WebsiteDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct RejectWebsiteDto {
    pub reason: String,
}
