use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreatePurchaseDto {
    pub website_id: i32,
    /// `"guestPost"` or `"linkInsertion"`
    pub placement: String,
    pub notes: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct PayPurchaseDto {
    pub payment_reference: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CompletePurchaseDto {
    pub live_url: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct PurchaseDto {
    pub id: i32,
    pub website_id: i32,
    pub buyer_id: i32,
    pub seller_id: i32,
    pub price_cents: i64,
    pub placement: String,
    /// `"pending"`, `"paid"`, `"completed"`, `"cancelled"` or `"refunded"`
    pub status: String,
    pub payment_reference: Option<String>,
    pub live_url: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct PaginatedPurchasesDto {
    pub purchases: Vec<PurchaseDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
