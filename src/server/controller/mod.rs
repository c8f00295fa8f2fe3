//! HTTP request handlers.
//!
//! Controllers check permissions through `AuthGuard`, convert DTOs into service parameters
//! and convert the returned domain models back into DTOs. Every handler carries a
//! `utoipa::path` annotation so the router can build the OpenAPI document from them.

pub mod ad_request;
pub mod admin;
pub mod auth;
pub mod purchase;
pub mod user;
pub mod website;
pub mod wishlist;

use serde::Deserialize;

/// Page query shared by paginated endpoints.
#[derive(Deserialize)]
pub struct PaginationParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
}

pub fn default_entries() -> u64 {
    10
}
