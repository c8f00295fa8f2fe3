//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models in the service layer and transformed to DTOs at the controller boundary.
//! Stored enum columns are parsed into typed enums here so invalid states can't travel
//! further than the conversion.

pub mod ad_request;
pub mod content;
pub mod price_conflict;
pub mod purchase;
pub mod user;
pub mod website;
pub mod wishlist;

/// Number of pages needed to show `total` items `per_page` at a time.
pub fn page_count(total: u64, per_page: u64) -> u64 {
    if per_page > 0 {
        total.div_ceil(per_page)
    } else {
        0
    }
}
