//! Request and response DTOs shared by the HTTP API.
//!
//! These types define the JSON contract of the API and are documented through utoipa.
//! Server-side domain models live in `crate::server::model` and convert into these at the
//! controller boundary.

pub mod ad_request;
pub mod api;
pub mod content;
pub mod price_conflict;
pub mod purchase;
pub mod user;
pub mod website;
pub mod wishlist;
