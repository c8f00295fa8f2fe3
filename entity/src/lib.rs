//! SeaORM entities for the marketplace schema.
//!
//! One module per table. The `prelude` module re-exports every `Entity` under its
//! table name so callers can write `entity::prelude::Website::find()`.

pub mod prelude;

pub mod ad_request;
pub mod content;
pub mod price_conflict_group;
pub mod purchase;
pub mod user;
pub mod website;
pub mod website_url_claim;
pub mod wishlist_item;
