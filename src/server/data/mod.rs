//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories return SeaORM entity models and `DbErr`; the
//! service layer converts them into domain models. Repositories taking part in the price
//! conflict engine are generic over `ConnectionTrait` so they run the same way against the
//! pool or inside a transaction.

pub mod ad_request;
pub mod content;
pub mod price_conflict_group;
pub mod purchase;
pub mod url_claim;
pub mod user;
pub mod website;
pub mod wishlist;

#[cfg(test)]
mod test;
