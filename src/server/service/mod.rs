//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing core business rules and validation
//! - **Orchestration**: Coordinating multiple repository calls and external services
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Handling complex multi-step operations

pub mod ad_request;
pub mod auth;
pub mod content;
pub mod price_conflict;
pub mod purchase;
pub mod user;
pub mod website;
pub mod wishlist;

#[cfg(test)]
mod test;
