//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation. Factories insert rows
//! directly through SeaORM active models and never go through server business rules, so
//! they can build states the services would refuse to produce (legacy duplicates, stale
//! claims) when a test needs them.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let publisher = factory::user::create_publisher(db).await?;
//! let website = factory::website::create_website(db, publisher.id).await?;
//!
//! let approved = factory::website::WebsiteFactory::new(db, publisher.id)
//!     .url("https://blog.example.com")
//!     .status("approved")
//!     .price_cents(15_000)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `website` - Create website listings
//! - `url_claim` - Create URL claims for listings
//! - `purchase` - Create purchases
//! - `ad_request` - Create ad requests
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod ad_request;
pub mod helpers;
pub mod purchase;
pub mod url_claim;
pub mod user;
pub mod website;

pub use ad_request::create_ad_request;
pub use purchase::create_purchase;
pub use url_claim::create_url_claim;
pub use user::{create_admin, create_advertiser, create_publisher, create_user};
pub use website::{create_approved_website, create_website};
