//! Website factory for creating test listings.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating website listings with customizable fields.
///
/// The factory does not normalize URLs. `url()` derives the normalized URL by stripping the
/// scheme, which is enough for the simple URLs tests use; call `normalized_url()` to set it
/// explicitly.
pub struct WebsiteFactory<'a> {
    db: &'a DatabaseConnection,
    owner_id: i32,
    url: String,
    normalized_url: String,
    name: String,
    category: String,
    price_cents: i64,
    status: String,
    is_original: bool,
    conflict_group_id: Option<String>,
    conflicts_with_id: Option<i32>,
    created_at: DateTime<Utc>,
}

impl<'a> WebsiteFactory<'a> {
    /// Creates a new WebsiteFactory with default values.
    ///
    /// Defaults:
    /// - url: `"https://site{id}.example.com"`
    /// - name: `"Site {id}"`
    /// - category: `"technology"`
    /// - price_cents: `10_000`
    /// - status: `"pending"`
    pub fn new(db: &'a DatabaseConnection, owner_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            owner_id,
            url: format!("https://site{}.example.com", id),
            normalized_url: format!("site{}.example.com", id),
            name: format!("Site {}", id),
            category: "technology".to_string(),
            price_cents: 10_000,
            status: "pending".to_string(),
            is_original: false,
            conflict_group_id: None,
            conflicts_with_id: None,
            created_at: Utc::now(),
        }
    }

    /// Sets the URL and derives the normalized URL from it.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.normalized_url = url
            .trim_start_matches("https://")
            .trim_start_matches("http://")
            .trim_end_matches('/')
            .to_string();
        self.url = url;
        self
    }

    pub fn normalized_url(mut self, normalized_url: impl Into<String>) -> Self {
        self.normalized_url = normalized_url.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn price_cents(mut self, price_cents: i64) -> Self {
        self.price_cents = price_cents;
        self
    }

    /// Sets the stored status string, e.g. `"approved"` or `"priceConflict"`.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Marks the listing as part of a conflict group.
    pub fn conflict(
        mut self,
        group_id: impl Into<String>,
        is_original: bool,
        conflicts_with_id: Option<i32>,
    ) -> Self {
        self.status = "priceConflict".to_string();
        self.conflict_group_id = Some(group_id.into());
        self.is_original = is_original;
        self.conflicts_with_id = conflicts_with_id;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the website entity into the database.
    pub async fn build(self) -> Result<entity::website::Model, DbErr> {
        entity::website::ActiveModel {
            owner_id: ActiveValue::Set(self.owner_id),
            url: ActiveValue::Set(self.url),
            normalized_url: ActiveValue::Set(self.normalized_url),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(None),
            category: ActiveValue::Set(self.category),
            price_cents: ActiveValue::Set(self.price_cents),
            domain_authority: ActiveValue::Set(None),
            monthly_traffic: ActiveValue::Set(None),
            status: ActiveValue::Set(self.status),
            is_original: ActiveValue::Set(self.is_original),
            conflict_group_id: ActiveValue::Set(self.conflict_group_id),
            conflicts_with_id: ActiveValue::Set(self.conflicts_with_id),
            rejection_reason: ActiveValue::Set(None),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending listing owned by `owner_id`.
pub async fn create_website(
    db: &DatabaseConnection,
    owner_id: i32,
) -> Result<entity::website::Model, DbErr> {
    WebsiteFactory::new(db, owner_id).build().await
}

/// Creates an approved listing owned by `owner_id`.
pub async fn create_approved_website(
    db: &DatabaseConnection,
    owner_id: i32,
) -> Result<entity::website::Model, DbErr> {
    WebsiteFactory::new(db, owner_id)
        .status("approved")
        .build()
        .await
}
