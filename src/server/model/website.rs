//! Website listing domain models and parameters.
//!
//! A listing moves through the review workflow described by `WebsiteStatus`. Listings
//! sharing a normalized URL with a listing of another publisher are parked in
//! `PriceConflict` until an admin resolves their conflict group.

use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};

use crate::{
    model::website::{CreateWebsiteDto, PaginatedWebsitesDto, UpdateWebsiteDto, WebsiteDto},
    server::{error::AppError, util::parse::parse_stored},
};

/// Review state of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WebsiteStatus {
    /// Waiting for admin review.
    Pending,
    /// Shares its normalized URL with another publisher's listing.
    PriceConflict,
    /// Visible on the marketplace.
    Approved,
    /// Rejected by an admin or by losing a price conflict.
    Rejected,
}

impl WebsiteStatus {
    /// All statuses that count as active.
    pub const ACTIVE: [WebsiteStatus; 3] = [
        WebsiteStatus::Pending,
        WebsiteStatus::PriceConflict,
        WebsiteStatus::Approved,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WebsiteStatus::Pending => "pending",
            WebsiteStatus::PriceConflict => "priceConflict",
            WebsiteStatus::Approved => "approved",
            WebsiteStatus::Rejected => "rejected",
        }
    }

    /// Active listings take part in URL claims and conflict detection.
    pub fn is_active(&self) -> bool {
        !matches!(self, WebsiteStatus::Rejected)
    }

    /// Whether a listing may move from `self` to `next`.
    ///
    /// Staying in the same status is never a transition. A listing can only leave
    /// `PriceConflict` by being approved or rejected, which is what conflict resolution does.
    pub fn can_transition_to(&self, next: WebsiteStatus) -> bool {
        use WebsiteStatus::*;

        match (self, next) {
            (Pending, PriceConflict | Approved | Rejected) => true,
            (PriceConflict, Approved | Rejected) => true,
            (Approved, Pending | PriceConflict | Rejected) => true,
            (Rejected, Pending | PriceConflict) => true,
            _ => false,
        }
    }
}

impl FromStr for WebsiteStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(WebsiteStatus::Pending),
            "priceConflict" => Ok(WebsiteStatus::PriceConflict),
            "approved" => Ok(WebsiteStatus::Approved),
            "rejected" => Ok(WebsiteStatus::Rejected),
            other => Err(format!("Unknown website status '{}'", other)),
        }
    }
}

impl fmt::Display for WebsiteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A publisher's website listing.
#[derive(Debug, Clone, PartialEq)]
pub struct Website {
    pub id: i32,
    /// User ID of the publisher that submitted the listing.
    pub owner_id: i32,
    /// URL as submitted.
    pub url: String,
    /// Canonical form of `url`, see `util::url::normalize_url`.
    pub normalized_url: String,
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    /// Placement price in cents.
    pub price_cents: i64,
    pub domain_authority: Option<i32>,
    pub monthly_traffic: Option<i64>,
    pub status: WebsiteStatus,
    /// Whether this listing is the original of its conflict group.
    pub is_original: bool,
    /// Conflict group the listing belongs to, if any.
    pub conflict_group_id: Option<String>,
    /// Original listing this one conflicts with.
    pub conflicts_with_id: Option<i32>,
    pub rejection_reason: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Website {
    /// Converts an entity model to a website domain model.
    ///
    /// # Returns
    /// - `Ok(Website)` - The converted website
    /// - `Err(AppError::InternalErr(InvalidStoredValue))` - Unknown stored status
    pub fn from_entity(entity: entity::website::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            owner_id: entity.owner_id,
            url: entity.url,
            normalized_url: entity.normalized_url,
            name: entity.name,
            description: entity.description,
            category: entity.category,
            price_cents: entity.price_cents,
            domain_authority: entity.domain_authority,
            monthly_traffic: entity.monthly_traffic,
            status: parse_stored("website.status", entity.status)?,
            is_original: entity.is_original,
            conflict_group_id: entity.conflict_group_id,
            conflicts_with_id: entity.conflicts_with_id,
            rejection_reason: entity.rejection_reason,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    /// Converts a list of entity models, failing on the first invalid row.
    pub fn from_entities(entities: Vec<entity::website::Model>) -> Result<Vec<Self>, AppError> {
        entities.into_iter().map(Self::from_entity).collect()
    }

    pub fn into_dto(self) -> WebsiteDto {
        WebsiteDto {
            id: self.id,
            owner_id: self.owner_id,
            url: self.url,
            normalized_url: self.normalized_url,
            name: self.name,
            description: self.description,
            category: self.category,
            price_cents: self.price_cents,
            domain_authority: self.domain_authority,
            monthly_traffic: self.monthly_traffic,
            status: self.status.as_str().to_string(),
            is_original: self.is_original,
            conflict_group_id: self.conflict_group_id,
            conflicts_with_id: self.conflicts_with_id,
            rejection_reason: self.rejection_reason,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Parameters for submitting a new listing.
#[derive(Debug, Clone)]
pub struct CreateWebsiteParams {
    pub owner_id: i32,
    pub url: String,
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub price_cents: i64,
    pub domain_authority: Option<i32>,
    pub monthly_traffic: Option<i64>,
}

impl CreateWebsiteParams {
    pub fn from_dto(owner_id: i32, dto: CreateWebsiteDto) -> Self {
        Self {
            owner_id,
            url: dto.url,
            name: dto.name.trim().to_string(),
            description: dto.description,
            category: dto.category.trim().to_string(),
            price_cents: dto.price_cents,
            domain_authority: dto.domain_authority,
            monthly_traffic: dto.monthly_traffic,
        }
    }

    /// Checks the listing details shared with updates.
    pub fn validate(&self) -> Result<(), AppError> {
        validate_details(
            &self.name,
            self.price_cents,
            self.domain_authority,
            self.monthly_traffic,
        )
    }
}

/// Parameters for an owner editing a listing. The URL can't be changed.
#[derive(Debug, Clone)]
pub struct UpdateWebsiteParams {
    pub id: i32,
    pub owner_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub price_cents: i64,
    pub domain_authority: Option<i32>,
    pub monthly_traffic: Option<i64>,
}

impl UpdateWebsiteParams {
    pub fn from_dto(id: i32, owner_id: i32, dto: UpdateWebsiteDto) -> Self {
        Self {
            id,
            owner_id,
            name: dto.name.trim().to_string(),
            description: dto.description,
            category: dto.category.trim().to_string(),
            price_cents: dto.price_cents,
            domain_authority: dto.domain_authority,
            monthly_traffic: dto.monthly_traffic,
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        validate_details(
            &self.name,
            self.price_cents,
            self.domain_authority,
            self.monthly_traffic,
        )
    }
}

fn validate_details(
    name: &str,
    price_cents: i64,
    domain_authority: Option<i32>,
    monthly_traffic: Option<i64>,
) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::BadRequest("Website name is required".to_string()));
    }
    if price_cents <= 0 {
        return Err(AppError::BadRequest(
            "Price must be greater than zero".to_string(),
        ));
    }
    if let Some(da) = domain_authority {
        if !(0..=100).contains(&da) {
            return Err(AppError::BadRequest(
                "Domain authority must be between 0 and 100".to_string(),
            ));
        }
    }
    if let Some(traffic) = monthly_traffic {
        if traffic < 0 {
            return Err(AppError::BadRequest(
                "Monthly traffic can't be negative".to_string(),
            ));
        }
    }
    Ok(())
}

/// Optional filters for the public marketplace listing.
#[derive(Debug, Clone, Default)]
pub struct MarketplaceFilter {
    pub category: Option<String>,
    pub min_price_cents: Option<i64>,
    pub max_price_cents: Option<i64>,
}

/// Paginated collection of listings with metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedWebsites {
    pub websites: Vec<Website>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedWebsites {
    pub fn into_dto(self) -> PaginatedWebsitesDto {
        PaginatedWebsitesDto {
            websites: self.websites.into_iter().map(|w| w.into_dto()).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
