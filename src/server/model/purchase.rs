//! Purchase domain models.
//!
//! A purchase snapshots the listing price when created and walks the payment flow
//! `Pending -> Paid -> Completed`, with `Cancelled` and `Refunded` as exits.

use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};

use crate::{
    model::purchase::{CreatePurchaseDto, PaginatedPurchasesDto, PurchaseDto},
    server::{error::AppError, util::parse::parse_stored},
};

/// Kind of placement bought on a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementType {
    GuestPost,
    LinkInsertion,
}

impl PlacementType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlacementType::GuestPost => "guestPost",
            PlacementType::LinkInsertion => "linkInsertion",
        }
    }
}

impl FromStr for PlacementType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "guestPost" => Ok(PlacementType::GuestPost),
            "linkInsertion" => Ok(PlacementType::LinkInsertion),
            other => Err(format!("Unknown placement type '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseStatus {
    Pending,
    Paid,
    Completed,
    Cancelled,
    Refunded,
}

impl PurchaseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PurchaseStatus::Pending => "pending",
            PurchaseStatus::Paid => "paid",
            PurchaseStatus::Completed => "completed",
            PurchaseStatus::Cancelled => "cancelled",
            PurchaseStatus::Refunded => "refunded",
        }
    }

    pub fn can_transition_to(&self, next: PurchaseStatus) -> bool {
        use PurchaseStatus::*;

        matches!(
            (self, next),
            (Pending, Paid) | (Pending, Cancelled) | (Paid, Completed) | (Paid, Refunded)
        )
    }
}

impl FromStr for PurchaseStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(PurchaseStatus::Pending),
            "paid" => Ok(PurchaseStatus::Paid),
            "completed" => Ok(PurchaseStatus::Completed),
            "cancelled" => Ok(PurchaseStatus::Cancelled),
            "refunded" => Ok(PurchaseStatus::Refunded),
            other => Err(format!("Unknown purchase status '{}'", other)),
        }
    }
}

impl fmt::Display for PurchaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Purchase {
    pub id: i32,
    pub website_id: i32,
    pub buyer_id: i32,
    /// Owner of the listing at purchase time.
    pub seller_id: i32,
    /// Listing price at purchase time.
    pub price_cents: i64,
    pub placement: PlacementType,
    pub status: PurchaseStatus,
    /// Reference returned by the payment provider.
    pub payment_reference: Option<String>,
    /// Where the placement went live.
    pub live_url: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Purchase {
    pub fn from_entity(entity: entity::purchase::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            website_id: entity.website_id,
            buyer_id: entity.buyer_id,
            seller_id: entity.seller_id,
            price_cents: entity.price_cents,
            placement: parse_stored("purchase.placement", entity.placement)?,
            status: parse_stored("purchase.status", entity.status)?,
            payment_reference: entity.payment_reference,
            live_url: entity.live_url,
            notes: entity.notes,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn from_entities(entities: Vec<entity::purchase::Model>) -> Result<Vec<Self>, AppError> {
        entities.into_iter().map(Self::from_entity).collect()
    }

    /// Buyer, seller or an admin may look at a purchase.
    pub fn is_party(&self, user_id: i32) -> bool {
        self.buyer_id == user_id || self.seller_id == user_id
    }

    pub fn into_dto(self) -> PurchaseDto {
        PurchaseDto {
            id: self.id,
            website_id: self.website_id,
            buyer_id: self.buyer_id,
            seller_id: self.seller_id,
            price_cents: self.price_cents,
            placement: self.placement.as_str().to_string(),
            status: self.status.as_str().to_string(),
            payment_reference: self.payment_reference,
            live_url: self.live_url,
            notes: self.notes,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Parameters for buying a placement.
#[derive(Debug, Clone)]
pub struct CreatePurchaseParams {
    pub buyer_id: i32,
    pub website_id: i32,
    pub placement: PlacementType,
    pub notes: Option<String>,
}

impl CreatePurchaseParams {
    /// # Returns
    /// - `Err(AppError::BadRequest)` - Unknown placement type
    pub fn from_dto(buyer_id: i32, dto: CreatePurchaseDto) -> Result<Self, AppError> {
        let placement = dto
            .placement
            .parse::<PlacementType>()
            .map_err(AppError::BadRequest)?;

        Ok(Self {
            buyer_id,
            website_id: dto.website_id,
            placement,
            notes: dto.notes.filter(|n| !n.trim().is_empty()),
        })
    }
}

/// Values written alongside a status change.
#[derive(Debug, Clone, Default)]
pub struct PurchaseStatusChange {
    pub payment_reference: Option<String>,
    pub live_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedPurchases {
    pub purchases: Vec<Purchase>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedPurchases {
    pub fn into_dto(self) -> PaginatedPurchasesDto {
        PaginatedPurchasesDto {
            purchases: self.purchases.into_iter().map(|p| p.into_dto()).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
