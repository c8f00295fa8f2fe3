//! Price conflict domain models.
//!
//! A conflict group links every active listing of one normalized URL once listings of
//! different publishers collide. Snapshot and plan types feed the pure conflict detection
//! used by the reconciliation sweep.

use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};

use crate::{
    model::price_conflict::{PriceConflictGroupDto, ReconciliationReportDto},
    server::{
        error::AppError,
        model::website::{Website, WebsiteStatus},
        util::parse::parse_stored,
    },
};

/// Resolution state of a conflict group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictGroupStatus {
    Open,
    Resolved,
}

impl ConflictGroupStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConflictGroupStatus::Open => "open",
            ConflictGroupStatus::Resolved => "resolved",
        }
    }
}

impl FromStr for ConflictGroupStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(ConflictGroupStatus::Open),
            "resolved" => Ok(ConflictGroupStatus::Resolved),
            other => Err(format!("Unknown conflict group status '{}'", other)),
        }
    }
}

impl fmt::Display for ConflictGroupStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Conflict group together with its member listings.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceConflictGroup {
    /// UUID v4 shared by all members.
    pub id: String,
    pub normalized_url: String,
    /// Listing that held the URL claim when the group opened.
    pub original_website_id: i32,
    pub status: ConflictGroupStatus,
    pub winner_website_id: Option<i32>,
    /// Admin user that resolved the group.
    pub resolved_by: Option<i32>,
    pub resolved_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    /// Listings tagged with the group ID, oldest first.
    pub members: Vec<Website>,
}

impl PriceConflictGroup {
    /// Builds the domain model from a group row and its already converted members.
    pub fn from_entity(
        entity: entity::price_conflict_group::Model,
        members: Vec<Website>,
    ) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            normalized_url: entity.normalized_url,
            original_website_id: entity.original_website_id,
            status: parse_stored("price_conflict_group.status", entity.status)?,
            winner_website_id: entity.winner_website_id,
            resolved_by: entity.resolved_by,
            resolved_at: entity.resolved_at,
            created_at: entity.created_at,
            members,
        })
    }

    pub fn into_dto(self) -> PriceConflictGroupDto {
        PriceConflictGroupDto {
            id: self.id,
            normalized_url: self.normalized_url,
            original_website_id: self.original_website_id,
            status: self.status.as_str().to_string(),
            winner_website_id: self.winner_website_id,
            resolved_by: self.resolved_by,
            resolved_at: self.resolved_at,
            created_at: self.created_at,
            members: self.members.into_iter().map(|w| w.into_dto()).collect(),
        }
    }
}

/// Parameters for resolving a conflict group.
#[derive(Debug, Clone)]
pub struct ResolveConflictParams {
    pub group_id: String,
    pub winner_website_id: i32,
    /// Admin performing the resolution.
    pub resolved_by: i32,
}

/// The subset of a listing conflict detection looks at.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingSnapshot {
    pub id: i32,
    pub owner_id: i32,
    pub normalized_url: String,
    pub status: WebsiteStatus,
    pub is_original: bool,
    pub conflict_group_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&Website> for ListingSnapshot {
    fn from(website: &Website) -> Self {
        Self {
            id: website.id,
            owner_id: website.owner_id,
            normalized_url: website.normalized_url.clone(),
            status: website.status,
            is_original: website.is_original,
            conflict_group_id: website.conflict_group_id.clone(),
            created_at: website.created_at,
        }
    }
}

/// Current holder of a normalized URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ClaimSnapshot {
    pub normalized_url: String,
    pub website_id: i32,
    pub conflict_group_id: Option<String>,
}

impl ClaimSnapshot {
    pub fn from_entity(entity: entity::website_url_claim::Model) -> Self {
        Self {
            normalized_url: entity.normalized_url,
            website_id: entity.website_id,
            conflict_group_id: entity.conflict_group_id,
        }
    }
}

/// Listings of different publishers sharing a URL that aren't all tagged yet.
#[derive(Debug, Clone, PartialEq)]
pub struct ConflictPlan {
    pub normalized_url: String,
    /// Open group already used by some members, reused instead of opening a new one.
    pub existing_group_id: Option<String>,
    pub original_id: i32,
    /// Active listings not yet in `PriceConflict`, oldest first.
    pub members_to_tag: Vec<i32>,
}

/// A URL whose claim is missing or held by a listing that is no longer active.
#[derive(Debug, Clone, PartialEq)]
pub struct ClaimPlan {
    pub normalized_url: String,
    pub holder_id: i32,
    /// Open group of the URL's members, kept on the repaired claim.
    pub conflict_group_id: Option<String>,
}

/// Work found by conflict detection, ordered by normalized URL.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReconciliationPlan {
    pub conflicts: Vec<ConflictPlan>,
    pub claims: Vec<ClaimPlan>,
}

impl ReconciliationPlan {
    pub fn is_empty(&self) -> bool {
        self.conflicts.is_empty() && self.claims.is_empty()
    }
}

/// Counters of what a reconciliation sweep changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReconciliationReport {
    pub groups_opened: u64,
    pub listings_tagged: u64,
    pub claims_repaired: u64,
}

impl ReconciliationReport {
    pub fn merge(&mut self, other: ReconciliationReport) {
        self.groups_opened += other.groups_opened;
        self.listings_tagged += other.listings_tagged;
        self.claims_repaired += other.claims_repaired;
    }

    pub fn into_dto(self) -> ReconciliationReportDto {
        ReconciliationReportDto {
            groups_opened: self.groups_opened,
            listings_tagged: self.listings_tagged,
            claims_repaired: self.claims_repaired,
        }
    }
}
