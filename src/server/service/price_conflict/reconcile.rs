//! Transactional steps of the conflict engine.
//!
//! `ConflictReconciler` runs on whatever connection it is given. Callers pass an open
//! transaction so a submission, or the repair of one URL during a sweep, commits all of its
//! writes together or none of them.

use sea_orm::ConnectionTrait;
use uuid::Uuid;

use crate::server::{
    data::{
        price_conflict_group::PriceConflictGroupRepository, url_claim::UrlClaimRepository,
        website::WebsiteRepository,
    },
    error::{internal::InternalError, AppError},
    model::{
        price_conflict::{ClaimSnapshot, ListingSnapshot, ReconciliationReport},
        website::{Website, WebsiteStatus},
    },
    service::price_conflict::detect::detect_conflicts,
};

pub struct ConflictReconciler<'a, C: ConnectionTrait> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> ConflictReconciler<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    /// Places a freshly created or resubmitted `Pending` listing against its URL claim.
    ///
    /// The listing either wins the claim and stays `Pending`, or joins the conflict group
    /// of its normalized URL, opening the group when it is the first collision. Every
    /// decision is a conditional write, so two submissions racing for the same URL end up
    /// in the same group.
    ///
    /// # Returns
    /// - `Ok(Website)` - The listing as stored after reconciliation
    /// - `Err(AppError::BadRequest)` - The owner already has an active listing for the URL
    /// - `Err(AppError::Conflict)` - The claim changed underneath and the submission should be retried
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn reconcile_submission(&self, website: Website) -> Result<Website, AppError> {
        let claims = UrlClaimRepository::new(self.conn);
        let websites = WebsiteRepository::new(self.conn);
        let url = website.normalized_url.clone();

        if claims.try_claim(&url, website.id).await? {
            tracing::debug!("Website {} claimed {}", website.id, url);
            return Ok(website);
        }

        let mut claim = self.load_claim(&url).await?;
        if claim.website_id == website.id {
            return Ok(website);
        }

        let others = Website::from_entities(websites.find_active_by_normalized_url(&url).await?)?
            .into_iter()
            .filter(|w| w.id != website.id)
            .collect::<Vec<_>>();

        if others.iter().any(|w| w.owner_id == website.owner_id) {
            return Err(AppError::BadRequest(format!(
                "You already have an active listing for {}",
                url
            )));
        }

        if !others.iter().any(|w| w.id == claim.website_id) {
            // Holder was rejected or deleted without releasing the claim.
            let Some(successor) = others.first() else {
                if claims.hand_over(&url, claim.website_id, website.id).await? {
                    tracing::info!(
                        "Website {} took over stale claim on {} from {}",
                        website.id,
                        url,
                        claim.website_id
                    );
                    return Ok(website);
                }
                return Err(AppError::Conflict(format!(
                    "The listing for {} changed while submitting, please try again",
                    url
                )));
            };

            if !claims.hand_over(&url, claim.website_id, successor.id).await? {
                return Err(AppError::Conflict(format!(
                    "The listing for {} changed while submitting, please try again",
                    url
                )));
            }
            if let Some(group_id) = successor
                .conflict_group_id
                .as_deref()
                .filter(|_| successor.status == WebsiteStatus::PriceConflict)
            {
                claims.set_group_if_unset(&url, group_id).await?;
            }
            claim = self.load_claim(&url).await?;
        }

        let group_id = match claim.conflict_group_id {
            Some(group_id) => group_id,
            None => {
                let candidate = Uuid::new_v4().to_string();
                if claims.set_group_if_unset(&url, &candidate).await? {
                    PriceConflictGroupRepository::new(self.conn)
                        .create(&candidate, &url, claim.website_id)
                        .await?;
                    tracing::info!(
                        "Opened price conflict group {} for {} (original website {})",
                        candidate,
                        url,
                        claim.website_id
                    );
                    candidate
                } else {
                    self.load_claim(&url).await?.conflict_group_id.ok_or_else(|| {
                        InternalError::MissingAfterWrite {
                            entity: "website_url_claim.conflict_group_id",
                            id: url.clone(),
                        }
                    })?
                }
            }
        };

        let group = PriceConflictGroupRepository::new(self.conn)
            .find_by_id(&group_id)
            .await?
            .ok_or_else(|| InternalError::MissingAfterWrite {
                entity: "price_conflict_group",
                id: group_id.clone(),
            })?;
        let original_id = group.original_website_id;

        for other in others.iter().filter(|w| w.status != WebsiteStatus::PriceConflict) {
            let is_original = other.id == original_id;
            websites
                .mark_conflict(
                    other.id,
                    &group_id,
                    is_original,
                    (!is_original).then_some(original_id),
                )
                .await?;
        }

        websites
            .mark_conflict(website.id, &group_id, false, Some(original_id))
            .await?;

        tracing::info!(
            "Website {} joined price conflict group {} for {}",
            website.id,
            group_id,
            url
        );

        let stored = websites
            .find_by_id(website.id)
            .await?
            .ok_or_else(|| InternalError::MissingAfterWrite {
                entity: "website",
                id: website.id.to_string(),
            })?;

        Website::from_entity(stored)
    }

    /// Brings a single normalized URL back in line with the claim invariant.
    ///
    /// Reloads the URL's listings and claim, runs conflict detection on them and applies
    /// the resulting plan.
    pub async fn reconcile_url(&self, url: &str) -> Result<ReconciliationReport, AppError> {
        let claims = UrlClaimRepository::new(self.conn);
        let websites = WebsiteRepository::new(self.conn);
        let groups = PriceConflictGroupRepository::new(self.conn);

        let listings = Website::from_entities(websites.find_active_by_normalized_url(url).await?)?;
        let snapshots: Vec<ListingSnapshot> = listings.iter().map(ListingSnapshot::from).collect();
        let claim: Vec<ClaimSnapshot> = claims
            .find(url)
            .await?
            .map(ClaimSnapshot::from_entity)
            .into_iter()
            .collect();

        let plan = detect_conflicts(&snapshots, &claim);
        let mut report = ReconciliationReport::default();

        for repair in plan.claims {
            claims
                .upsert(&repair.normalized_url, repair.holder_id, repair.conflict_group_id)
                .await?;
            report.claims_repaired += 1;
        }

        for conflict in plan.conflicts {
            let group_id = match conflict.existing_group_id {
                Some(group_id) => {
                    if groups.find_by_id(&group_id).await?.is_none() {
                        groups
                            .create(&group_id, &conflict.normalized_url, conflict.original_id)
                            .await?;
                        report.groups_opened += 1;
                    }
                    group_id
                }
                None => {
                    let group_id = Uuid::new_v4().to_string();
                    groups
                        .create(&group_id, &conflict.normalized_url, conflict.original_id)
                        .await?;
                    report.groups_opened += 1;
                    group_id
                }
            };

            for id in conflict.members_to_tag {
                let is_original = id == conflict.original_id;
                report.listings_tagged += websites
                    .mark_conflict(
                        id,
                        &group_id,
                        is_original,
                        (!is_original).then_some(conflict.original_id),
                    )
                    .await?;
            }

            claims
                .upsert(&conflict.normalized_url, conflict.original_id, Some(group_id))
                .await?;
        }

        Ok(report)
    }

    async fn load_claim(&self, url: &str) -> Result<ClaimSnapshot, AppError> {
        UrlClaimRepository::new(self.conn)
            .find(url)
            .await?
            .map(ClaimSnapshot::from_entity)
            .ok_or_else(|| {
                InternalError::MissingAfterWrite {
                    entity: "website_url_claim",
                    id: url.to_string(),
                }
                .into()
            })
    }
}
