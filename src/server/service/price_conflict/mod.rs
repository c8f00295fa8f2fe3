//! Price conflict engine.
//!
//! Listings of different publishers that share a normalized URL are parked in
//! `PriceConflict` inside a conflict group until an admin picks the listing that stays.
//! Submissions reconcile inline through `ConflictReconciler`; the periodic sweep repairs
//! anything the inline path missed, such as rows written before claims existed.

pub mod detect;
pub mod reconcile;

use std::collections::BTreeSet;

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        price_conflict_group::PriceConflictGroupRepository, url_claim::UrlClaimRepository,
        website::WebsiteRepository,
    },
    error::{internal::InternalError, AppError},
    model::{
        price_conflict::{
            ClaimSnapshot, ConflictGroupStatus, ListingSnapshot, PriceConflictGroup,
            ReconciliationReport, ResolveConflictParams,
        },
        website::{Website, WebsiteStatus},
    },
    service::price_conflict::{detect::detect_conflicts, reconcile::ConflictReconciler},
};

/// Reason stored on listings that lose a conflict resolution.
pub const LOST_CONFLICT_REASON: &str = "Lost price conflict";

pub struct PriceConflictService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PriceConflictService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets open conflict groups with their members, oldest first.
    pub async fn list_open(&self) -> Result<Vec<PriceConflictGroup>, AppError> {
        let groups = PriceConflictGroupRepository::new(self.db)
            .find_by_status(ConflictGroupStatus::Open)
            .await?;

        let mut result = Vec::with_capacity(groups.len());
        for group in groups {
            let members = self.load_members(&group.id).await?;
            result.push(PriceConflictGroup::from_entity(group, members)?);
        }

        Ok(result)
    }

    /// Gets a conflict group with its members.
    pub async fn get_group(&self, id: &str) -> Result<Option<PriceConflictGroup>, AppError> {
        let Some(group) = PriceConflictGroupRepository::new(self.db)
            .find_by_id(id)
            .await?
        else {
            return Ok(None);
        };

        let members = self.load_members(&group.id).await?;

        Ok(Some(PriceConflictGroup::from_entity(group, members)?))
    }

    /// Resolves an open conflict group in favour of one of its members.
    ///
    /// The winner moves to `Approved` and takes over the URL claim. Every other member still
    /// in `PriceConflict` is rejected. The group is closed with a conditional update, so
    /// only one of two concurrent resolutions succeeds.
    ///
    /// # Returns
    /// - `Ok(PriceConflictGroup)` - The resolved group
    /// - `Err(AppError::NotFound)` - No group with that ID
    /// - `Err(AppError::BadRequest)` - The winner is not a member of the group
    /// - `Err(AppError::Conflict)` - The group is already resolved, or the winner left the
    ///   `PriceConflict` status before it could be approved
    pub async fn resolve(
        &self,
        params: ResolveConflictParams,
    ) -> Result<PriceConflictGroup, AppError> {
        let txn = self.db.begin().await?;
        let groups = PriceConflictGroupRepository::new(&txn);
        let websites = WebsiteRepository::new(&txn);

        let group = groups
            .find_by_id(&params.group_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Conflict group {} not found", params.group_id))
            })?;

        if group.status == ConflictGroupStatus::Resolved.as_str() {
            return Err(AppError::Conflict(format!(
                "Conflict group {} is already resolved",
                params.group_id
            )));
        }

        let members = Website::from_entities(websites.find_by_conflict_group(&group.id).await?)?;
        if !members.iter().any(|m| m.id == params.winner_website_id) {
            return Err(AppError::BadRequest(format!(
                "Website {} is not part of conflict group {}",
                params.winner_website_id, params.group_id
            )));
        }

        if !groups
            .mark_resolved_if_open(&group.id, params.winner_website_id, params.resolved_by)
            .await?
        {
            return Err(AppError::Conflict(format!(
                "Conflict group {} is already resolved",
                params.group_id
            )));
        }

        // Dropping the transaction on early return rolls back the group update
        let approved = websites
            .transition_status(
                params.winner_website_id,
                &[WebsiteStatus::PriceConflict],
                WebsiteStatus::Approved,
                None,
            )
            .await?;
        if approved != 1 {
            return Err(AppError::Conflict(format!(
                "Website {} is no longer in price conflict",
                params.winner_website_id
            )));
        }

        let mut rejected = 0;
        for loser in members
            .iter()
            .filter(|m| m.id != params.winner_website_id && m.status == WebsiteStatus::PriceConflict)
        {
            rejected += websites
                .transition_status(
                    loser.id,
                    &[WebsiteStatus::PriceConflict],
                    WebsiteStatus::Rejected,
                    Some(LOST_CONFLICT_REASON.to_string()),
                )
                .await?;
        }

        UrlClaimRepository::new(&txn)
            .upsert(&group.normalized_url, params.winner_website_id, None)
            .await?;

        txn.commit().await?;

        tracing::info!(
            "Admin {} resolved conflict group {} for {}: website {} approved, {} rejected",
            params.resolved_by,
            group.id,
            group.normalized_url,
            params.winner_website_id,
            rejected
        );

        self.get_group(&params.group_id).await?.ok_or_else(|| {
            InternalError::MissingAfterWrite {
                entity: "price_conflict_group",
                id: params.group_id.clone(),
            }
            .into()
        })
    }

    /// Runs conflict detection over every active listing and repairs what it finds.
    ///
    /// Each affected normalized URL is re-read and repaired in its own transaction, so a
    /// submission landing between detection and repair is taken into account. Running the
    /// sweep again right after reports no changes.
    pub async fn sweep(&self) -> Result<ReconciliationReport, AppError> {
        let listings = Website::from_entities(WebsiteRepository::new(self.db).find_active().await?)?;
        let snapshots: Vec<ListingSnapshot> = listings.iter().map(ListingSnapshot::from).collect();
        let claims: Vec<ClaimSnapshot> = UrlClaimRepository::new(self.db)
            .find_all()
            .await?
            .into_iter()
            .map(ClaimSnapshot::from_entity)
            .collect();

        let plan = detect_conflicts(&snapshots, &claims);
        let urls: BTreeSet<String> = plan
            .conflicts
            .iter()
            .map(|c| c.normalized_url.clone())
            .chain(plan.claims.iter().map(|c| c.normalized_url.clone()))
            .collect();

        let mut report = ReconciliationReport::default();
        for url in urls {
            let txn = self.db.begin().await?;
            let url_report = ConflictReconciler::new(&txn).reconcile_url(&url).await?;
            txn.commit().await?;

            tracing::debug!("Reconciled {}: {:?}", url, url_report);
            report.merge(url_report);
        }

        if report == ReconciliationReport::default() {
            tracing::debug!("Conflict reconciliation found nothing to repair");
        } else {
            tracing::info!(
                "Conflict reconciliation opened {} groups, tagged {} listings, repaired {} claims",
                report.groups_opened,
                report.listings_tagged,
                report.claims_repaired
            );
        }

        Ok(report)
    }

    async fn load_members(&self, group_id: &str) -> Result<Vec<Website>, AppError> {
        Website::from_entities(
            WebsiteRepository::new(self.db)
                .find_by_conflict_group(group_id)
                .await?,
        )
    }
}
