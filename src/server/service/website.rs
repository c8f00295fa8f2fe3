//! Website listing service.
//!
//! Submissions and resubmissions run inside a transaction together with conflict
//! reconciliation so a listing never becomes visible without its URL claim or conflict
//! group. Status changes are conditional on the status the listing was read in; a miss
//! surfaces as 409.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{url_claim::UrlClaimRepository, website::WebsiteRepository},
    error::{auth::AuthError, internal::InternalError, AppError},
    model::{
        page_count,
        website::{
            CreateWebsiteParams, MarketplaceFilter, PaginatedWebsites, UpdateWebsiteParams,
            Website, WebsiteStatus,
        },
    },
    service::price_conflict::reconcile::ConflictReconciler,
    util::url::normalize_url,
};

pub struct WebsiteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WebsiteService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Submits a new listing for review.
    ///
    /// Validates the details, normalizes the URL, then inserts the listing and reconciles it
    /// against the URL claim in one transaction. The listing comes back `Pending` when it
    /// won the claim, or `PriceConflict` when another publisher already lists the URL.
    ///
    /// # Returns
    /// - `Ok(Website)` - The stored listing
    /// - `Err(AppError::BadRequest)` - Invalid details, invalid URL or duplicate listing
    /// - `Err(AppError::Conflict)` - The URL claim changed concurrently
    pub async fn submit(&self, params: CreateWebsiteParams) -> Result<Website, AppError> {
        params.validate()?;
        let normalized_url = normalize_url(&params.url)?;

        self.ensure_no_duplicate(params.owner_id, &normalized_url, None)
            .await?;

        let txn = self.db.begin().await?;
        let created = WebsiteRepository::new(&txn)
            .create(&params, &normalized_url)
            .await?;
        let website = ConflictReconciler::new(&txn)
            .reconcile_submission(Website::from_entity(created)?)
            .await?;
        txn.commit().await?;

        tracing::info!(
            "User {} submitted website {} for {} ({})",
            website.owner_id,
            website.id,
            website.normalized_url,
            website.status
        );

        Ok(website)
    }

    /// Gets a page of approved listings for the public marketplace.
    pub async fn list_marketplace(
        &self,
        filter: MarketplaceFilter,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedWebsites, AppError> {
        let (websites, total) = WebsiteRepository::new(self.db)
            .get_marketplace_paginated(&filter, page, per_page)
            .await?;

        Ok(PaginatedWebsites {
            websites: Website::from_entities(websites)?,
            total,
            page,
            per_page,
            total_pages: page_count(total, per_page),
        })
    }

    /// Gets a page of a publisher's own listings in any status.
    pub async fn list_owned(
        &self,
        owner_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedWebsites, AppError> {
        let (websites, total) = WebsiteRepository::new(self.db)
            .get_by_owner_paginated(owner_id, page, per_page)
            .await?;

        Ok(PaginatedWebsites {
            websites: Website::from_entities(websites)?,
            total,
            page,
            per_page,
            total_pages: page_count(total, per_page),
        })
    }

    /// Admin review queue, optionally filtered by status.
    pub async fn list_by_status(
        &self,
        status: Option<WebsiteStatus>,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedWebsites, AppError> {
        let (websites, total) = WebsiteRepository::new(self.db)
            .get_by_status_paginated(status, page, per_page)
            .await?;

        Ok(PaginatedWebsites {
            websites: Website::from_entities(websites)?,
            total,
            page,
            per_page,
            total_pages: page_count(total, per_page),
        })
    }

    /// Gets a listing as seen by `viewer_id`.
    ///
    /// Approved listings are public. Listings in any other status are only visible to their
    /// owner and admins; everyone else gets a 404 so unpublished listings don't leak.
    pub async fn get(
        &self,
        id: i32,
        viewer_id: Option<i32>,
        viewer_is_admin: bool,
    ) -> Result<Website, AppError> {
        let website = self.find(id).await?;

        let visible = website.status == WebsiteStatus::Approved
            || viewer_is_admin
            || viewer_id == Some(website.owner_id);

        if !visible {
            return Err(not_found(id));
        }

        Ok(website)
    }

    /// Applies an owner's edit to a listing.
    ///
    /// Changing the price of an approved listing sends it back to `Pending` for review.
    ///
    /// # Returns
    /// - `Ok(Website)` - The updated listing
    /// - `Err(AppError::AuthErr(AccessDenied))` - Caller doesn't own the listing
    /// - `Err(AppError::BadRequest)` - Invalid details or listing in a price conflict
    /// - `Err(AppError::Conflict)` - The listing changed status during the edit
    pub async fn update(&self, params: UpdateWebsiteParams) -> Result<Website, AppError> {
        params.validate()?;

        let website = self.find(params.id).await?;
        ensure_owner(&website, params.owner_id)?;

        if website.status == WebsiteStatus::PriceConflict {
            return Err(AppError::BadRequest(
                "Listings in a price conflict can't be edited until the conflict is resolved"
                    .to_string(),
            ));
        }

        let next = if website.status == WebsiteStatus::Approved
            && website.price_cents != params.price_cents
        {
            WebsiteStatus::Pending
        } else {
            website.status
        };

        let rows = WebsiteRepository::new(self.db)
            .update_details(&params, website.status, next)
            .await?;
        if rows == 0 {
            return Err(changed_concurrently(params.id));
        }

        if next != website.status {
            tracing::info!(
                "Website {} price changed, sent back for review",
                params.id
            );
        }

        self.find(params.id).await
    }

    /// Sends a rejected listing back through submission.
    ///
    /// The listing is reset to `Pending` and reconciled against its URL claim exactly like a
    /// fresh submission.
    pub async fn resubmit(&self, owner_id: i32, id: i32) -> Result<Website, AppError> {
        let website = self.find(id).await?;
        ensure_owner(&website, owner_id)?;

        if website.status != WebsiteStatus::Rejected {
            return Err(AppError::BadRequest(format!(
                "Only rejected listings can be resubmitted, website {} is {}",
                id, website.status
            )));
        }

        self.ensure_no_duplicate(owner_id, &website.normalized_url, Some(id))
            .await?;

        let txn = self.db.begin().await?;
        let websites = WebsiteRepository::new(&txn);

        if websites.reset_for_review(id).await? == 0 {
            return Err(changed_concurrently(id));
        }

        let reset = websites
            .find_by_id(id)
            .await?
            .ok_or_else(|| InternalError::MissingAfterWrite {
                entity: "website",
                id: id.to_string(),
            })?;
        let website = ConflictReconciler::new(&txn)
            .reconcile_submission(Website::from_entity(reset)?)
            .await?;
        txn.commit().await?;

        tracing::info!("Website {} resubmitted ({})", id, website.status);

        Ok(website)
    }

    /// Deletes a listing, releasing its URL claim.
    pub async fn delete(&self, owner_id: i32, id: i32) -> Result<(), AppError> {
        let website = self.find(id).await?;
        ensure_owner(&website, owner_id)?;

        if website.status == WebsiteStatus::PriceConflict {
            return Err(AppError::BadRequest(
                "Listings in a price conflict can't be deleted until the conflict is resolved"
                    .to_string(),
            ));
        }

        let txn = self.db.begin().await?;
        UrlClaimRepository::new(&txn)
            .release(&website.normalized_url, id)
            .await?;
        if WebsiteRepository::new(&txn).delete(id).await? == 0 {
            return Err(changed_concurrently(id));
        }
        txn.commit().await?;

        tracing::info!("User {} deleted website {}", owner_id, id);

        Ok(())
    }

    /// Approves a pending listing.
    pub async fn approve(&self, id: i32) -> Result<Website, AppError> {
        let website = self.find(id).await?;
        ensure_not_in_conflict(&website)?;

        if website.status != WebsiteStatus::Pending {
            return Err(AppError::BadRequest(format!(
                "Only pending listings can be approved, website {} is {}",
                id, website.status
            )));
        }

        let rows = WebsiteRepository::new(self.db)
            .transition_status(id, &[WebsiteStatus::Pending], WebsiteStatus::Approved, None)
            .await?;
        if rows == 0 {
            return Err(changed_concurrently(id));
        }

        tracing::info!("Website {} approved", id);

        self.find(id).await
    }

    /// Rejects a pending or approved listing with a reason.
    ///
    /// A rejected listing is no longer active, so it gives up its URL claim.
    pub async fn reject(&self, id: i32, reason: String) -> Result<Website, AppError> {
        let reason = reason.trim().to_string();
        if reason.is_empty() {
            return Err(AppError::BadRequest(
                "A rejection reason is required".to_string(),
            ));
        }

        let website = self.find(id).await?;
        ensure_not_in_conflict(&website)?;

        if !website.status.can_transition_to(WebsiteStatus::Rejected) {
            return Err(AppError::BadRequest(format!(
                "Website {} is already rejected",
                id
            )));
        }

        let txn = self.db.begin().await?;
        let rows = WebsiteRepository::new(&txn)
            .transition_status(
                id,
                &[WebsiteStatus::Pending, WebsiteStatus::Approved],
                WebsiteStatus::Rejected,
                Some(reason),
            )
            .await?;
        if rows == 0 {
            return Err(changed_concurrently(id));
        }
        UrlClaimRepository::new(&txn)
            .release(&website.normalized_url, id)
            .await?;
        txn.commit().await?;

        tracing::info!("Website {} rejected", id);

        self.find(id).await
    }

    async fn find(&self, id: i32) -> Result<Website, AppError> {
        let website = WebsiteRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))?;

        Website::from_entity(website)
    }

    /// Rejects a submission when the owner already has an active listing for the URL.
    async fn ensure_no_duplicate(
        &self,
        owner_id: i32,
        normalized_url: &str,
        except_id: Option<i32>,
    ) -> Result<(), AppError> {
        let active = WebsiteRepository::new(self.db)
            .find_active_by_normalized_url(normalized_url)
            .await?;

        if active
            .iter()
            .any(|w| w.owner_id == owner_id && Some(w.id) != except_id)
        {
            return Err(AppError::BadRequest(format!(
                "You already have an active listing for {}",
                normalized_url
            )));
        }

        Ok(())
    }
}

fn ensure_owner(website: &Website, user_id: i32) -> Result<(), AppError> {
    if website.owner_id != user_id {
        return Err(AuthError::AccessDenied(
            user_id,
            format!("User doesn't own website {}", website.id),
        )
        .into());
    }

    Ok(())
}

fn ensure_not_in_conflict(website: &Website) -> Result<(), AppError> {
    if website.status == WebsiteStatus::PriceConflict {
        return Err(AppError::BadRequest(format!(
            "Website {} is in a price conflict, resolve the conflict group instead",
            website.id
        )));
    }

    Ok(())
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Website {} not found", id))
}

fn changed_concurrently(id: i32) -> AppError {
    AppError::Conflict(format!(
        "Website {} was changed by another request, please reload and try again",
        id
    ))
}
