//! Purchase service and payment flow.
//!
//! A purchase snapshots the listing price when it is created and then only moves along
//! `PurchaseStatus::can_transition_to`. Each move is a conditional update on the status
//! the purchase was read in, so a double submit applies once and the second call gets 409.

use sea_orm::DatabaseConnection;
use url::Url;

use crate::server::{
    data::{purchase::PurchaseRepository, website::WebsiteRepository},
    error::{auth::AuthError, AppError},
    model::{
        page_count,
        purchase::{
            CreatePurchaseParams, PaginatedPurchases, Purchase, PurchaseStatus,
            PurchaseStatusChange,
        },
        website::{Website, WebsiteStatus},
    },
};

pub struct PurchaseService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PurchaseService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Buys a placement on an approved listing.
    ///
    /// # Returns
    /// - `Ok(Purchase)` - The pending purchase with the listing price snapshotted
    /// - `Err(AppError::NotFound)` - No listing with that ID
    /// - `Err(AppError::BadRequest)` - Listing not approved, or the buyer owns it
    pub async fn create(&self, params: CreatePurchaseParams) -> Result<Purchase, AppError> {
        let website = WebsiteRepository::new(self.db)
            .find_by_id(params.website_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Website {} not found", params.website_id))
            })?;
        let website = Website::from_entity(website)?;

        if website.status != WebsiteStatus::Approved {
            return Err(AppError::BadRequest(format!(
                "Website {} is not available for purchase",
                website.id
            )));
        }
        if website.owner_id == params.buyer_id {
            return Err(AppError::BadRequest(
                "You can't buy a placement on your own listing".to_string(),
            ));
        }

        let buyer_id = params.buyer_id;
        let purchase = PurchaseRepository::new(self.db)
            .create(params, website.owner_id, website.price_cents)
            .await?;

        tracing::info!(
            "User {} created purchase {} on website {} for {} cents",
            buyer_id,
            purchase.id,
            website.id,
            website.price_cents
        );

        Purchase::from_entity(purchase)
    }

    /// Records the buyer's payment.
    pub async fn pay(
        &self,
        buyer_id: i32,
        id: i32,
        payment_reference: String,
    ) -> Result<Purchase, AppError> {
        let payment_reference = payment_reference.trim().to_string();
        if payment_reference.is_empty() {
            return Err(AppError::BadRequest(
                "A payment reference is required".to_string(),
            ));
        }

        let purchase = self.find(id).await?;
        if purchase.buyer_id != buyer_id {
            return Err(access_denied(buyer_id, "pay for", id));
        }

        self.transition(
            purchase,
            PurchaseStatus::Paid,
            PurchaseStatusChange {
                payment_reference: Some(payment_reference),
                ..Default::default()
            },
        )
        .await
    }

    /// Marks a paid placement as live.
    pub async fn complete(
        &self,
        seller_id: i32,
        id: i32,
        live_url: String,
    ) -> Result<Purchase, AppError> {
        let live_url = live_url.trim().to_string();
        let parsed = Url::parse(&live_url)
            .map_err(|e| AppError::BadRequest(format!("Invalid live URL: {}", e)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(AppError::BadRequest(
                "Live URL must use http or https".to_string(),
            ));
        }

        let purchase = self.find(id).await?;
        if purchase.seller_id != seller_id {
            return Err(access_denied(seller_id, "complete", id));
        }

        self.transition(
            purchase,
            PurchaseStatus::Completed,
            PurchaseStatusChange {
                live_url: Some(live_url),
                ..Default::default()
            },
        )
        .await
    }

    /// Cancels an unpaid purchase. Allowed for the buyer and admins.
    pub async fn cancel(
        &self,
        user_id: i32,
        is_admin: bool,
        id: i32,
    ) -> Result<Purchase, AppError> {
        let purchase = self.find(id).await?;
        if purchase.buyer_id != user_id && !is_admin {
            return Err(access_denied(user_id, "cancel", id));
        }

        self.transition(purchase, PurchaseStatus::Cancelled, Default::default())
            .await
    }

    /// Refunds a paid purchase. Callers must have checked for admin permission.
    pub async fn refund(&self, id: i32) -> Result<Purchase, AppError> {
        let purchase = self.find(id).await?;

        self.transition(purchase, PurchaseStatus::Refunded, Default::default())
            .await
    }

    /// Gets a purchase for one of its parties or an admin.
    pub async fn get(&self, user_id: i32, is_admin: bool, id: i32) -> Result<Purchase, AppError> {
        let purchase = self.find(id).await?;
        if !purchase.is_party(user_id) && !is_admin {
            return Err(access_denied(user_id, "view", id));
        }

        Ok(purchase)
    }

    pub async fn list_bought(&self, buyer_id: i32) -> Result<Vec<Purchase>, AppError> {
        let purchases = PurchaseRepository::new(self.db)
            .find_by_buyer(buyer_id)
            .await?;

        Purchase::from_entities(purchases)
    }

    pub async fn list_sold(&self, seller_id: i32) -> Result<Vec<Purchase>, AppError> {
        let purchases = PurchaseRepository::new(self.db)
            .find_by_seller(seller_id)
            .await?;

        Purchase::from_entities(purchases)
    }

    /// Gets a page of every purchase for the admin view, newest first.
    pub async fn list_all(&self, page: u64, per_page: u64) -> Result<PaginatedPurchases, AppError> {
        let (purchases, total) = PurchaseRepository::new(self.db)
            .get_all_paginated(page, per_page)
            .await?;

        Ok(PaginatedPurchases {
            purchases: Purchase::from_entities(purchases)?,
            total,
            page,
            per_page,
            total_pages: page_count(total, per_page),
        })
    }

    async fn find(&self, id: i32) -> Result<Purchase, AppError> {
        let purchase = PurchaseRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Purchase {} not found", id)))?;

        Purchase::from_entity(purchase)
    }

    /// Moves a purchase to `to` if it is still in the status it was read in.
    ///
    /// # Returns
    /// - `Ok(Purchase)` - The purchase after the change
    /// - `Err(AppError::Conflict)` - The transition isn't allowed from the current status, or
    ///   another request changed the status first
    async fn transition(
        &self,
        purchase: Purchase,
        to: PurchaseStatus,
        change: PurchaseStatusChange,
    ) -> Result<Purchase, AppError> {
        if !purchase.status.can_transition_to(to) {
            return Err(AppError::Conflict(format!(
                "Purchase {} is {} and can't become {}",
                purchase.id, purchase.status, to
            )));
        }

        let rows = PurchaseRepository::new(self.db)
            .transition_status(purchase.id, purchase.status, to, change)
            .await?;
        if rows == 0 {
            return Err(AppError::Conflict(format!(
                "Purchase {} was changed by another request, please reload and try again",
                purchase.id
            )));
        }

        tracing::info!("Purchase {} moved from {} to {}", purchase.id, purchase.status, to);

        self.find(purchase.id).await
    }
}

fn access_denied(user_id: i32, action: &str, purchase_id: i32) -> AppError {
    AuthError::AccessDenied(
        user_id,
        format!("User may not {} purchase {}", action, purchase_id),
    )
    .into()
}
