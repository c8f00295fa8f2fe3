//! Website listing repository.
//!
//! Every status change is a conditional update on the status the caller expects the row to
//! be in. Callers look at the returned row count to detect that another request moved the
//! listing first. The repository is generic over the connection so the conflict engine can
//! run it inside a transaction.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::website::{
    CreateWebsiteParams, MarketplaceFilter, UpdateWebsiteParams, WebsiteStatus,
};

/// Repository providing database operations for website listings.
pub struct WebsiteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> WebsiteRepository<'a, C> {
    /// Creates a new WebsiteRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new listing in `Pending` status.
    ///
    /// # Arguments
    /// - `params` - Validated listing details
    /// - `normalized_url` - Canonical form of `params.url`
    ///
    /// # Returns
    /// - `Ok(Model)` - The created listing
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        params: &CreateWebsiteParams,
        normalized_url: &str,
    ) -> Result<entity::website::Model, DbErr> {
        let now = Utc::now();

        entity::website::ActiveModel {
            owner_id: ActiveValue::Set(params.owner_id),
            url: ActiveValue::Set(params.url.trim().to_string()),
            normalized_url: ActiveValue::Set(normalized_url.to_string()),
            name: ActiveValue::Set(params.name.clone()),
            description: ActiveValue::Set(params.description.clone()),
            category: ActiveValue::Set(params.category.clone()),
            price_cents: ActiveValue::Set(params.price_cents),
            domain_authority: ActiveValue::Set(params.domain_authority),
            monthly_traffic: ActiveValue::Set(params.monthly_traffic),
            status: ActiveValue::Set(WebsiteStatus::Pending.as_str().to_string()),
            is_original: ActiveValue::Set(false),
            conflict_group_id: ActiveValue::Set(None),
            conflicts_with_id: ActiveValue::Set(None),
            rejection_reason: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::website::Model>, DbErr> {
        entity::prelude::Website::find_by_id(id).one(self.db).await
    }

    /// Finds all active listings of a normalized URL, oldest first.
    pub async fn find_active_by_normalized_url(
        &self,
        normalized_url: &str,
    ) -> Result<Vec<entity::website::Model>, DbErr> {
        entity::prelude::Website::find()
            .filter(entity::website::Column::NormalizedUrl.eq(normalized_url))
            .filter(entity::website::Column::Status.ne(WebsiteStatus::Rejected.as_str()))
            .order_by_asc(entity::website::Column::CreatedAt)
            .order_by_asc(entity::website::Column::Id)
            .all(self.db)
            .await
    }

    /// Finds every active listing, used by the reconciliation sweep.
    pub async fn find_active(&self) -> Result<Vec<entity::website::Model>, DbErr> {
        entity::prelude::Website::find()
            .filter(entity::website::Column::Status.ne(WebsiteStatus::Rejected.as_str()))
            .order_by_asc(entity::website::Column::NormalizedUrl)
            .order_by_asc(entity::website::Column::CreatedAt)
            .order_by_asc(entity::website::Column::Id)
            .all(self.db)
            .await
    }

    /// Finds the listings tagged with a conflict group, oldest first.
    pub async fn find_by_conflict_group(
        &self,
        group_id: &str,
    ) -> Result<Vec<entity::website::Model>, DbErr> {
        entity::prelude::Website::find()
            .filter(entity::website::Column::ConflictGroupId.eq(group_id))
            .order_by_asc(entity::website::Column::CreatedAt)
            .order_by_asc(entity::website::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets a page of approved listings matching the filter, newest first.
    ///
    /// # Returns
    /// - `Ok((websites, total))` - Listings for the page and the total number of matches
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_marketplace_paginated(
        &self,
        filter: &MarketplaceFilter,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::website::Model>, u64), DbErr> {
        let mut query = entity::prelude::Website::find()
            .filter(entity::website::Column::Status.eq(WebsiteStatus::Approved.as_str()));

        if let Some(category) = &filter.category {
            query = query.filter(entity::website::Column::Category.eq(category.as_str()));
        }
        if let Some(min) = filter.min_price_cents {
            query = query.filter(entity::website::Column::PriceCents.gte(min));
        }
        if let Some(max) = filter.max_price_cents {
            query = query.filter(entity::website::Column::PriceCents.lte(max));
        }

        let paginator = query
            .order_by_desc(entity::website::Column::CreatedAt)
            .order_by_desc(entity::website::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let websites = paginator.fetch_page(page).await?;

        Ok((websites, total))
    }

    /// Gets a page of one publisher's listings in any status, newest first.
    pub async fn get_by_owner_paginated(
        &self,
        owner_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::website::Model>, u64), DbErr> {
        let paginator = entity::prelude::Website::find()
            .filter(entity::website::Column::OwnerId.eq(owner_id))
            .order_by_desc(entity::website::Column::CreatedAt)
            .order_by_desc(entity::website::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let websites = paginator.fetch_page(page).await?;

        Ok((websites, total))
    }

    /// Gets a page of listings for the admin review queue, oldest first.
    ///
    /// # Arguments
    /// - `status` - Only return listings in this status, all listings when `None`
    pub async fn get_by_status_paginated(
        &self,
        status: Option<WebsiteStatus>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::website::Model>, u64), DbErr> {
        let mut query = entity::prelude::Website::find();
        if let Some(status) = status {
            query = query.filter(entity::website::Column::Status.eq(status.as_str()));
        }

        let paginator = query
            .order_by_asc(entity::website::Column::CreatedAt)
            .order_by_asc(entity::website::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let websites = paginator.fetch_page(page).await?;

        Ok((websites, total))
    }

    /// Updates the editable details of a listing.
    ///
    /// Only applies while the listing is still in `expected` status and owned by
    /// `params.owner_id`.
    ///
    /// # Arguments
    /// - `params` - New listing details
    /// - `expected` - Status the listing was read in
    /// - `next` - Status to move to, `expected` to keep it
    ///
    /// # Returns
    /// - `Ok(rows)` - 1 when applied, 0 when the listing moved on or isn't owned by the caller
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_details(
        &self,
        params: &UpdateWebsiteParams,
        expected: WebsiteStatus,
        next: WebsiteStatus,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::Website::update_many()
            .col_expr(entity::website::Column::Name, Expr::value(params.name.clone()))
            .col_expr(
                entity::website::Column::Description,
                Expr::value(params.description.clone()),
            )
            .col_expr(
                entity::website::Column::Category,
                Expr::value(params.category.clone()),
            )
            .col_expr(
                entity::website::Column::PriceCents,
                Expr::value(params.price_cents),
            )
            .col_expr(
                entity::website::Column::DomainAuthority,
                Expr::value(params.domain_authority),
            )
            .col_expr(
                entity::website::Column::MonthlyTraffic,
                Expr::value(params.monthly_traffic),
            )
            .col_expr(entity::website::Column::Status, Expr::value(next.as_str()))
            .col_expr(entity::website::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::website::Column::Id.eq(params.id))
            .filter(entity::website::Column::OwnerId.eq(params.owner_id))
            .filter(entity::website::Column::Status.eq(expected.as_str()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Moves a listing from one of `from` to `to`.
    ///
    /// The rejection reason is overwritten, so moving away from `Rejected` clears it.
    ///
    /// # Returns
    /// - `Ok(rows)` - 1 when applied, 0 when the listing wasn't in any of `from`
    /// - `Err(DbErr)` - Database error during update
    pub async fn transition_status(
        &self,
        id: i32,
        from: &[WebsiteStatus],
        to: WebsiteStatus,
        rejection_reason: Option<String>,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::Website::update_many()
            .col_expr(entity::website::Column::Status, Expr::value(to.as_str()))
            .col_expr(
                entity::website::Column::RejectionReason,
                Expr::value(rejection_reason),
            )
            .col_expr(entity::website::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::website::Column::Id.eq(id))
            .filter(entity::website::Column::Status.is_in(from.iter().map(|s| s.as_str())))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Sends a rejected listing back to `Pending` with its conflict links cleared.
    pub async fn reset_for_review(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Website::update_many()
            .col_expr(
                entity::website::Column::Status,
                Expr::value(WebsiteStatus::Pending.as_str()),
            )
            .col_expr(
                entity::website::Column::RejectionReason,
                Expr::value(Option::<String>::None),
            )
            .col_expr(entity::website::Column::IsOriginal, Expr::value(false))
            .col_expr(
                entity::website::Column::ConflictGroupId,
                Expr::value(Option::<String>::None),
            )
            .col_expr(
                entity::website::Column::ConflictsWithId,
                Expr::value(Option::<i32>::None),
            )
            .col_expr(entity::website::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::website::Column::Id.eq(id))
            .filter(entity::website::Column::Status.eq(WebsiteStatus::Rejected.as_str()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Tags a `Pending` or `Approved` listing as a member of a conflict group.
    ///
    /// # Arguments
    /// - `id` - Listing to tag
    /// - `group_id` - Conflict group ID
    /// - `is_original` - Whether the listing is the group original
    /// - `conflicts_with_id` - Original listing, `None` for the original itself
    ///
    /// # Returns
    /// - `Ok(rows)` - 1 when tagged, 0 when the listing is rejected or already in conflict
    /// - `Err(DbErr)` - Database error during update
    pub async fn mark_conflict(
        &self,
        id: i32,
        group_id: &str,
        is_original: bool,
        conflicts_with_id: Option<i32>,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::Website::update_many()
            .col_expr(
                entity::website::Column::Status,
                Expr::value(WebsiteStatus::PriceConflict.as_str()),
            )
            .col_expr(
                entity::website::Column::ConflictGroupId,
                Expr::value(group_id.to_string()),
            )
            .col_expr(entity::website::Column::IsOriginal, Expr::value(is_original))
            .col_expr(
                entity::website::Column::ConflictsWithId,
                Expr::value(conflicts_with_id),
            )
            .col_expr(entity::website::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::website::Column::Id.eq(id))
            .filter(entity::website::Column::Status.is_in([
                WebsiteStatus::Pending.as_str(),
                WebsiteStatus::Approved.as_str(),
            ]))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes a listing unless it is in a price conflict.
    ///
    /// # Returns
    /// - `Ok(rows)` - 1 when deleted, 0 when missing or in conflict
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Website::delete_many()
            .filter(entity::website::Column::Id.eq(id))
            .filter(entity::website::Column::Status.ne(WebsiteStatus::PriceConflict.as_str()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
