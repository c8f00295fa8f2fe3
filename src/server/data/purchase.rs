//! Purchase repository.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::purchase::{CreatePurchaseParams, PurchaseStatus, PurchaseStatusChange};

pub struct PurchaseRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PurchaseRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a pending purchase.
    ///
    /// # Arguments
    /// - `params` - Buyer, listing, placement and notes
    /// - `seller_id` - Owner of the listing
    /// - `price_cents` - Listing price at purchase time
    pub async fn create(
        &self,
        params: CreatePurchaseParams,
        seller_id: i32,
        price_cents: i64,
    ) -> Result<entity::purchase::Model, DbErr> {
        let now = Utc::now();

        entity::purchase::ActiveModel {
            website_id: ActiveValue::Set(params.website_id),
            buyer_id: ActiveValue::Set(params.buyer_id),
            seller_id: ActiveValue::Set(seller_id),
            price_cents: ActiveValue::Set(price_cents),
            placement: ActiveValue::Set(params.placement.as_str().to_string()),
            status: ActiveValue::Set(PurchaseStatus::Pending.as_str().to_string()),
            payment_reference: ActiveValue::Set(None),
            live_url: ActiveValue::Set(None),
            notes: ActiveValue::Set(params.notes),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::purchase::Model>, DbErr> {
        entity::prelude::Purchase::find_by_id(id).one(self.db).await
    }

    /// Purchases made by a buyer, newest first.
    pub async fn find_by_buyer(&self, buyer_id: i32) -> Result<Vec<entity::purchase::Model>, DbErr> {
        entity::prelude::Purchase::find()
            .filter(entity::purchase::Column::BuyerId.eq(buyer_id))
            .order_by_desc(entity::purchase::Column::CreatedAt)
            .order_by_desc(entity::purchase::Column::Id)
            .all(self.db)
            .await
    }

    /// Purchases of a seller's listings, newest first.
    pub async fn find_by_seller(
        &self,
        seller_id: i32,
    ) -> Result<Vec<entity::purchase::Model>, DbErr> {
        entity::prelude::Purchase::find()
            .filter(entity::purchase::Column::SellerId.eq(seller_id))
            .order_by_desc(entity::purchase::Column::CreatedAt)
            .order_by_desc(entity::purchase::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::purchase::Model>, u64), DbErr> {
        let paginator = entity::prelude::Purchase::find()
            .order_by_desc(entity::purchase::Column::CreatedAt)
            .order_by_desc(entity::purchase::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let purchases = paginator.fetch_page(page).await?;

        Ok((purchases, total))
    }

    /// Moves a purchase from `from` to `to`, writing any values carried by `change`.
    ///
    /// # Returns
    /// - `Ok(rows)` - 1 when applied, 0 when the purchase wasn't in `from`
    /// - `Err(DbErr)` - Database error during update
    pub async fn transition_status(
        &self,
        id: i32,
        from: PurchaseStatus,
        to: PurchaseStatus,
        change: PurchaseStatusChange,
    ) -> Result<u64, DbErr> {
        let mut update = entity::prelude::Purchase::update_many()
            .col_expr(entity::purchase::Column::Status, Expr::value(to.as_str()))
            .col_expr(entity::purchase::Column::UpdatedAt, Expr::value(Utc::now()));

        if let Some(reference) = change.payment_reference {
            update = update.col_expr(
                entity::purchase::Column::PaymentReference,
                Expr::value(Some(reference)),
            );
        }
        if let Some(live_url) = change.live_url {
            update = update.col_expr(
                entity::purchase::Column::LiveUrl,
                Expr::value(Some(live_url)),
            );
        }

        let result = update
            .filter(entity::purchase::Column::Id.eq(id))
            .filter(entity::purchase::Column::Status.eq(from.as_str()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
