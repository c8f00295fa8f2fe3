//! Price conflict group repository.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::price_conflict::ConflictGroupStatus;

pub struct PriceConflictGroupRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PriceConflictGroupRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts an open conflict group.
    ///
    /// # Arguments
    /// - `id` - Group ID, a UUID v4 string
    /// - `normalized_url` - URL the members share
    /// - `original_website_id` - Listing that held the URL claim
    pub async fn create(
        &self,
        id: &str,
        normalized_url: &str,
        original_website_id: i32,
    ) -> Result<entity::price_conflict_group::Model, DbErr> {
        entity::price_conflict_group::ActiveModel {
            id: ActiveValue::Set(id.to_string()),
            normalized_url: ActiveValue::Set(normalized_url.to_string()),
            original_website_id: ActiveValue::Set(original_website_id),
            status: ActiveValue::Set(ConflictGroupStatus::Open.as_str().to_string()),
            winner_website_id: ActiveValue::Set(None),
            resolved_by: ActiveValue::Set(None),
            resolved_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(
        &self,
        id: &str,
    ) -> Result<Option<entity::price_conflict_group::Model>, DbErr> {
        entity::prelude::PriceConflictGroup::find_by_id(id.to_string())
            .one(self.db)
            .await
    }

    /// Finds groups in a status, oldest first.
    pub async fn find_by_status(
        &self,
        status: ConflictGroupStatus,
    ) -> Result<Vec<entity::price_conflict_group::Model>, DbErr> {
        entity::prelude::PriceConflictGroup::find()
            .filter(entity::price_conflict_group::Column::Status.eq(status.as_str()))
            .order_by_asc(entity::price_conflict_group::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Marks an open group resolved.
    ///
    /// # Returns
    /// - `Ok(true)` - This call resolved the group
    /// - `Ok(false)` - The group was already resolved (or doesn't exist)
    /// - `Err(DbErr)` - Database error during update
    pub async fn mark_resolved_if_open(
        &self,
        id: &str,
        winner_website_id: i32,
        resolved_by: i32,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::PriceConflictGroup::update_many()
            .col_expr(
                entity::price_conflict_group::Column::Status,
                Expr::value(ConflictGroupStatus::Resolved.as_str()),
            )
            .col_expr(
                entity::price_conflict_group::Column::WinnerWebsiteId,
                Expr::value(Some(winner_website_id)),
            )
            .col_expr(
                entity::price_conflict_group::Column::ResolvedBy,
                Expr::value(Some(resolved_by)),
            )
            .col_expr(
                entity::price_conflict_group::Column::ResolvedAt,
                Expr::value(Some(Utc::now())),
            )
            .filter(entity::price_conflict_group::Column::Id.eq(id))
            .filter(
                entity::price_conflict_group::Column::Status
                    .eq(ConflictGroupStatus::Open.as_str()),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }
}
