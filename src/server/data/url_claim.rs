//! URL claim repository.
//!
//! A claim row records which listing holds a normalized URL. The primary key on the
//! normalized URL makes inserting a claim a compare-and-swap: of two concurrent inserts
//! only one affects a row.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    sea_query::Expr, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

pub struct UrlClaimRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UrlClaimRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Claims a normalized URL for a listing if nobody holds it yet.
    ///
    /// # Returns
    /// - `Ok(true)` - The listing now holds the claim
    /// - `Ok(false)` - Another listing already holds it
    /// - `Err(DbErr)` - Database error during insert
    pub async fn try_claim(&self, normalized_url: &str, website_id: i32) -> Result<bool, DbErr> {
        let inserted = entity::prelude::WebsiteUrlClaim::insert(entity::website_url_claim::ActiveModel {
            normalized_url: ActiveValue::Set(normalized_url.to_string()),
            website_id: ActiveValue::Set(website_id),
            conflict_group_id: ActiveValue::Set(None),
            claimed_at: ActiveValue::Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::column(entity::website_url_claim::Column::NormalizedUrl)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(inserted == 1)
    }

    pub async fn find(
        &self,
        normalized_url: &str,
    ) -> Result<Option<entity::website_url_claim::Model>, DbErr> {
        entity::prelude::WebsiteUrlClaim::find_by_id(normalized_url.to_string())
            .one(self.db)
            .await
    }

    pub async fn find_all(&self) -> Result<Vec<entity::website_url_claim::Model>, DbErr> {
        entity::prelude::WebsiteUrlClaim::find()
            .order_by_asc(entity::website_url_claim::Column::NormalizedUrl)
            .all(self.db)
            .await
    }

    /// Attaches a conflict group to a claim that has none.
    ///
    /// # Returns
    /// - `Ok(true)` - The group was attached
    /// - `Ok(false)` - The claim already points at a group (or doesn't exist)
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_group_if_unset(
        &self,
        normalized_url: &str,
        group_id: &str,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::WebsiteUrlClaim::update_many()
            .col_expr(
                entity::website_url_claim::Column::ConflictGroupId,
                Expr::value(group_id.to_string()),
            )
            .filter(entity::website_url_claim::Column::NormalizedUrl.eq(normalized_url))
            .filter(entity::website_url_claim::Column::ConflictGroupId.is_null())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Moves a claim from one listing to another, clearing its conflict group.
    ///
    /// # Returns
    /// - `Ok(true)` - The claim moved
    /// - `Ok(false)` - `from_website_id` no longer held the claim
    /// - `Err(DbErr)` - Database error during update
    pub async fn hand_over(
        &self,
        normalized_url: &str,
        from_website_id: i32,
        to_website_id: i32,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::WebsiteUrlClaim::update_many()
            .col_expr(
                entity::website_url_claim::Column::WebsiteId,
                Expr::value(to_website_id),
            )
            .col_expr(
                entity::website_url_claim::Column::ConflictGroupId,
                Expr::value(Option::<String>::None),
            )
            .col_expr(
                entity::website_url_claim::Column::ClaimedAt,
                Expr::value(Utc::now()),
            )
            .filter(entity::website_url_claim::Column::NormalizedUrl.eq(normalized_url))
            .filter(entity::website_url_claim::Column::WebsiteId.eq(from_website_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Sets the holder and conflict group of a claim, creating the claim when missing.
    pub async fn upsert(
        &self,
        normalized_url: &str,
        website_id: i32,
        conflict_group_id: Option<String>,
    ) -> Result<(), DbErr> {
        entity::prelude::WebsiteUrlClaim::insert(entity::website_url_claim::ActiveModel {
            normalized_url: ActiveValue::Set(normalized_url.to_string()),
            website_id: ActiveValue::Set(website_id),
            conflict_group_id: ActiveValue::Set(conflict_group_id),
            claimed_at: ActiveValue::Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::column(entity::website_url_claim::Column::NormalizedUrl)
                .update_columns([
                    entity::website_url_claim::Column::WebsiteId,
                    entity::website_url_claim::Column::ConflictGroupId,
                    entity::website_url_claim::Column::ClaimedAt,
                ])
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }

    /// Releases a URL if `website_id` holds it.
    ///
    /// # Returns
    /// - `Ok(true)` - The claim was released
    /// - `Ok(false)` - The listing didn't hold the claim
    /// - `Err(DbErr)` - Database error during delete
    pub async fn release(&self, normalized_url: &str, website_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::WebsiteUrlClaim::delete_many()
            .filter(entity::website_url_claim::Column::NormalizedUrl.eq(normalized_url))
            .filter(entity::website_url_claim::Column::WebsiteId.eq(website_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }
}
