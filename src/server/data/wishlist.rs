//! Wishlist repository.
//!
//! The unique index on `(user_id, website_id)` keeps one entry per user and listing, so
//! concurrent saves of the same listing collapse into a single row.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

pub struct WishlistRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WishlistRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find(
        &self,
        user_id: i32,
        website_id: i32,
    ) -> Result<Option<entity::wishlist_item::Model>, DbErr> {
        entity::prelude::WishlistItem::find()
            .filter(entity::wishlist_item::Column::UserId.eq(user_id))
            .filter(entity::wishlist_item::Column::WebsiteId.eq(website_id))
            .one(self.db)
            .await
    }

    /// Saves a listing to a user's wishlist unless it is already there.
    ///
    /// # Returns
    /// - `Ok(Model)` - The new entry, or the existing one when the listing was already saved
    /// - `Err(DbErr)` - Database error during insert or read back
    pub async fn create(
        &self,
        user_id: i32,
        website_id: i32,
    ) -> Result<entity::wishlist_item::Model, DbErr> {
        entity::prelude::WishlistItem::insert(entity::wishlist_item::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            website_id: ActiveValue::Set(website_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::columns([
                entity::wishlist_item::Column::UserId,
                entity::wishlist_item::Column::WebsiteId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        self.find(user_id, website_id).await?.ok_or_else(|| {
            DbErr::RecordNotFound(format!(
                "Wishlist entry for user {} and website {}",
                user_id, website_id
            ))
        })
    }

    /// Removes a listing from a user's wishlist.
    ///
    /// # Returns
    /// - `Ok(rows)` - Number of removed entries, 0 when the listing wasn't saved
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, user_id: i32, website_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::WishlistItem::delete_many()
            .filter(entity::wishlist_item::Column::UserId.eq(user_id))
            .filter(entity::wishlist_item::Column::WebsiteId.eq(website_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// A user's wishlist entries with their listings, newest first.
    pub async fn find_by_user_with_website(
        &self,
        user_id: i32,
    ) -> Result<Vec<(entity::wishlist_item::Model, Option<entity::website::Model>)>, DbErr> {
        entity::prelude::WishlistItem::find()
            .filter(entity::wishlist_item::Column::UserId.eq(user_id))
            .find_also_related(entity::prelude::Website)
            .order_by_desc(entity::wishlist_item::Column::CreatedAt)
            .order_by_desc(entity::wishlist_item::Column::Id)
            .all(self.db)
            .await
    }
}
