//! Wishlist service.
//!
//! Adding and removing are idempotent: adding a saved listing returns the existing entry
//! and removing an unsaved one succeeds without doing anything.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{website::WebsiteRepository, wishlist::WishlistRepository},
    error::AppError,
    model::{
        website::{Website, WebsiteStatus},
        wishlist::WishlistItem,
    },
};

pub struct WishlistService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WishlistService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Saves an approved listing to a user's wishlist.
    pub async fn add(&self, user_id: i32, website_id: i32) -> Result<WishlistItem, AppError> {
        let website = WebsiteRepository::new(self.db)
            .find_by_id(website_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Website {} not found", website_id)))?;
        let website = Website::from_entity(website)?;

        if website.status != WebsiteStatus::Approved {
            return Err(AppError::BadRequest(format!(
                "Website {} is not on the marketplace",
                website_id
            )));
        }

        let item = WishlistRepository::new(self.db)
            .create(user_id, website_id)
            .await?;

        Ok(WishlistItem {
            id: item.id,
            user_id: item.user_id,
            added_at: item.created_at,
            website,
        })
    }

    pub async fn remove(&self, user_id: i32, website_id: i32) -> Result<(), AppError> {
        WishlistRepository::new(self.db)
            .delete(user_id, website_id)
            .await?;

        Ok(())
    }

    /// Gets a user's wishlist with the saved listings, newest first.
    pub async fn list(&self, user_id: i32) -> Result<Vec<WishlistItem>, AppError> {
        let rows = WishlistRepository::new(self.db)
            .find_by_user_with_website(user_id)
            .await?;

        let mut items = Vec::with_capacity(rows.len());
        for (item, website) in rows {
            let Some(website) = website else {
                continue;
            };

            items.push(WishlistItem {
                id: item.id,
                user_id: item.user_id,
                added_at: item.created_at,
                website: Website::from_entity(website)?,
            });
        }

        Ok(items)
    }
}
