//! Wishlist entries.

use chrono::{DateTime, Utc};

use crate::{model::wishlist::WishlistItemDto, server::model::website::Website};

/// A listing saved by a user, with the listing itself.
#[derive(Debug, Clone, PartialEq)]
pub struct WishlistItem {
    pub id: i32,
    pub user_id: i32,
    pub added_at: DateTime<Utc>,
    pub website: Website,
}

impl WishlistItem {
    pub fn into_dto(self) -> WishlistItemDto {
        WishlistItemDto {
            id: self.id,
            added_at: self.added_at,
            website: self.website.into_dto(),
        }
    }
}
