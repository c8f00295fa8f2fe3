//! Purchase factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating purchases of a listing.
///
/// Seller and price are taken from the listing the purchase is built for.
pub struct PurchaseFactory<'a> {
    db: &'a DatabaseConnection,
    website_id: i32,
    seller_id: i32,
    buyer_id: i32,
    price_cents: i64,
    placement: String,
    status: String,
    payment_reference: Option<String>,
}

impl<'a> PurchaseFactory<'a> {
    /// Creates a new PurchaseFactory for `website` bought by `buyer_id`.
    ///
    /// Defaults:
    /// - placement: `"guestPost"`
    /// - status: `"pending"`
    pub fn new(db: &'a DatabaseConnection, website: &entity::website::Model, buyer_id: i32) -> Self {
        Self {
            db,
            website_id: website.id,
            seller_id: website.owner_id,
            buyer_id,
            price_cents: website.price_cents,
            placement: "guestPost".to_string(),
            status: "pending".to_string(),
            payment_reference: None,
        }
    }

    pub fn placement(mut self, placement: impl Into<String>) -> Self {
        self.placement = placement.into();
        self
    }

    /// Sets the status. Non-pending statuses also get a payment reference.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        if self.status != "pending" && self.status != "cancelled" {
            self.payment_reference = Some("pay_test".to_string());
        }
        self
    }

    pub async fn build(self) -> Result<entity::purchase::Model, DbErr> {
        let now = Utc::now();
        entity::purchase::ActiveModel {
            website_id: ActiveValue::Set(self.website_id),
            buyer_id: ActiveValue::Set(self.buyer_id),
            seller_id: ActiveValue::Set(self.seller_id),
            price_cents: ActiveValue::Set(self.price_cents),
            placement: ActiveValue::Set(self.placement),
            status: ActiveValue::Set(self.status),
            payment_reference: ActiveValue::Set(self.payment_reference),
            live_url: ActiveValue::Set(None),
            notes: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending guest post purchase of `website` by `buyer_id`.
pub async fn create_purchase(
    db: &DatabaseConnection,
    website: &entity::website::Model,
    buyer_id: i32,
) -> Result<entity::purchase::Model, DbErr> {
    PurchaseFactory::new(db, website, buyer_id).build().await
}
