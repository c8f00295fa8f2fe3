//! Ad request factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a pending ad request from `advertiser_id` for `website`.
pub async fn create_ad_request(
    db: &DatabaseConnection,
    website: &entity::website::Model,
    advertiser_id: i32,
) -> Result<entity::ad_request::Model, DbErr> {
    entity::ad_request::ActiveModel {
        website_id: ActiveValue::Set(website.id),
        advertiser_id: ActiveValue::Set(advertiser_id),
        publisher_id: ActiveValue::Set(website.owner_id),
        message: ActiveValue::Set("Interested in a sponsored review".to_string()),
        budget_cents: ActiveValue::Set(Some(5_000)),
        status: ActiveValue::Set("pending".to_string()),
        created_at: ActiveValue::Set(Utc::now()),
        responded_at: ActiveValue::Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
}
