//! URL claim factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a claim on `website.normalized_url` held by `website`.
///
/// # Arguments
/// - `db` - Database connection
/// - `website` - Listing that holds the claim
/// - `conflict_group_id` - Open conflict group recorded on the claim, if any
pub async fn create_url_claim(
    db: &DatabaseConnection,
    website: &entity::website::Model,
    conflict_group_id: Option<String>,
) -> Result<entity::website_url_claim::Model, DbErr> {
    entity::website_url_claim::ActiveModel {
        normalized_url: ActiveValue::Set(website.normalized_url.clone()),
        website_id: ActiveValue::Set(website.id),
        conflict_group_id: ActiveValue::Set(conflict_group_id),
        claimed_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
