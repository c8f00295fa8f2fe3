use crate::server::{
    data::{
        price_conflict_group::PriceConflictGroupRepository, url_claim::UrlClaimRepository,
        website::WebsiteRepository,
    },
    error::AppError,
    model::{
        price_conflict::{ConflictGroupStatus, ReconciliationReport, ResolveConflictParams},
        website::{Website, WebsiteStatus},
    },
    service::price_conflict::{reconcile::ConflictReconciler, PriceConflictService},
};
use chrono::{Duration, Utc};
use sea_orm::{DatabaseConnection, DbErr};
use test_utils::{builder::TestBuilder, factory};

mod get_group;

/// Creates an open conflict group for `https://shared.example.com` with two members.
///
/// # Returns
/// - `(group_id, original, challenger)` - The first listing is the group original
async fn create_open_conflict(
    db: &DatabaseConnection,
) -> Result<(String, entity::website::Model, entity::website::Model), DbErr> {
    let group_id = "8f14e45f-ceea-4e7a-9b2c-3f1d2a5b6c7d".to_string();

    let first_owner = factory::user::create_publisher(db).await?;
    let second_owner = factory::user::create_publisher(db).await?;

    let original = factory::website::WebsiteFactory::new(db, first_owner.id)
        .url("https://shared.example.com")
        .conflict(group_id.clone(), true, None)
        .created_at(Utc::now() - Duration::days(2))
        .build()
        .await?;
    let challenger = factory::website::WebsiteFactory::new(db, second_owner.id)
        .url("https://shared.example.com")
        .conflict(group_id.clone(), false, Some(original.id))
        .build()
        .await?;

    PriceConflictGroupRepository::new(db)
        .create(&group_id, &original.normalized_url, original.id)
        .await?;
    factory::create_url_claim(db, &original, Some(group_id.clone())).await?;

    Ok((group_id, original, challenger))
}
