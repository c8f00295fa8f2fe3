//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a publisher, an approved listing owned by them and an advertiser.
///
/// Requires the listing tables.
///
/// # Returns
/// - `Ok((publisher, website, advertiser))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_listing_with_buyer(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::website::Model,
        entity::user::Model,
    ),
    DbErr,
> {
    let publisher = crate::factory::user::create_publisher(db).await?;
    let website = crate::factory::website::create_approved_website(db, publisher.id).await?;
    let advertiser = crate::factory::user::create_advertiser(db).await?;

    Ok((publisher, website, advertiser))
}

/// Creates a purchase with its publisher, listing and buyer.
///
/// Requires the purchase tables. The purchase is created with `status`.
///
/// # Returns
/// - `Ok((publisher, website, advertiser, purchase))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_purchase_with_dependencies(
    db: &DatabaseConnection,
    status: &str,
) -> Result<
    (
        entity::user::Model,
        entity::website::Model,
        entity::user::Model,
        entity::purchase::Model,
    ),
    DbErr,
> {
    let (publisher, website, advertiser) = create_listing_with_buyer(db).await?;
    let purchase = crate::factory::purchase::PurchaseFactory::new(db, &website, advertiser.id)
        .status(status)
        .build()
        .await?;

    Ok((publisher, website, advertiser, purchase))
}
