use super::*;

/// Tests removing a saved listing and removing it again.
///
/// Expected: Ok both times with an empty wishlist afterwards
#[tokio::test]
async fn is_idempotent() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, website, advertiser) = factory::helpers::create_listing_with_buyer(db).await?;
    let service = WishlistService::new(db);
    service.add(advertiser.id, website.id).await?;

    service.remove(advertiser.id, website.id).await?;
    service.remove(advertiser.id, website.id).await?;

    assert!(service.list(advertiser.id).await?.is_empty());

    Ok(())
}
