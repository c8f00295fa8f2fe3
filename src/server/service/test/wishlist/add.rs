use super::*;

/// Tests that saving a listing twice keeps a single entry.
///
/// Expected: Ok with the same entry ID both times and one item listed
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

    let first = service.add(advertiser.id, website.id).await?;
    let second = service.add(advertiser.id, website.id).await?;

    assert_eq!(first.id, second.id);
    let items = service.list(advertiser.id).await?;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].website.id, website.id);

    Ok(())
}

/// Tests that only marketplace listings can be saved.
///
/// Expected: BadRequest for a pending listing, NotFound for a missing one
#[tokio::test]
async fn fails_for_unavailable_listing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let publisher = factory::user::create_publisher(db).await?;
    let advertiser = factory::user::create_advertiser(db).await?;
    let pending = factory::website::create_website(db, publisher.id).await?;
    let service = WishlistService::new(db);

    assert!(matches!(
        service.add(advertiser.id, pending.id).await,
        Err(AppError::BadRequest(_))
    ));
    assert!(matches!(
        service.add(advertiser.id, 999).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests that two simultaneous saves of the same listing share one entry.
///
/// Expected: both Ok with the same entry ID and a single item listed
#[tokio::test]
async fn concurrent_adds_keep_single_entry() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, website, advertiser) = factory::helpers::create_listing_with_buyer(db).await?;
    let first_service = WishlistService::new(db);
    let second_service = WishlistService::new(db);

    let (first, second) = tokio::join!(
        first_service.add(advertiser.id, website.id),
        second_service.add(advertiser.id, website.id)
    );
    let (first, second) = (first?, second?);

    assert_eq!(first.id, second.id);
    assert_eq!(first_service.list(advertiser.id).await?.len(), 1);

    Ok(())
}
