use super::*;

/// Tests submitting a listing for a new URL.
///
/// Expected: Ok with a pending listing, the normalized URL stored and claimed
#[tokio::test]
async fn submits_pending_listing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_listing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_publisher(db).await?;

    let website = WebsiteService::new(db)
        .submit(submission(owner.id, "HTTPS://WWW.Example.com/Blog/?a=1"))
        .await?;

    assert_eq!(website.status, WebsiteStatus::Pending);
    assert_eq!(website.normalized_url, "example.com/Blog");
    assert_eq!(website.owner_id, owner.id);

    let claim = UrlClaimRepository::new(db)
        .find("example.com/Blog")
        .await?
        .unwrap();
    assert_eq!(claim.website_id, website.id);

    Ok(())
}

/// Tests that a different scheme and `www.` prefix still collide with an existing listing.
///
/// Expected: Ok with the second listing in `PriceConflict` against the first
#[tokio::test]
async fn other_publisher_lands_in_conflict() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_listing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first_owner = factory::user::create_publisher(db).await?;
    let second_owner = factory::user::create_publisher(db).await?;
    let service = WebsiteService::new(db);

    let first = service
        .submit(submission(first_owner.id, "https://example.com/blog"))
        .await?;
    let second = service
        .submit(submission(second_owner.id, "http://www.example.com/blog/"))
        .await?;

    assert_eq!(second.status, WebsiteStatus::PriceConflict);
    assert_eq!(second.conflicts_with_id, Some(first.id));

    let first = WebsiteRepository::new(db)
        .find_by_id(first.id)
        .await?
        .unwrap();
    assert_eq!(first.status, "priceConflict");
    assert!(first.is_original);

    Ok(())
}

/// Tests that a publisher can't submit a URL they already list.
///
/// Expected: Err(AppError::BadRequest) and no second row
#[tokio::test]
async fn rejects_duplicate_from_same_owner() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_listing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_publisher(db).await?;
    let service = WebsiteService::new(db);

    service
        .submit(submission(owner.id, "https://example.com"))
        .await?;
    let result = service
        .submit(submission(owner.id, "example.com/"))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    let owned = WebsiteRepository::new(db)
        .find_active_by_normalized_url("example.com")
        .await?;
    assert_eq!(owned.len(), 1);

    Ok(())
}

/// Tests validation of listing details and URL.
///
/// Expected: Err(AppError::BadRequest) for a zero price and for an ftp URL
#[tokio::test]
async fn rejects_invalid_submission() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_listing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_publisher(db).await?;
    let service = WebsiteService::new(db);

    let mut free = submission(owner.id, "https://example.com");
    free.price_cents = 0;

    assert!(matches!(
        service.submit(free).await,
        Err(AppError::BadRequest(_))
    ));
    assert!(matches!(
        service
            .submit(submission(owner.id, "ftp://example.com"))
            .await,
        Err(AppError::BadRequest(_))
    ));

    Ok(())
}
