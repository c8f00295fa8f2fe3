use super::*;

/// Tests approving a pending listing.
///
/// Expected: Ok with status `Approved`
#[tokio::test]
async fn approves_pending_listing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_listing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_publisher(db).await?;
    let website = factory::website::create_website(db, owner.id).await?;

    let approved = WebsiteService::new(db).approve(website.id).await?;

    assert_eq!(approved.status, WebsiteStatus::Approved);

    Ok(())
}

/// Tests that review can't move listings out of a price conflict.
///
/// Expected: Err(AppError::BadRequest) for both approve and reject
#[tokio::test]
async fn fails_for_conflicted_listing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_listing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_publisher(db).await?;
    let website = factory::website::WebsiteFactory::new(db, owner.id)
        .conflict("group-1", true, None)
        .build()
        .await?;
    let service = WebsiteService::new(db);

    assert!(matches!(
        service.approve(website.id).await,
        Err(AppError::BadRequest(_))
    ));
    assert!(matches!(
        service.reject(website.id, "Spam".to_string()).await,
        Err(AppError::BadRequest(_))
    ));

    Ok(())
}

/// Tests rejecting the claim holder of a URL.
///
/// Expected: Ok with status `Rejected`, the reason stored and the claim released
#[tokio::test]
async fn rejects_and_releases_claim() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_listing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_publisher(db).await?;
    let website = factory::website::create_approved_website(db, owner.id).await?;
    factory::create_url_claim(db, &website, None).await?;

    let rejected = WebsiteService::new(db)
        .reject(website.id, "Thin content".to_string())
        .await?;

    assert_eq!(rejected.status, WebsiteStatus::Rejected);
    assert_eq!(rejected.rejection_reason.as_deref(), Some("Thin content"));
    assert!(UrlClaimRepository::new(db)
        .find(&website.normalized_url)
        .await?
        .is_none());

    Ok(())
}

/// Tests that rejecting needs a reason.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn reject_requires_reason() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_listing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_publisher(db).await?;
    let website = factory::website::create_website(db, owner.id).await?;

    let result = WebsiteService::new(db)
        .reject(website.id, "   ".to_string())
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
