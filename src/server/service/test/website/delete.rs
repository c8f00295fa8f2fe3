use super::*;

/// Tests deleting a listing that holds its URL claim.
///
/// Expected: Ok with the row gone and the claim released
#[tokio::test]
async fn deletes_and_releases_claim() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_listing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_publisher(db).await?;
    let website = factory::website::create_approved_website(db, owner.id).await?;
    factory::create_url_claim(db, &website, None).await?;

    WebsiteService::new(db).delete(owner.id, website.id).await?;

    assert!(WebsiteRepository::new(db)
        .find_by_id(website.id)
        .await?
        .is_none());
    assert!(UrlClaimRepository::new(db)
        .find(&website.normalized_url)
        .await?
        .is_none());

    Ok(())
}

/// Tests that conflicted listings can't be deleted.
///
/// Expected: Err(AppError::BadRequest) and the listing kept
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

    let result = WebsiteService::new(db).delete(owner.id, website.id).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert!(WebsiteRepository::new(db)
        .find_by_id(website.id)
        .await?
        .is_some());

    Ok(())
}

/// Tests deleting a listing that doesn't exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_missing_listing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_listing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_publisher(db).await?;

    let result = WebsiteService::new(db).delete(owner.id, 999).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
