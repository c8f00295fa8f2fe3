use super::*;

/// Tests that changing the price of an approved listing sends it back for review.
///
/// Expected: Ok with status `Pending` and the new price
#[tokio::test]
async fn price_change_requires_review() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_listing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_publisher(db).await?;
    let website = factory::website::create_approved_website(db, owner.id).await?;

    let updated = WebsiteService::new(db)
        .update(edit(&website, website.price_cents + 5_000))
        .await?;

    assert_eq!(updated.status, WebsiteStatus::Pending);
    assert_eq!(updated.price_cents, website.price_cents + 5_000);
    assert_eq!(updated.name, "Renamed Blog");

    Ok(())
}

/// Tests that editing other details keeps an approved listing on the marketplace.
///
/// Expected: Ok with status still `Approved`
#[tokio::test]
async fn keeps_status_without_price_change() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_listing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_publisher(db).await?;
    let website = factory::website::create_approved_website(db, owner.id).await?;

    let updated = WebsiteService::new(db)
        .update(edit(&website, website.price_cents))
        .await?;

    assert_eq!(updated.status, WebsiteStatus::Approved);
    assert_eq!(updated.name, "Renamed Blog");

    Ok(())
}

/// Tests that listings in a price conflict are frozen.
///
/// Expected: Err(AppError::BadRequest)
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

    let result = WebsiteService::new(db)
        .update(edit(&website, website.price_cents))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests that only the owner can edit a listing.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn fails_for_non_owner() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_listing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_publisher(db).await?;
    let other = factory::user::create_publisher(db).await?;
    let website = factory::website::create_approved_website(db, owner.id).await?;

    let mut params = edit(&website, website.price_cents);
    params.owner_id = other.id;
    let result = WebsiteService::new(db).update(params).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
