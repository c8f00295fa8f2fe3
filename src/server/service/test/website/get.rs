use super::*;

/// Tests visibility of a listing that isn't approved.
///
/// Expected: NotFound for strangers and anonymous viewers, Ok for the owner and admins
#[tokio::test]
async fn hides_unapproved_listing_from_others() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_listing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_publisher(db).await?;
    let stranger = factory::user::create_advertiser(db).await?;
    let website = factory::website::create_website(db, owner.id).await?;
    let service = WebsiteService::new(db);

    assert!(matches!(
        service.get(website.id, None, false).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        service.get(website.id, Some(stranger.id), false).await,
        Err(AppError::NotFound(_))
    ));
    assert_eq!(
        service.get(website.id, Some(owner.id), false).await?.id,
        website.id
    );
    assert_eq!(
        service.get(website.id, Some(stranger.id), true).await?.id,
        website.id
    );

    Ok(())
}

/// Tests that approved listings are public.
///
/// Expected: Ok for an anonymous viewer
#[tokio::test]
async fn shows_approved_listing_to_everyone() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_listing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_publisher(db).await?;
    let website = factory::website::create_approved_website(db, owner.id).await?;

    let found = WebsiteService::new(db).get(website.id, None, false).await?;

    assert_eq!(found.id, website.id);
    assert_eq!(found.status, WebsiteStatus::Approved);

    Ok(())
}
