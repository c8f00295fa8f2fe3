use super::*;

/// Tests deleting a listing together with its URL claim.
///
/// Expected: Ok(1) with the listing and its claim removed
#[tokio::test]
async fn deletes_listing_and_cascades_claim() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_listing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_publisher(db).await?;
    let website = factory::website::create_website(db, owner.id).await?;
    factory::url_claim::create_url_claim(db, &website, None).await?;

    let repo = WebsiteRepository::new(db);
    let rows = repo.delete(website.id).await?;

    assert_eq!(rows, 1);
    assert!(repo.find_by_id(website.id).await?.is_none());

    let claim = crate::server::data::url_claim::UrlClaimRepository::new(db)
        .find(&website.normalized_url)
        .await?;
    assert!(claim.is_none());

    Ok(())
}

/// Tests that a listing in a price conflict can't be deleted.
///
/// Expected: Ok(0) with the listing still present
#[tokio::test]
async fn refuses_listing_in_conflict() -> Result<(), DbErr> {
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

    let repo = WebsiteRepository::new(db);
    let rows = repo.delete(website.id).await?;

    assert_eq!(rows, 0);
    assert!(repo.find_by_id(website.id).await?.is_some());

    Ok(())
}
