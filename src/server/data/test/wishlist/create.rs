use super::*;

/// Tests saving a listing that another request already saved.
///
/// Expected: Ok with the existing entry and no second row
#[tokio::test]
async fn returns_existing_entry_on_conflict() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, website, advertiser) = factory::helpers::create_listing_with_buyer(db).await?;

    let repo = WishlistRepository::new(db);
    let first = repo.create(advertiser.id, website.id).await?;
    let second = repo.create(advertiser.id, website.id).await?;

    assert_eq!(first.id, second.id);
    assert_eq!(first.created_at, second.created_at);
    assert_eq!(repo.find_by_user_with_website(advertiser.id).await?.len(), 1);

    Ok(())
}
