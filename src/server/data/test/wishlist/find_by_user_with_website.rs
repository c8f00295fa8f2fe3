use super::*;

/// Tests loading a user's wishlist with the saved listings.
///
/// Expected: Ok with one entry carrying its listing, other users' entries excluded
#[tokio::test]
async fn returns_entries_with_listing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, website, advertiser) = factory::helpers::create_listing_with_buyer(db).await?;
    let other = factory::user::create_advertiser(db).await?;

    let repo = WishlistRepository::new(db);
    repo.create(advertiser.id, website.id).await?;
    repo.create(other.id, website.id).await?;

    let items = repo.find_by_user_with_website(advertiser.id).await?;

    assert_eq!(items.len(), 1);
    let (item, listing) = &items[0];
    assert_eq!(item.user_id, advertiser.id);
    assert_eq!(listing.as_ref().map(|w| w.id), Some(website.id));

    Ok(())
}
