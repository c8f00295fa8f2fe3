use super::*;

/// Tests removing a saved listing twice.
///
/// Expected: first removal Ok(1), second Ok(0)
#[tokio::test]
async fn removes_entry_idempotently() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, website, advertiser) = factory::helpers::create_listing_with_buyer(db).await?;

    let repo = WishlistRepository::new(db);
    repo.create(advertiser.id, website.id).await?;

    assert_eq!(repo.delete(advertiser.id, website.id).await?, 1);
    assert_eq!(repo.delete(advertiser.id, website.id).await?, 0);
    assert!(repo.find(advertiser.id, website.id).await?.is_none());

    Ok(())
}
