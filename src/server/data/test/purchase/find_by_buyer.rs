use super::*;

/// Tests listing purchases per buyer and per seller.
///
/// Expected: Ok with the buyer's purchases only, and the seller seeing both
#[tokio::test]
async fn separates_buyers_and_sellers() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_purchase_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (publisher, website, advertiser) =
        factory::helpers::create_listing_with_buyer(db).await?;
    let other_buyer = factory::user::create_advertiser(db).await?;

    let first = factory::purchase::create_purchase(db, &website, advertiser.id).await?;
    let second = factory::purchase::create_purchase(db, &website, other_buyer.id).await?;

    let repo = PurchaseRepository::new(db);

    let bought = repo.find_by_buyer(advertiser.id).await?;
    assert_eq!(bought.len(), 1);
    assert_eq!(bought[0].id, first.id);

    let sold = repo.find_by_seller(publisher.id).await?;
    let ids: Vec<i32> = sold.iter().map(|p| p.id).collect();
    assert_eq!(ids.len(), 2);
    assert!(ids.contains(&first.id));
    assert!(ids.contains(&second.id));

    let (all, total) = repo.get_all_paginated(0, 10).await?;
    assert_eq!(total, 2);
    assert_eq!(all.len(), 2);

    Ok(())
}
