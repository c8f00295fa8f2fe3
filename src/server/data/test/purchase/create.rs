use super::*;

/// Tests creating a pending purchase with the snapshotted price.
///
/// Expected: Ok with status "pending" and the given seller and price
#[tokio::test]
async fn creates_pending_purchase() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_purchase_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (publisher, website, advertiser) =
        factory::helpers::create_listing_with_buyer(db).await?;

    let repo = PurchaseRepository::new(db);
    let purchase = repo
        .create(
            CreatePurchaseParams {
                buyer_id: advertiser.id,
                website_id: website.id,
                placement: PlacementType::LinkInsertion,
                notes: Some("Anchor on homepage".to_string()),
            },
            publisher.id,
            website.price_cents,
        )
        .await?;

    assert_eq!(purchase.buyer_id, advertiser.id);
    assert_eq!(purchase.seller_id, publisher.id);
    assert_eq!(purchase.price_cents, website.price_cents);
    assert_eq!(purchase.placement, "linkInsertion");
    assert_eq!(purchase.status, "pending");
    assert!(purchase.payment_reference.is_none());

    Ok(())
}
