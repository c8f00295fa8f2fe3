use super::*;

/// Tests who may read uploaded content.
///
/// Expected: Ok for the seller and admins, AccessDenied for anyone else
#[tokio::test]
async fn restricts_to_parties_and_admins() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_purchase_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (publisher, _, advertiser, purchase) =
        factory::helpers::create_purchase_with_dependencies(db, "paid").await?;
    let stranger = factory::user::create_advertiser(db).await?;
    let service = ContentService::new(db);
    service.upload(article(purchase.id, advertiser.id)).await?;

    assert_eq!(
        service
            .list_for_purchase(publisher.id, false, purchase.id)
            .await?
            .len(),
        1
    );
    assert_eq!(
        service
            .list_for_purchase(stranger.id, true, purchase.id)
            .await?
            .len(),
        1
    );
    assert!(matches!(
        service
            .list_for_purchase(stranger.id, false, purchase.id)
            .await,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
