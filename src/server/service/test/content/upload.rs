use super::*;

/// Tests the buyer uploading content for a paid purchase.
///
/// Expected: Ok with the content stored for the purchase
#[tokio::test]
async fn buyer_uploads_for_paid_purchase() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_purchase_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, advertiser, purchase) =
        factory::helpers::create_purchase_with_dependencies(db, "paid").await?;

    let content = ContentService::new(db)
        .upload(article(purchase.id, advertiser.id))
        .await?;

    assert_eq!(content.purchase_id, purchase.id);
    assert_eq!(content.author_id, advertiser.id);

    Ok(())
}

/// Tests that content needs a paid purchase.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn fails_for_pending_purchase() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_purchase_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, advertiser, purchase) =
        factory::helpers::create_purchase_with_dependencies(db, "pending").await?;

    let result = ContentService::new(db)
        .upload(article(purchase.id, advertiser.id))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests that the seller can't upload the buyer's content.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn fails_for_seller() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_purchase_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (publisher, _, _, purchase) =
        factory::helpers::create_purchase_with_dependencies(db, "paid").await?;

    let result = ContentService::new(db)
        .upload(article(purchase.id, publisher.id))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
