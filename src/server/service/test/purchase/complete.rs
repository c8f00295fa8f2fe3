use super::*;

/// Tests the seller completing a paid purchase.
///
/// Expected: Ok with status `Completed` and the live URL stored
#[tokio::test]
async fn seller_completes_paid_purchase() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_purchase_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (publisher, _, _, purchase) =
        factory::helpers::create_purchase_with_dependencies(db, "paid").await?;

    let completed = PurchaseService::new(db)
        .complete(
            publisher.id,
            purchase.id,
            "https://blog.example.com/sponsored".to_string(),
        )
        .await?;

    assert_eq!(completed.status, PurchaseStatus::Completed);
    assert_eq!(
        completed.live_url.as_deref(),
        Some("https://blog.example.com/sponsored")
    );

    Ok(())
}

/// Tests that an unpaid purchase can't be completed.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn fails_for_unpaid_purchase() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_purchase_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (publisher, _, _, purchase) =
        factory::helpers::create_purchase_with_dependencies(db, "pending").await?;

    let result = PurchaseService::new(db)
        .complete(
            publisher.id,
            purchase.id,
            "https://blog.example.com/sponsored".to_string(),
        )
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests that the live URL must parse.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn fails_for_invalid_live_url() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_purchase_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (publisher, _, _, purchase) =
        factory::helpers::create_purchase_with_dependencies(db, "paid").await?;

    let result = PurchaseService::new(db)
        .complete(publisher.id, purchase.id, "not a url".to_string())
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
