use super::*;

/// Tests refunding a paid purchase.
///
/// Expected: Ok with status `Refunded`
#[tokio::test]
async fn refunds_paid_purchase() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_purchase_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, purchase) =
        factory::helpers::create_purchase_with_dependencies(db, "paid").await?;

    let refunded = PurchaseService::new(db).refund(purchase.id).await?;

    assert_eq!(refunded.status, PurchaseStatus::Refunded);

    Ok(())
}

/// Tests that completed purchases can't be refunded.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn fails_for_completed_purchase() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_purchase_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, purchase) =
        factory::helpers::create_purchase_with_dependencies(db, "completed").await?;

    let result = PurchaseService::new(db).refund(purchase.id).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}
