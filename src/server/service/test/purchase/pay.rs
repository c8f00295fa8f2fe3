use super::*;

/// Tests the buyer paying for a pending purchase.
///
/// Expected: Ok with status `Paid` and the payment reference stored
#[tokio::test]
async fn buyer_pays_pending_purchase() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_purchase_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, advertiser, purchase) =
        factory::helpers::create_purchase_with_dependencies(db, "pending").await?;

    let paid = PurchaseService::new(db)
        .pay(advertiser.id, purchase.id, "pi_123".to_string())
        .await?;

    assert_eq!(paid.status, PurchaseStatus::Paid);
    assert_eq!(paid.payment_reference.as_deref(), Some("pi_123"));

    Ok(())
}

/// Tests that paying twice only applies once.
///
/// Expected: Err(AppError::Conflict) on the second payment
#[tokio::test]
async fn second_payment_conflicts() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_purchase_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, advertiser, purchase) =
        factory::helpers::create_purchase_with_dependencies(db, "pending").await?;
    let service = PurchaseService::new(db);

    service
        .pay(advertiser.id, purchase.id, "pi_123".to_string())
        .await?;
    let second = service
        .pay(advertiser.id, purchase.id, "pi_456".to_string())
        .await;

    assert!(matches!(second, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests that only the buyer pays and the reference is required.
///
/// Expected: AccessDenied for the seller, BadRequest for an empty reference
#[tokio::test]
async fn validates_payer_and_reference() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_purchase_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (publisher, _, advertiser, purchase) =
        factory::helpers::create_purchase_with_dependencies(db, "pending").await?;
    let service = PurchaseService::new(db);

    assert!(matches!(
        service
            .pay(publisher.id, purchase.id, "pi_123".to_string())
            .await,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));
    assert!(matches!(
        service.pay(advertiser.id, purchase.id, "  ".to_string()).await,
        Err(AppError::BadRequest(_))
    ));

    Ok(())
}
