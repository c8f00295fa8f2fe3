use super::*;

/// Tests the publisher accepting a request, then answering again.
///
/// Expected: Ok with status `Accepted`, then Err(AppError::Conflict)
#[tokio::test]
async fn answers_once() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (publisher, website, advertiser) =
        factory::helpers::create_listing_with_buyer(db).await?;
    let request = factory::create_ad_request(db, &website, advertiser.id).await?;
    let service = AdRequestService::new(db);

    let accepted = service.respond(publisher.id, request.id, true).await?;
    let again = service.respond(publisher.id, request.id, false).await;

    assert_eq!(accepted.status, AdRequestStatus::Accepted);
    assert!(accepted.responded_at.is_some());
    assert!(matches!(again, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests that only the receiving publisher can answer.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn fails_for_other_publisher() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, website, advertiser) = factory::helpers::create_listing_with_buyer(db).await?;
    let other = factory::user::create_publisher(db).await?;
    let request = factory::create_ad_request(db, &website, advertiser.id).await?;

    let result = AdRequestService::new(db)
        .respond(other.id, request.id, false)
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
