use super::*;

/// Tests sending a request to the publisher of an approved listing.
///
/// Expected: Ok with a pending request addressed to the listing owner
#[tokio::test]
async fn sends_request_to_publisher() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (publisher, website, advertiser) =
        factory::helpers::create_listing_with_buyer(db).await?;

    let request = AdRequestService::new(db)
        .create(CreateAdRequestParams {
            advertiser_id: advertiser.id,
            website_id: website.id,
            message: "Could we run a product review?".to_string(),
            budget_cents: Some(20_000),
        })
        .await?;

    assert_eq!(request.publisher_id, publisher.id);
    assert_eq!(request.status, AdRequestStatus::Pending);

    let received = AdRequestService::new(db).list_received(publisher.id).await?;
    assert_eq!(received.len(), 1);
    let sent = AdRequestService::new(db).list_sent(advertiser.id).await?;
    assert_eq!(sent[0].id, request.id);

    Ok(())
}

/// Tests the request validation rules.
///
/// Expected: Err(AppError::BadRequest) for an empty message and for the own listing
#[tokio::test]
async fn rejects_invalid_requests() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (publisher, website, advertiser) =
        factory::helpers::create_listing_with_buyer(db).await?;
    let service = AdRequestService::new(db);

    let empty = service
        .create(CreateAdRequestParams {
            advertiser_id: advertiser.id,
            website_id: website.id,
            message: "  ".to_string(),
            budget_cents: None,
        })
        .await;
    let own = service
        .create(CreateAdRequestParams {
            advertiser_id: publisher.id,
            website_id: website.id,
            message: "Self promotion".to_string(),
            budget_cents: None,
        })
        .await;

    assert!(matches!(empty, Err(AppError::BadRequest(_))));
    assert!(matches!(own, Err(AppError::BadRequest(_))));

    Ok(())
}
