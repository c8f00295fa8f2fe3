use super::*;

/// Tests that a request can only be answered once.
///
/// Expected: first answer Ok(true), second Ok(false) with the first answer kept
#[tokio::test]
async fn answers_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, website, advertiser) = factory::helpers::create_listing_with_buyer(db).await?;
    let request = factory::ad_request::create_ad_request(db, &website, advertiser.id).await?;

    let repo = AdRequestRepository::new(db);

    assert!(
        repo.respond_if_pending(request.id, AdRequestStatus::Accepted)
            .await?
    );
    assert!(
        !repo
            .respond_if_pending(request.id, AdRequestStatus::Declined)
            .await?
    );

    let answered = repo.find_by_id(request.id).await?.unwrap();
    assert_eq!(answered.status, "accepted");
    assert!(answered.responded_at.is_some());

    Ok(())
}
