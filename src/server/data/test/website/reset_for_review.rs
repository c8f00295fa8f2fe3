use super::*;

/// Tests sending a rejected conflict loser back to review.
///
/// Verifies that the status returns to pending and the rejection reason and
/// conflict links are cleared.
///
/// Expected: Ok(1) with a clean pending listing
#[tokio::test]
async fn clears_rejection_and_conflict_links() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_listing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_publisher(db).await?;
    let website = factory::website::WebsiteFactory::new(db, owner.id)
        .conflict("group-1", false, Some(1))
        .status("rejected")
        .build()
        .await?;

    let repo = WebsiteRepository::new(db);
    let rows = repo.reset_for_review(website.id).await?;

    assert_eq!(rows, 1);
    let reset = repo.find_by_id(website.id).await?.unwrap();
    assert_eq!(reset.status, "pending");
    assert!(reset.rejection_reason.is_none());
    assert!(reset.conflict_group_id.is_none());
    assert!(reset.conflicts_with_id.is_none());
    assert!(!reset.is_original);

    Ok(())
}

/// Tests that only rejected listings can be reset.
///
/// Expected: Ok(0)
#[tokio::test]
async fn skips_listing_that_is_not_rejected() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_listing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_publisher(db).await?;
    let website = factory::website::create_approved_website(db, owner.id).await?;

    let repo = WebsiteRepository::new(db);
    let rows = repo.reset_for_review(website.id).await?;

    assert_eq!(rows, 0);

    Ok(())
}
