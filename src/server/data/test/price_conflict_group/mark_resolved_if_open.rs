use super::*;

/// Tests that a group can be resolved exactly once.
///
/// Verifies the compare-and-swap on the open status: the first call records the
/// winner and the second call leaves the first resolution untouched.
///
/// Expected: first call Ok(true), second call Ok(false) with the first winner kept
#[tokio::test]
async fn resolves_exactly_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_listing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PriceConflictGroupRepository::new(db);
    repo.create("group-1", "shared.example.com", 1).await?;

    assert!(repo.mark_resolved_if_open("group-1", 1, 10).await?);
    assert!(!repo.mark_resolved_if_open("group-1", 2, 11).await?);

    let group = repo.find_by_id("group-1").await?.unwrap();
    assert_eq!(group.status, "resolved");
    assert_eq!(group.winner_website_id, Some(1));
    assert_eq!(group.resolved_by, Some(10));
    assert!(group.resolved_at.is_some());

    Ok(())
}

/// Tests resolving a group that doesn't exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn reports_missing_group() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_listing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PriceConflictGroupRepository::new(db);

    assert!(!repo.mark_resolved_if_open("missing", 1, 10).await?);

    Ok(())
}
