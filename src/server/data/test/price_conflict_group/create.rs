use super::*;

/// Tests creating an open conflict group.
///
/// Expected: Ok with status "open" and no resolution data
#[tokio::test]
async fn creates_open_group() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_listing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PriceConflictGroupRepository::new(db);
    let group = repo.create("group-1", "shared.example.com", 7).await?;

    assert_eq!(group.id, "group-1");
    assert_eq!(group.normalized_url, "shared.example.com");
    assert_eq!(group.original_website_id, 7);
    assert_eq!(group.status, "open");
    assert!(group.winner_website_id.is_none());
    assert!(group.resolved_at.is_none());

    let found = repo.find_by_id("group-1").await?;
    assert_eq!(found, Some(group));

    Ok(())
}
