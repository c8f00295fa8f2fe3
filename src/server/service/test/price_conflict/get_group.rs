use super::*;

/// Tests loading an open group with its members.
///
/// Expected: Ok(Some) with both members oldest first, and the group listed as open
#[tokio::test]
async fn returns_group_with_members() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_listing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (group_id, original, challenger) = create_open_conflict(db).await?;
    let service = PriceConflictService::new(db);

    let group = service.get_group(&group_id).await?.unwrap();

    assert_eq!(group.status, ConflictGroupStatus::Open);
    assert_eq!(group.original_website_id, original.id);
    let member_ids: Vec<i32> = group.members.iter().map(|m| m.id).collect();
    assert_eq!(member_ids, vec![original.id, challenger.id]);

    let open = service.list_open().await?;
    assert_eq!(open.len(), 1);
    assert_eq!(open[0].id, group_id);

    assert!(service.get_group("missing").await?.is_none());

    Ok(())
}
