use super::*;

/// Tests attaching a group to a claim without one, then losing a second attempt.
///
/// Expected: first call Ok(true), second call Ok(false) with the first group kept
#[tokio::test]
async fn only_first_group_is_attached() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_listing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_publisher(db).await?;
    let website = factory::website::create_website(db, owner.id).await?;
    factory::url_claim::create_url_claim(db, &website, None).await?;

    let repo = UrlClaimRepository::new(db);

    assert!(repo
        .set_group_if_unset(&website.normalized_url, "group-a")
        .await?);
    assert!(!repo
        .set_group_if_unset(&website.normalized_url, "group-b")
        .await?);

    let claim = repo.find(&website.normalized_url).await?.unwrap();
    assert_eq!(claim.conflict_group_id.as_deref(), Some("group-a"));

    Ok(())
}
