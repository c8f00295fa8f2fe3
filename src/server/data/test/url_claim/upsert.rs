use super::*;

/// Tests creating a missing claim and overwriting an existing one.
///
/// Expected: Ok with the claim pointing at the last holder and group
#[tokio::test]
async fn creates_then_overwrites_claim() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_listing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_publisher(db).await?;
    let other = factory::user::create_publisher(db).await?;
    let first = factory::website::WebsiteFactory::new(db, owner.id)
        .url("https://shared.example.com")
        .build()
        .await?;
    let second = factory::website::WebsiteFactory::new(db, other.id)
        .url("https://shared.example.com")
        .build()
        .await?;

    let repo = UrlClaimRepository::new(db);

    repo.upsert("shared.example.com", first.id, None).await?;
    let claim = repo.find("shared.example.com").await?.unwrap();
    assert_eq!(claim.website_id, first.id);

    repo.upsert("shared.example.com", second.id, Some("group-1".to_string()))
        .await?;
    let claim = repo.find("shared.example.com").await?.unwrap();
    assert_eq!(claim.website_id, second.id);
    assert_eq!(claim.conflict_group_id.as_deref(), Some("group-1"));

    assert_eq!(repo.find_all().await?.len(), 1);

    Ok(())
}
