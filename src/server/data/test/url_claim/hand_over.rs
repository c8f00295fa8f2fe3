use super::*;

/// Tests handing a claim to another listing.
///
/// Expected: Ok(true) with the new holder and the conflict group cleared
#[tokio::test]
async fn moves_claim_and_clears_group() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_listing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_publisher(db).await?;
    let other = factory::user::create_publisher(db).await?;
    let holder = factory::website::WebsiteFactory::new(db, owner.id)
        .url("https://shared.example.com")
        .build()
        .await?;
    let next = factory::website::WebsiteFactory::new(db, other.id)
        .url("https://shared.example.com")
        .build()
        .await?;
    factory::url_claim::create_url_claim(db, &holder, Some("group-1".to_string())).await?;

    let repo = UrlClaimRepository::new(db);
    let moved = repo
        .hand_over("shared.example.com", holder.id, next.id)
        .await?;

    assert!(moved);
    let claim = repo.find("shared.example.com").await?.unwrap();
    assert_eq!(claim.website_id, next.id);
    assert!(claim.conflict_group_id.is_none());

    Ok(())
}

/// Tests that a stale expected holder doesn't move the claim.
///
/// Expected: Ok(false)
#[tokio::test]
async fn skips_when_holder_changed() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_listing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_publisher(db).await?;
    let holder = factory::website::create_website(db, owner.id).await?;
    factory::url_claim::create_url_claim(db, &holder, None).await?;

    let repo = UrlClaimRepository::new(db);
    let moved = repo
        .hand_over(&holder.normalized_url, holder.id + 100, holder.id)
        .await?;

    assert!(!moved);

    Ok(())
}
