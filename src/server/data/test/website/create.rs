use super::*;

/// Tests inserting a new listing.
///
/// Verifies that the listing is stored in pending status without any conflict
/// links and with the normalized URL passed by the caller.
///
/// Expected: Ok with a pending listing
#[tokio::test]
async fn creates_pending_listing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_listing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_publisher(db).await?;

    let repo = WebsiteRepository::new(db);
    let website = repo
        .create(
            &CreateWebsiteParams {
                owner_id: owner.id,
                url: " https://www.Example.com/ ".to_string(),
                name: "Example".to_string(),
                description: Some("Tech blog".to_string()),
                category: "technology".to_string(),
                price_cents: 25_000,
                domain_authority: Some(40),
                monthly_traffic: Some(12_000),
            },
            "example.com",
        )
        .await?;

    assert_eq!(website.owner_id, owner.id);
    assert_eq!(website.url, "https://www.Example.com/");
    assert_eq!(website.normalized_url, "example.com");
    assert_eq!(website.status, "pending");
    assert_eq!(website.price_cents, 25_000);
    assert!(!website.is_original);
    assert!(website.conflict_group_id.is_none());
    assert!(website.conflicts_with_id.is_none());

    Ok(())
}

/// Tests inserting a listing for an unknown owner.
///
/// Expected: Err(DbErr) from the foreign key constraint
#[tokio::test]
async fn fails_for_unknown_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_listing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = WebsiteRepository::new(db);
    let result = repo
        .create(
            &CreateWebsiteParams {
                owner_id: 999,
                url: "example.com".to_string(),
                name: "Example".to_string(),
                description: None,
                category: "technology".to_string(),
                price_cents: 1_000,
                domain_authority: None,
                monthly_traffic: None,
            },
            "example.com",
        )
        .await;

    assert!(result.is_err());

    Ok(())
}
