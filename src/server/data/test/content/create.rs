use super::*;

/// Tests storing content for a purchase and reading it back.
///
/// Expected: Ok with the content listed under its purchase only
#[tokio::test]
async fn stores_content_for_purchase() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_purchase_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, website, advertiser, purchase) =
        factory::helpers::create_purchase_with_dependencies(db, "paid").await?;
    let other_purchase = factory::purchase::create_purchase(db, &website, advertiser.id).await?;

    let repo = ContentRepository::new(db);
    let content = repo
        .create(UploadContentParams {
            purchase_id: purchase.id,
            author_id: advertiser.id,
            title: "10 tips".to_string(),
            body: "Body text".to_string(),
            anchor_text: Some("best tips".to_string()),
            target_url: Some("https://advertiser.example.com".to_string()),
        })
        .await?;

    assert_eq!(content.purchase_id, purchase.id);
    assert_eq!(content.author_id, advertiser.id);

    let listed = repo.find_by_purchase(purchase.id).await?;
    assert_eq!(listed, vec![content]);
    assert!(repo.find_by_purchase(other_purchase.id).await?.is_empty());

    Ok(())
}
