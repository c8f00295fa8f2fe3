use super::*;

/// Tests switching an advertiser to the publisher role.
///
/// Expected: Ok(true) with role stored as "publisher"
#[tokio::test]
async fn switches_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_advertiser(db).await?;

    let repo = UserRepository::new(db);
    let updated = repo.set_role(user.id, UserRole::Publisher).await?;

    assert!(updated);
    let user = repo.find_by_id(user.id).await?.unwrap();
    assert_eq!(user.role, "publisher");

    Ok(())
}
