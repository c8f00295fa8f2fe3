use super::*;

/// Tests granting admin status to a user.
///
/// Expected: Ok(true) with the admin flag stored
#[tokio::test]
async fn grants_admin_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    let updated = repo.set_admin(user.id, true).await?;

    assert!(updated);
    let user = repo.find_by_id(user.id).await?.unwrap();
    assert!(user.admin);

    Ok(())
}

/// Tests revoking admin status from a user.
///
/// Expected: Ok(true) with the admin flag cleared
#[tokio::test]
async fn revokes_admin_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::create_admin(db).await?;

    let repo = UserRepository::new(db);
    let updated = repo.set_admin(admin.id, false).await?;

    assert!(updated);
    let user = repo.find_by_id(admin.id).await?.unwrap();
    assert!(!user.admin);

    Ok(())
}

/// Tests setting admin status for a non-existent user.
///
/// Expected: Ok(false)
#[tokio::test]
async fn reports_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let updated = repo.set_admin(999, true).await?;

    assert!(!updated);

    Ok(())
}
