use super::*;

/// Tests creating a new user on first login.
///
/// Verifies that the repository inserts an advertiser without admin privileges
/// when no user with the subject exists.
///
/// Expected: Ok with a new advertiser user
#[tokio::test]
async fn creates_new_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .upsert(UpsertUserParam {
            subject: "oauth|123".to_string(),
            email: "jane@example.com".to_string(),
            name: "Jane".to_string(),
        })
        .await?;

    assert_eq!(user.subject, "oauth|123");
    assert_eq!(user.email, "jane@example.com");
    assert_eq!(user.name, "Jane");
    assert_eq!(user.role, "advertiser");
    assert!(!user.admin);

    Ok(())
}

/// Tests refreshing an existing user on a later login.
///
/// Verifies that email and name are updated while the row ID, role and admin
/// flag are preserved.
///
/// Expected: Ok with the same user ID and updated profile fields
#[tokio::test]
async fn updates_profile_and_keeps_role_and_admin() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::user::UserFactory::new(db)
        .subject("oauth|456")
        .role("publisher")
        .admin(true)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo
        .upsert(UpsertUserParam {
            subject: "oauth|456".to_string(),
            email: "new@example.com".to_string(),
            name: "Renamed".to_string(),
        })
        .await?;

    assert_eq!(user.id, existing.id);
    assert_eq!(user.email, "new@example.com");
    assert_eq!(user.name, "Renamed");
    assert_eq!(user.role, "publisher");
    assert!(user.admin);

    Ok(())
}
