use super::*;

/// Tests resolving the current user without a login.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_login() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let allowlist = SuperAdminAllowlist::default();
    let guard = AuthGuard::new(db, session, &allowlist);

    assert!(guard.current().await?.is_none());

    Ok(())
}

/// Tests resolving the logged in user and flagging super admins.
///
/// Expected: Ok(Some) with is_super_admin set from the allowlist
#[tokio::test]
async fn returns_logged_in_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::UserFactory::new(db)
        .email("Owner@Example.com")
        .build()
        .await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let allowlist = SuperAdminAllowlist::parse("owner@example.com", "").unwrap();
    let guard = AuthGuard::new(db, session, &allowlist);

    let current = guard.current().await?.unwrap();
    assert_eq!(current.id(), user.id);
    assert!(current.is_super_admin);
    assert!(current.is_admin());

    Ok(())
}
