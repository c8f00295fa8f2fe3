use super::*;

/// Tests that an allowlisted email passes the super admin check.
///
/// Verifies the email match is case-insensitive.
///
/// Expected: Ok(AuthenticatedUser)
#[tokio::test]
async fn grants_access_to_allowlisted_email() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::UserFactory::new(db)
        .email("boss@example.com")
        .build()
        .await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let allowlist = SuperAdminAllowlist::parse("BOSS@example.com, other@example.com", "").unwrap();
    let result = AuthGuard::new(db, session, &allowlist)
        .require(&[Permission::SuperAdmin])
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests that the admin flag alone doesn't grant super admin.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_regular_admin() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let admin = factory::user::create_admin(db).await?;
    AuthSession::new(session).set_user_id(admin.id).await?;

    let allowlist = SuperAdminAllowlist::parse("boss@example.com", "").unwrap();
    let result = AuthGuard::new(db, session, &allowlist)
        .require(&[Permission::SuperAdmin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
