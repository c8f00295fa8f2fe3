use super::*;

/// Tests admin user successfully passes admin permission check.
///
/// Expected: Ok(AuthenticatedUser) with admin=true
#[tokio::test]
async fn grants_access_to_admin_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let admin = factory::user::UserFactory::new(db)
        .name("AdminUser")
        .admin(true)
        .build()
        .await?;
    AuthSession::new(session).set_user_id(admin.id).await?;

    let allowlist = SuperAdminAllowlist::default();
    let result = AuthGuard::new(db, session, &allowlist)
        .require(&[Permission::Admin])
        .await;

    assert!(result.is_ok());
    let returned = result.unwrap();
    assert_eq!(returned.user.name, "AdminUser");
    assert!(returned.user.admin);

    Ok(())
}

/// Tests non-admin user is denied admin permission.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_access_to_non_admin_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::create_user(db).await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let allowlist = SuperAdminAllowlist::default();
    let result = AuthGuard::new(db, session, &allowlist)
        .require(&[Permission::Admin])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(user_id, message))) => {
            assert_eq!(user_id, user.id);
            assert!(message.contains("admin"));
        }
        other => panic!("Expected AccessDenied error, got: {:?}", other),
    }

    Ok(())
}

/// Tests that a super admin passes the admin check without the admin flag.
///
/// Expected: Ok(AuthenticatedUser) with is_super_admin=true
#[tokio::test]
async fn grants_access_to_super_admin_without_flag() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::create_user(db).await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let allowlist = SuperAdminAllowlist::parse("", &user.id.to_string()).unwrap();
    let result = AuthGuard::new(db, session, &allowlist)
        .require(&[Permission::Admin])
        .await;

    let returned = result?;
    assert!(!returned.user.admin);
    assert!(returned.is_super_admin);

    Ok(())
}
