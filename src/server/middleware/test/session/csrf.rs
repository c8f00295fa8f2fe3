use super::*;

/// Tests validating the state returned by the provider against the stored token.
///
/// Expected: Ok(()) and the token is removed from the session
#[tokio::test]
async fn accepts_matching_state() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let session = test.session().await.unwrap();

    let csrf = CsrfSession::new(session);
    csrf.set_token("state-123".to_string()).await?;

    csrf.validate("state-123").await?;
    assert!(csrf.take_token().await?.is_none());

    Ok(())
}

/// Tests validating a state that differs from the stored token.
///
/// Expected: Err(CsrfValidationFailed) and the token is still consumed
#[tokio::test]
async fn rejects_mismatched_state() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let session = test.session().await.unwrap();

    let csrf = CsrfSession::new(session);
    csrf.set_token("state-123".to_string()).await?;

    let result = csrf.validate("state-456").await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::CsrfValidationFailed))
    ));
    assert!(csrf.take_token().await?.is_none());

    Ok(())
}

/// Tests validating a state when no login was started in this session.
///
/// Expected: Err(CsrfValidationFailed)
#[tokio::test]
async fn rejects_missing_token() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let session = test.session().await.unwrap();

    let result = CsrfSession::new(session).validate("state-123").await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::CsrfValidationFailed))
    ));

    Ok(())
}

/// Tests replaying a state that was already accepted once.
///
/// Expected: first validation Ok, second Err(CsrfValidationFailed)
#[tokio::test]
async fn rejects_reused_state() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let session = test.session().await.unwrap();

    let csrf = CsrfSession::new(session);
    csrf.set_token("state-123".to_string()).await?;

    csrf.validate("state-123").await?;
    let replay = csrf.validate("state-123").await;

    assert!(matches!(
        replay,
        Err(AppError::AuthErr(AuthError::CsrfValidationFailed))
    ));

    Ok(())
}
