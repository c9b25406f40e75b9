use super::*;

/// Tests the admin flag passes the admin check.
///
/// Expected: Ok(())
#[tokio::test]
async fn grants_access_to_admin() -> Result<(), AppError> {
    let mut test = TestContext::new();
    let session = test.session();

    AdminSession::new(session).set_logged_in().await?;

    let result = AuthGuard::new(session).require_admin().await;
    assert!(result.is_ok());

    Ok(())
}

/// Tests an empty session is denied.
///
/// Expected: Err(AuthError::AdminNotInSession)
#[tokio::test]
async fn denies_access_without_admin_flag() -> Result<(), AppError> {
    let mut test = TestContext::new();
    let session = test.session();

    let result = AuthGuard::new(session).require_admin().await;

    match result {
        Err(AppError::AuthErr(error)) => {
            assert!(matches!(error, AuthError::AdminNotInSession));
            assert_eq!(error.login_path(), "/admin_login");
        }
        _ => panic!("expected AdminNotInSession"),
    }

    Ok(())
}

/// Tests a student session does not grant admin access.
///
/// Expected: Err(AuthError::AdminNotInSession)
#[tokio::test]
async fn denies_access_to_student() -> Result<(), AppError> {
    let mut test = TestContext::new();
    let session = test.session();

    StudentSession::new(session)
        .set_reg_number(&student("Y24CM198"))
        .await?;

    let result = AuthGuard::new(session).require_admin().await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AdminNotInSession))
    ));

    Ok(())
}
