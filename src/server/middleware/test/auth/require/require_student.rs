use super::*;

/// Tests a signed-in student passes and is returned.
///
/// Expected: Ok(RegistrationNumber) matching the stored one
#[tokio::test]
async fn grants_access_to_student() -> Result<(), AppError> {
    let mut test = TestContext::new();
    let session = test.session();

    StudentSession::new(session)
        .set_reg_number(&student("Y24CM133"))
        .await?;

    let reg_number = AuthGuard::new(session).require_student().await?;
    assert_eq!(reg_number, student("Y24CM133"));

    Ok(())
}

/// Tests signing in twice leaves the same identity in the session.
///
/// Expected: Ok with unchanged registration number
#[tokio::test]
async fn repeated_login_is_idempotent() -> Result<(), AppError> {
    let mut test = TestContext::new();
    let session = test.session();
    let student_session = StudentSession::new(session);

    student_session.set_reg_number(&student("Y24CM160")).await?;
    student_session.set_reg_number(&student("Y24CM160")).await?;

    assert_eq!(
        student_session.get_reg_number().await?,
        Some(student("Y24CM160"))
    );

    Ok(())
}

/// Tests an empty session is denied.
///
/// Expected: Err(AuthError::StudentNotInSession) pointing at /student_login
#[tokio::test]
async fn denies_access_without_student() -> Result<(), AppError> {
    let mut test = TestContext::new();
    let session = test.session();

    let result = AuthGuard::new(session).require_student().await;

    match result {
        Err(AppError::AuthErr(error)) => {
            assert!(matches!(error, AuthError::StudentNotInSession));
            assert_eq!(error.login_path(), "/student_login");
        }
        _ => panic!("expected StudentNotInSession"),
    }

    Ok(())
}

/// Tests an admin session does not grant student access.
///
/// Expected: Err(AuthError::StudentNotInSession)
#[tokio::test]
async fn denies_access_to_admin() -> Result<(), AppError> {
    let mut test = TestContext::new();
    let session = test.session();

    AdminSession::new(session).set_logged_in().await?;

    let result = AuthGuard::new(session).require_student().await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::StudentNotInSession))
    ));

    Ok(())
}
