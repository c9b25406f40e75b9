use crate::server::{
    config::RegistrationRange,
    data::registry::RegistrationRegistry,
    error::{auth::AuthError, AppError},
    middleware::{
        auth::AuthGuard,
        session::{AdminSession, AuthSession, StudentSession},
    },
    model::student::RegistrationNumber,
};
use test_utils::context::TestContext;

mod require;

fn student(id: &str) -> RegistrationNumber {
    RegistrationRegistry::from_range(&RegistrationRange::default())
        .lookup(id)
        .unwrap()
}

/// Tests signing in as admin drops an existing student login.
///
/// Expected: admin passes, student guard fails
#[tokio::test]
async fn admin_login_replaces_student() -> Result<(), AppError> {
    let mut test = TestContext::new();
    let session = test.session();

    StudentSession::new(session)
        .set_reg_number(&student("Y24CM150"))
        .await?;
    AdminSession::new(session).set_logged_in().await?;

    let guard = AuthGuard::new(session);
    assert!(guard.require_admin().await.is_ok());
    assert!(matches!(
        guard.require_student().await,
        Err(AppError::AuthErr(AuthError::StudentNotInSession))
    ));

    Ok(())
}

/// Tests signing in as a student drops an existing admin login.
///
/// Expected: student passes, admin guard fails
#[tokio::test]
async fn student_login_replaces_admin() -> Result<(), AppError> {
    let mut test = TestContext::new();
    let session = test.session();

    AdminSession::new(session).set_logged_in().await?;
    StudentSession::new(session)
        .set_reg_number(&student("Y24CM150"))
        .await?;

    let guard = AuthGuard::new(session);
    assert_eq!(guard.require_student().await?.as_str(), "Y24CM150");
    assert!(matches!(
        guard.require_admin().await,
        Err(AppError::AuthErr(AuthError::AdminNotInSession))
    ));

    Ok(())
}

/// Tests clearing the session removes both roles.
///
/// Expected: both guards fail after clear
#[tokio::test]
async fn clear_removes_every_role() -> Result<(), AppError> {
    let mut test = TestContext::new();
    let session = test.session();

    StudentSession::new(session)
        .set_reg_number(&student("Y24CM133"))
        .await?;
    AuthSession::new(session).clear().await?;

    let guard = AuthGuard::new(session);
    assert!(guard.require_student().await.is_err());
    assert!(guard.require_admin().await.is_err());

    Ok(())
}
