use super::*;
use crate::model::booking::MealChoice;

/// Tests the page shows Wednesday's menu and no booking yet.
///
/// Expected: 200, Pongal for breakfast, null existing_booking
#[tokio::test]
async fn shows_todays_menu() -> Result<(), TestError> {
    let (mut client, _) = setup();
    login_student(&mut client, "Y24CM150").await?;

    let response = client.get("/food").await?;
    assert_eq!(response.status, StatusCode::OK);

    let body: Value = response.json()?;
    assert_eq!(body["day"], "Wednesday");
    assert_eq!(body["date"], "2026-10-21");
    assert_eq!(body["menu"]["breakfast"], "Pongal");
    assert_eq!(body["menu"]["lunch"], "Sambar Rice");
    assert_eq!(body["menu"]["dinner"], "Paratha");
    assert!(body["existing_booking"].is_null());
    assert_eq!(body["result"], "");

    Ok(())
}

/// Tests a booking is confirmed, stored and pre-fills the next visit.
///
/// Expected: confirmation lists booked meals, GET shows the booking
#[tokio::test]
async fn booking_is_confirmed_and_remembered() -> Result<(), TestError> {
    let (mut client, state) = setup();
    login_student(&mut client, "Y24CM150").await?;

    let response = client
        .post_form(
            "/food",
            &[("breakfast", "Yes"), ("lunch", "No"), ("dinner", "Yes")],
        )
        .await?;
    assert_eq!(response.status, StatusCode::OK);

    let body: Value = response.json()?;
    assert_eq!(body["result"], "✅ Booking confirmed for: Breakfast, Dinner");
    assert_eq!(body["existing_booking"]["lunch"], "No");

    let body: Value = client.get("/food").await?.json()?;
    assert_eq!(body["existing_booking"]["breakfast"], "Yes");
    assert_eq!(body["existing_booking"]["dinner"], "Yes");

    let reg_number = state.registry.lookup("Y24CM150").unwrap();
    let stored = state.bookings.find(&reg_number, today()).await.unwrap();
    assert_eq!(stored.lunch, MealChoice::No);

    Ok(())
}

/// Tests re-booking overwrites and opting out of everything is reported.
///
/// Expected: second submission wins, opt-out message
#[tokio::test]
async fn rebooking_overwrites() -> Result<(), TestError> {
    let (mut client, _) = setup();
    login_student(&mut client, "Y24CM150").await?;

    client
        .post_form(
            "/food",
            &[("breakfast", "Yes"), ("lunch", "Yes"), ("dinner", "Yes")],
        )
        .await?;

    let body: Value = client
        .post_form(
            "/food",
            &[("breakfast", "No"), ("lunch", "No"), ("dinner", "No")],
        )
        .await?
        .json()?;
    assert_eq!(body["result"], "⚠️ You have opted out of all meals for today");

    let body: Value = client.get("/food").await?.json()?;
    assert_eq!(body["existing_booking"]["breakfast"], "No");
    assert_eq!(body["existing_booking"]["lunch"], "No");

    Ok(())
}

/// Tests a missing meal field is a bad request and stores nothing.
///
/// Expected: 400 naming the field
#[tokio::test]
async fn missing_meal_is_bad_request() -> Result<(), TestError> {
    let (mut client, state) = setup();
    login_student(&mut client, "Y24CM150").await?;

    let response = client
        .post_form("/food", &[("breakfast", "Yes"), ("lunch", "No")])
        .await?;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let body: Value = response.json()?;
    assert_eq!(body["error"], "Missing form field: dinner");

    let (_, students) = state.bookings.summarize(today()).await;
    assert_eq!(students, 0);

    Ok(())
}

/// Tests an unknown selection value is a form error and stores nothing.
///
/// Expected: 200 with error, existing booking unchanged
#[tokio::test]
async fn invalid_choice_is_form_error() -> Result<(), TestError> {
    let (mut client, _) = setup();
    login_student(&mut client, "Y24CM150").await?;

    client
        .post_form(
            "/food",
            &[("breakfast", "Yes"), ("lunch", "Yes"), ("dinner", "No")],
        )
        .await?;

    let response = client
        .post_form(
            "/food",
            &[("breakfast", "Maybe"), ("lunch", "No"), ("dinner", "No")],
        )
        .await?;
    assert_eq!(response.status, StatusCode::OK);

    let body: Value = response.json()?;
    assert!(body["error"].as_str().unwrap().contains("Maybe"));
    assert_eq!(body["result"], "");
    assert_eq!(body["existing_booking"]["lunch"], "Yes");

    Ok(())
}

/// Tests anonymous submissions are redirected before anything is stored.
///
/// Expected: 303 to /student_login, empty store
#[tokio::test]
async fn anonymous_booking_redirects() -> Result<(), TestError> {
    let (mut client, state) = setup();

    let response = client
        .post_form(
            "/food",
            &[("breakfast", "Yes"), ("lunch", "Yes"), ("dinner", "Yes")],
        )
        .await?;
    assert_redirect(&response, "/student_login");

    let (_, students) = state.bookings.summarize(today()).await;
    assert_eq!(students, 0);

    Ok(())
}

/// Tests an undecodable body from an anonymous client still gets the login
/// redirect rather than an extraction error.
///
/// Expected: 303 to /student_login for a duplicated field and a JSON body
#[tokio::test]
async fn anonymous_malformed_booking_redirects() -> Result<(), TestError> {
    let (mut client, state) = setup();

    let response = client
        .post_form(
            "/food",
            &[
                ("breakfast", "Yes"),
                ("breakfast", "No"),
                ("lunch", "Yes"),
                ("dinner", "Yes"),
            ],
        )
        .await?;
    assert_redirect(&response, "/student_login");

    let response = client
        .post("/food", "application/json", r#"{"breakfast":"Yes"}"#)
        .await?;
    assert_redirect(&response, "/student_login");

    let (_, students) = state.bookings.summarize(today()).await;
    assert_eq!(students, 0);

    Ok(())
}

/// Tests an undecodable body from a signed-in student is a bad request.
///
/// Expected: 400 with an error body, nothing stored
#[tokio::test]
async fn malformed_booking_is_bad_request() -> Result<(), TestError> {
    let (mut client, state) = setup();
    login_student(&mut client, "Y24CM150").await?;

    let response = client
        .post_form(
            "/food",
            &[
                ("breakfast", "Yes"),
                ("breakfast", "No"),
                ("lunch", "Yes"),
                ("dinner", "Yes"),
            ],
        )
        .await?;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let body: Value = response.json()?;
    assert!(body["error"].is_string());

    let response = client
        .post("/food", "text/plain", "breakfast=Yes")
        .await?;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let (_, students) = state.bookings.summarize(today()).await;
    assert_eq!(students, 0);

    Ok(())
}
