use axum::{
    extract::{rejection::FormRejection, State},
    Form, Json,
};
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::ToSchema;

use crate::{
    model::{api::ErrorDto, feedback::SurveyPageDto},
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::feedback::{QuantityFeedback, Rating, SubmitFeedbackParam},
        service::feedback::FeedbackService,
        state::AppState,
        util::form::{form_body, required},
    },
};

/// Tag for grouping survey endpoints in OpenAPI documentation
pub static SURVEY_TAG: &str = "survey";

/// Survey form: `rating` is a whole number from 1 to 5, `quantity` one of
/// `Less`, `Enough` or `Excess`.
#[derive(Deserialize, ToSchema)]
pub struct SurveyForm {
    pub rating: Option<String>,
    pub quantity: Option<String>,
}

/// Empty survey form.
///
/// # Access Control
/// - Student session, otherwise redirect to `/student_login`
#[utoipa::path(
    get,
    path = "/food_survey",
    tag = SURVEY_TAG,
    responses(
        (status = 200, description = "Survey form", body = SurveyPageDto),
        (status = 303, description = "Not signed in, redirect to /student_login")
    ),
)]
pub async fn survey_page(session: Session) -> Result<Json<SurveyPageDto>, AppError> {
    AuthGuard::new(&session).require_student().await?;

    Ok(Json(SurveyPageDto::default()))
}

/// Submit a rating and a portion-size opinion.
///
/// # Access Control
/// - Student session, otherwise redirect to `/student_login`
///
/// # Returns
/// - `200 OK` - Thank-you message, or an inline error for an out-of-range or
///   non-numeric rating or an unknown quantity (nothing is stored then)
/// - `400 Bad Request` - `rating` or `quantity` missing, or the body is not
///   a decodable form
#[utoipa::path(
    post,
    path = "/food_survey",
    tag = SURVEY_TAG,
    request_body(content = SurveyForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Feedback recorded or form error", body = SurveyPageDto),
        (status = 303, description = "Not signed in, redirect to /student_login"),
        (status = 400, description = "Missing survey field", body = ErrorDto)
    ),
)]
pub async fn submit_survey(
    State(state): State<AppState>,
    session: Session,
    form: Result<Form<SurveyForm>, FormRejection>,
) -> Result<Json<SurveyPageDto>, AppError> {
    AuthGuard::new(&session).require_student().await?;
    let form = form_body(form)?;

    let rating = required(form.rating, "rating")?;
    let quantity = required(form.quantity, "quantity")?;

    let param = match parse_feedback(&rating, &quantity) {
        Ok(param) => param,
        Err(error) => {
            return Ok(Json(SurveyPageDto {
                message: String::new(),
                error: Some(error),
            }))
        }
    };

    let message = FeedbackService::new(&state.feedback)
        .submit_feedback(param)
        .await;

    Ok(Json(SurveyPageDto {
        message: message.to_string(),
        error: None,
    }))
}

fn parse_feedback(rating: &str, quantity: &str) -> Result<SubmitFeedbackParam, String> {
    Ok(SubmitFeedbackParam {
        rating: rating.parse::<Rating>()?,
        quantity: quantity.parse::<QuantityFeedback>()?,
    })
}
