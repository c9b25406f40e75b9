use axum::{
    extract::{rejection::FormRejection, State},
    Form, Json,
};
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::ToSchema;

use crate::{
    model::{
        api::ErrorDto,
        booking::{FoodPageDto, MealChoice},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::booking::{MealSelection, SubmitBookingParam},
        service::booking::{BookingService, TodaysMenu},
        state::AppState,
        util::form::{form_body, required},
    },
};

/// Tag for grouping booking endpoints in OpenAPI documentation
pub static BOOKING_TAG: &str = "booking";

/// Meal pre-booking form. Each field must be `Yes` or `No`.
#[derive(Deserialize, ToSchema)]
pub struct BookingForm {
    pub breakfast: Option<String>,
    pub lunch: Option<String>,
    pub dinner: Option<String>,
}

/// Today's menu and the student's current booking.
///
/// # Access Control
/// - Student session, otherwise redirect to `/student_login`
#[utoipa::path(
    get,
    path = "/food",
    tag = BOOKING_TAG,
    responses(
        (status = 200, description = "Menu and existing booking", body = FoodPageDto),
        (status = 303, description = "Not signed in, redirect to /student_login")
    ),
)]
pub async fn food_page(
    State(state): State<AppState>,
    session: Session,
) -> Result<Json<FoodPageDto>, AppError> {
    let reg_number = AuthGuard::new(&session).require_student().await?;
    let service = BookingService::new(&state.bookings, state.clock.as_ref());

    let today = service.get_menu_for_today();
    let existing = service.get_existing_booking(&reg_number, today.date).await;

    Ok(Json(food_page_dto(today, existing, String::new(), None)))
}

/// Book or re-book today's meals.
///
/// # Access Control
/// - Student session, otherwise redirect to `/student_login`
///
/// # Returns
/// - `200 OK` - Page with the confirmation, or with an inline error when a
///   selection is not `Yes`/`No` (nothing is stored then)
/// - `400 Bad Request` - A meal field is missing or the body is not a
///   decodable form
#[utoipa::path(
    post,
    path = "/food",
    tag = BOOKING_TAG,
    request_body(content = BookingForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Booking recorded or form error", body = FoodPageDto),
        (status = 303, description = "Not signed in, redirect to /student_login"),
        (status = 400, description = "Missing meal field", body = ErrorDto)
    ),
)]
pub async fn submit_booking(
    State(state): State<AppState>,
    session: Session,
    form: Result<Form<BookingForm>, FormRejection>,
) -> Result<Json<FoodPageDto>, AppError> {
    let reg_number = AuthGuard::new(&session).require_student().await?;
    let form = form_body(form)?;
    let service = BookingService::new(&state.bookings, state.clock.as_ref());

    let breakfast = required(form.breakfast, "breakfast")?;
    let lunch = required(form.lunch, "lunch")?;
    let dinner = required(form.dinner, "dinner")?;

    let today = service.get_menu_for_today();

    let selection = match parse_selection(&breakfast, &lunch, &dinner) {
        Ok(selection) => selection,
        Err(error) => {
            let existing = service.get_existing_booking(&reg_number, today.date).await;
            return Ok(Json(food_page_dto(today, existing, String::new(), Some(error))));
        }
    };

    let result = service
        .submit_booking(SubmitBookingParam {
            reg_number,
            date: today.date,
            selection,
        })
        .await;

    Ok(Json(food_page_dto(today, Some(selection), result, None)))
}

fn parse_selection(breakfast: &str, lunch: &str, dinner: &str) -> Result<MealSelection, String> {
    Ok(MealSelection {
        breakfast: breakfast.parse::<MealChoice>()?,
        lunch: lunch.parse::<MealChoice>()?,
        dinner: dinner.parse::<MealChoice>()?,
    })
}

fn food_page_dto(
    today: TodaysMenu,
    existing: Option<MealSelection>,
    result: String,
    error: Option<String>,
) -> FoodPageDto {
    FoodPageDto {
        day: today.day,
        date: today.date,
        menu: today.menu.into_dto(),
        existing_booking: existing.map(MealSelection::into_dto),
        result,
        error,
    }
}
