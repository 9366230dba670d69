//! Shift API endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::shift::{CreateShiftCheckin, Shift, ShiftMonthQuery, UpdateShiftCheckin},
};

/// List all shifts
#[utoipa::path(
    get,
    path = "/shifts",
    tag = "shifts",
    responses(
        (status = 200, description = "All shifts, aggregated per day", body = Vec<Shift>)
    )
)]
pub async fn list_shifts(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Shift>>> {
    let shifts = state.services.shifts.list_all().await?;
    Ok(Json(shifts))
}

/// List a user's shifts for one month
#[utoipa::path(
    get,
    path = "/shifts/month/{month}",
    tag = "shifts",
    params(
        ("month" = String, Path, description = "Calendar month (YYYY-MM)"),
        ShiftMonthQuery
    ),
    responses(
        (status = 200, description = "Shifts for the month", body = Vec<Shift>)
    )
)]
pub async fn list_shifts_by_month(
    State(state): State<crate::AppState>,
    Path(month): Path<String>,
    Query(query): Query<ShiftMonthQuery>,
) -> AppResult<Json<Vec<Shift>>> {
    let shifts = state
        .services
        .shifts
        .list_by_month(&month, query.user_id)
        .await?;
    Ok(Json(shifts))
}

/// Get the shift containing one check-in
#[utoipa::path(
    get,
    path = "/shifts/checkins/{id}",
    tag = "shifts",
    params(("id" = i64, Path, description = "Check-in ID")),
    responses(
        (status = 200, description = "Shift for the check-in's day", body = Shift),
        (status = 404, description = "Check-in not found")
    )
)]
pub async fn get_shift_by_checkin(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Shift>> {
    let shift = state.services.shifts.get_by_checkin(id).await?;
    Ok(Json(shift))
}

/// Create a check-in
#[utoipa::path(
    post,
    path = "/shifts/checkins",
    tag = "shifts",
    request_body = CreateShiftCheckin,
    responses(
        (status = 201, description = "Check-in created; shift for its day returned", body = Shift),
        (status = 400, description = "Malformed date or timestamp")
    )
)]
pub async fn create_checkin(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateShiftCheckin>,
) -> AppResult<(StatusCode, Json<Shift>)> {
    let shift = state.services.shifts.create_checkin(&data).await?;
    Ok((StatusCode::CREATED, Json(shift)))
}

/// Update a check-in
#[utoipa::path(
    put,
    path = "/shifts/checkins/{id}",
    tag = "shifts",
    params(("id" = i64, Path, description = "Check-in ID")),
    request_body = UpdateShiftCheckin,
    responses(
        (status = 200, description = "Check-in updated; shift for its day returned", body = Shift),
        (status = 404, description = "Check-in not found")
    )
)]
pub async fn update_checkin(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
    Json(data): Json<UpdateShiftCheckin>,
) -> AppResult<Json<Shift>> {
    let shift = state.services.shifts.update_checkin(id, &data).await?;
    Ok(Json(shift))
}

/// Delete a check-in
#[utoipa::path(
    delete,
    path = "/shifts/checkins/{id}",
    tag = "shifts",
    params(("id" = i64, Path, description = "Check-in ID")),
    responses(
        (status = 204, description = "Check-in deleted"),
        (status = 404, description = "Check-in not found")
    )
)]
pub async fn delete_checkin(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.services.shifts.delete_checkin(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
