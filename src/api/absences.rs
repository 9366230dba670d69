//! Absence API endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::absence::{Absence, AbsenceQuery, CreateAbsence},
};

/// List absences for a user (global absences included)
#[utoipa::path(
    get,
    path = "/absences",
    tag = "absences",
    params(AbsenceQuery),
    responses(
        (status = 200, description = "Absences list", body = Vec<Absence>)
    )
)]
pub async fn list_absences(
    State(state): State<crate::AppState>,
    Query(query): Query<AbsenceQuery>,
) -> AppResult<Json<Vec<Absence>>> {
    let absences = state.services.absences.list_for_user(query.user_id).await?;
    Ok(Json(absences))
}

/// Create an absence
#[utoipa::path(
    post,
    path = "/absences",
    tag = "absences",
    request_body = CreateAbsence,
    responses(
        (status = 201, description = "Absence created", body = Absence),
        (status = 400, description = "Malformed date")
    )
)]
pub async fn create_absence(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateAbsence>,
) -> AppResult<(StatusCode, Json<Absence>)> {
    let absence = state.services.absences.create(&data).await?;
    Ok((StatusCode::CREATED, Json(absence)))
}

/// Delete an absence
#[utoipa::path(
    delete,
    path = "/absences/{id}",
    tag = "absences",
    params(("id" = i64, Path, description = "Absence ID")),
    responses(
        (status = 204, description = "Absence deleted"),
        (status = 404, description = "Absence not found")
    )
)]
pub async fn delete_absence(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.services.absences.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
