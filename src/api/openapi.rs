//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{absences, health, shifts};
use crate::error::ErrorResponse;
use crate::models::absence::{Absence, CreateAbsence};
use crate::models::shift::{CreateShiftCheckin, Shift, ShiftCheckin, UpdateShiftCheckin};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "ShiftDesk API",
        version = "0.3.0",
        description = "Employee Shift and Absence Tracking REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Shifts
        shifts::list_shifts,
        shifts::list_shifts_by_month,
        shifts::get_shift_by_checkin,
        shifts::create_checkin,
        shifts::update_checkin,
        shifts::delete_checkin,
        // Absences
        absences::list_absences,
        absences::create_absence,
        absences::delete_absence,
    ),
    components(schemas(
        ErrorResponse,
        Shift,
        ShiftCheckin,
        CreateShiftCheckin,
        UpdateShiftCheckin,
        Absence,
        CreateAbsence,
    )),
    tags(
        (name = "health", description = "Service health"),
        (name = "shifts", description = "Shift check-in tracking"),
        (name = "absences", description = "Absence tracking")
    )
)]
pub struct ApiDoc;

/// Create the Swagger UI router serving the OpenAPI document
pub fn create_openapi_router() -> Router {
    Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
