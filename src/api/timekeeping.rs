use crate::{
    auth::auth::AuthUser,
    model::timekeeping::{DayState, Timekeeping},
    timekeeping::TimekeepingService,
};
use actix_web::{HttpResponse, Responder, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct QrCheck {
    /// Identifier encoded in the scanned QR code
    #[schema(example = 4242)]
    pub qr_code_value: u64,
}

#[derive(Serialize, ToSchema)]
pub struct TodayResponse {
    pub record: Timekeeping,
    pub state: DayState,
}

#[derive(Serialize, ToSchema)]
pub struct MonthlyTimekeepingResponse {
    #[schema(example = 1000)]
    pub employee_id: u64,
    #[schema(example = 2026)]
    pub year: i32,
    #[schema(example = 1)]
    pub month: u32,
    pub data: Vec<Timekeeping>,
    #[schema(example = 21)]
    pub total: usize,
}

/// `/timekeeping` routes, mounted under the authenticated API scope
pub fn scope() -> actix_web::Scope {
    web::scope("/timekeeping")
        // /timekeeping/qr-check
        .service(web::resource("/qr-check").route(web::post().to(qr_check)))
        // /timekeeping/today
        .service(web::resource("/today").route(web::get().to(get_today)))
        // /timekeeping/employees/{employee_id}/{year}/{month}
        .service(
            web::resource("/employees/{employee_id}/{year}/{month}")
                .route(web::get().to(get_employee_monthly)),
        )
        // /timekeeping/{year}/{month}/{day}
        .service(web::resource("/{year}/{month}/{day}").route(web::get().to(get_daily)))
        // /timekeeping/{year}/{month}
        .service(web::resource("/{year}/{month}").route(web::get().to(get_monthly)))
}

/// Scan the office QR code
#[utoipa::path(
    post,
    path = "/api/timekeeping/qr-check",
    request_body = QrCheck,
    responses(
        (status = 200, description = "Scan applied; `checkpoint` is null when nothing was stamped", body = crate::timekeeping::ScanOutcome),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "No record for today, QR mismatch, or no schedule", body = Object, example = json!({
            "message": "QR code does not match"
        })),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Timekeeping"
)]
pub async fn qr_check(
    auth: AuthUser,
    service: web::Data<TimekeepingService>,
    payload: web::Json<QrCheck>,
) -> actix_web::Result<impl Responder> {
    let employee_id = auth.require_employee()?;

    let outcome = service
        .record_scan(employee_id, payload.qr_code_value)
        .await?;

    Ok(HttpResponse::Ok().json(outcome))
}

/// Today's record and where the day stands
#[utoipa::path(
    get,
    path = "/api/timekeeping/today",
    responses(
        (status = 200, body = TodayResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "No record for today")
    ),
    security(("bearer_auth" = [])),
    tag = "Timekeeping"
)]
pub async fn get_today(
    auth: AuthUser,
    service: web::Data<TimekeepingService>,
) -> actix_web::Result<impl Responder> {
    let employee_id = auth.require_employee()?;

    let record = service.get_today_record(employee_id).await?;
    let state = record.state();

    Ok(HttpResponse::Ok().json(TodayResponse { record, state }))
}

/// Caller's record for one day, created empty if missing
#[utoipa::path(
    get,
    path = "/api/timekeeping/{year}/{month}/{day}",
    params(
        ("year", description = "Calendar year"),
        ("month", description = "Month, 1-12"),
        ("day", description = "Day of month")
    ),
    responses(
        (status = 200, body = Timekeeping),
        (status = 400, description = "Invalid date"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "No employee profile")
    ),
    security(("bearer_auth" = [])),
    tag = "Timekeeping"
)]
pub async fn get_daily(
    auth: AuthUser,
    service: web::Data<TimekeepingService>,
    path: web::Path<(i32, u32, u32)>,
) -> actix_web::Result<impl Responder> {
    let employee_id = auth.require_employee()?;
    let (year, month, day) = path.into_inner();

    let record = service
        .get_daily_record(employee_id, year, month, day)
        .await?;

    Ok(HttpResponse::Ok().json(record))
}

/// Caller's records for a month
#[utoipa::path(
    get,
    path = "/api/timekeeping/{year}/{month}",
    params(
        ("year", description = "Calendar year"),
        ("month", description = "Month, 1-12")
    ),
    responses(
        (status = 200, body = MonthlyTimekeepingResponse),
        (status = 400, description = "Invalid month"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "No employee profile")
    ),
    security(("bearer_auth" = [])),
    tag = "Timekeeping"
)]
pub async fn get_monthly(
    auth: AuthUser,
    service: web::Data<TimekeepingService>,
    path: web::Path<(i32, u32)>,
) -> actix_web::Result<impl Responder> {
    let employee_id = auth.require_employee()?;
    let (year, month) = path.into_inner();

    monthly_response(&service, employee_id, year, month).await
}

/// Any employee's records for a month (HR/Admin)
#[utoipa::path(
    get,
    path = "/api/timekeeping/employees/{employee_id}/{year}/{month}",
    params(
        ("employee_id", description = "Employee ID"),
        ("year", description = "Calendar year"),
        ("month", description = "Month, 1-12")
    ),
    responses(
        (status = 200, body = MonthlyTimekeepingResponse),
        (status = 400, description = "Invalid month"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "HR/Admin only")
    ),
    security(("bearer_auth" = [])),
    tag = "Timekeeping"
)]
pub async fn get_employee_monthly(
    auth: AuthUser,
    service: web::Data<TimekeepingService>,
    path: web::Path<(u64, i32, u32)>,
) -> actix_web::Result<impl Responder> {
    auth.require_hr_or_admin()?;
    let (employee_id, year, month) = path.into_inner();

    tracing::debug!(
        requested_by = %auth.username,
        user_id = auth.user_id,
        employee_id,
        "Monthly timekeeping lookup"
    );

    monthly_response(&service, employee_id, year, month).await
}

async fn monthly_response(
    service: &TimekeepingService,
    employee_id: u64,
    year: i32,
    month: u32,
) -> actix_web::Result<HttpResponse> {
    let data = service
        .get_monthly_records(employee_id, year, month)
        .await?;

    Ok(HttpResponse::Ok().json(MonthlyTimekeepingResponse {
        employee_id,
        year,
        month,
        total: data.len(),
        data,
    }))
}
