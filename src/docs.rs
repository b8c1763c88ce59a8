use crate::api::timekeeping::{MonthlyTimekeepingResponse, QrCheck, TodayResponse};
use crate::model::schedule::Schedule;
use crate::model::timekeeping::{Checkpoint, DayState, Timekeeping};
use crate::timekeeping::ScanOutcome;
use utoipa::Modify;
use utoipa::OpenApi;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Timekeeping API",
        version = "1.0.0",
        description = r#"
## Employee Timekeeping

Records daily attendance by scanning the office QR code against each
employee's work schedule.

### 🔹 Key Features
- **Daily records**
  - One row per employee per day, created empty on first lookup
- **QR check-in/out**
  - Each scan stamps the next open checkpoint: morning end, afternoon start, afternoon end
  - A scan counts while it is no more than the configured tolerance (30 minutes by default) past the checkpoint's boundary
- **Monthly history**
  - Own records, or any employee's for HR/Admin

### 🔐 Security
Every endpoint expects a **JWT Bearer** access token. Timekeeping endpoints
act on the employee linked to the token.

---
Built with **Rust**, **Actix Web**, **SQLx**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::timekeeping::qr_check,
        crate::api::timekeeping::get_today,
        crate::api::timekeeping::get_daily,
        crate::api::timekeeping::get_monthly,
        crate::api::timekeeping::get_employee_monthly
    ),
    components(
        schemas(
            QrCheck,
            ScanOutcome,
            TodayResponse,
            MonthlyTimekeepingResponse,
            Timekeeping,
            Checkpoint,
            DayState,
            Schedule
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Timekeeping", description = "Attendance by QR scan"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}
