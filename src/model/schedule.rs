use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(
    example = json!({
        "id": 1,
        "morning_shift_start": "08:00:00",
        "morning_shift_end": "12:00:00",
        "afternoon_shift_start": "13:00:00",
        "afternoon_shift_end": "17:00:00"
    })
)]
pub struct Schedule {
    pub id: u64,

    #[schema(example = "08:00:00", value_type = String, format = "time")]
    pub morning_shift_start: NaiveTime,

    #[schema(example = "12:00:00", value_type = String, format = "time")]
    pub morning_shift_end: NaiveTime,

    #[schema(example = "13:00:00", value_type = String, format = "time")]
    pub afternoon_shift_start: NaiveTime,

    #[schema(example = "17:00:00", value_type = String, format = "time")]
    pub afternoon_shift_end: NaiveTime,
}
