use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, IntoStaticStr};
use utoipa::ToSchema;

/// One employee's attendance for one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(
    example = json!({
        "id": 1,
        "employee_id": 1000,
        "date": "2026-01-05",
        "morning_shift_start": null,
        "morning_shift_end": "2026-01-05T07:40:00Z",
        "afternoon_shift_start": null,
        "afternoon_shift_end": null
    })
)]
pub struct Timekeeping {
    #[schema(example = 1)]
    pub id: u64,

    #[schema(example = 1000)]
    pub employee_id: u64,

    #[schema(example = "2026-01-05", value_type = String, format = "date")]
    pub date: NaiveDate,

    #[schema(value_type = Option<String>, format = "date-time")]
    pub morning_shift_start: Option<DateTime<Utc>>,

    #[schema(value_type = Option<String>, format = "date-time")]
    pub morning_shift_end: Option<DateTime<Utc>>,

    #[schema(value_type = Option<String>, format = "date-time")]
    pub afternoon_shift_start: Option<DateTime<Utc>>,

    #[schema(value_type = Option<String>, format = "date-time")]
    pub afternoon_shift_end: Option<DateTime<Utc>>,
}

/// The fields a QR scan can stamp, in the order they are evaluated.
/// `morning_shift_start` has no variant: no scan writes it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, Display, IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Checkpoint {
    MorningShiftEnd,
    AfternoonShiftStart,
    AfternoonShiftEnd,
}

impl Checkpoint {
    pub const SCAN_ORDER: [Checkpoint; 3] = [
        Checkpoint::MorningShiftEnd,
        Checkpoint::AfternoonShiftStart,
        Checkpoint::AfternoonShiftEnd,
    ];

    /// Column name in the `timekeeping` table
    pub fn column(self) -> &'static str {
        self.into()
    }
}

/// Where an employee is in their day, derived from the stamped checkpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DayState {
    NotStarted,
    MorningDone,
    AfternoonStarted,
    AfternoonDone,
}

impl Timekeeping {
    /// A fresh record for `date` with nothing stamped.
    pub fn empty(id: u64, employee_id: u64, date: NaiveDate) -> Self {
        Self {
            id,
            employee_id,
            date,
            morning_shift_start: None,
            morning_shift_end: None,
            afternoon_shift_start: None,
            afternoon_shift_end: None,
        }
    }

    pub fn checkpoint(&self, checkpoint: Checkpoint) -> Option<DateTime<Utc>> {
        match checkpoint {
            Checkpoint::MorningShiftEnd => self.morning_shift_end,
            Checkpoint::AfternoonShiftStart => self.afternoon_shift_start,
            Checkpoint::AfternoonShiftEnd => self.afternoon_shift_end,
        }
    }

    /// Stamps `checkpoint` unless it already holds a value. Returns whether
    /// anything changed.
    pub fn stamp(&mut self, checkpoint: Checkpoint, at: DateTime<Utc>) -> bool {
        let slot = match checkpoint {
            Checkpoint::MorningShiftEnd => &mut self.morning_shift_end,
            Checkpoint::AfternoonShiftStart => &mut self.afternoon_shift_start,
            Checkpoint::AfternoonShiftEnd => &mut self.afternoon_shift_end,
        };

        if slot.is_some() {
            return false;
        }
        *slot = Some(at);
        true
    }

    pub fn state(&self) -> DayState {
        match (
            self.morning_shift_end,
            self.afternoon_shift_start,
            self.afternoon_shift_end,
        ) {
            (_, _, Some(_)) => DayState::AfternoonDone,
            (_, Some(_), None) => DayState::AfternoonStarted,
            (Some(_), None, None) => DayState::MorningDone,
            (None, None, None) => DayState::NotStarted,
        }
    }
}
