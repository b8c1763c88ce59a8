//! Pure date and time-of-day rules behind the timekeeping service.
//!
//! Every comparison against a schedule boundary happens on one scale: a
//! signed duration since UTC midnight. The cutoff is allowed to go negative
//! shortly after midnight so it still sorts before every boundary.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Timelike, Utc};

use crate::error::TimekeepingError;
use crate::model::{
    schedule::Schedule,
    timekeeping::{Checkpoint, Timekeeping},
};

pub fn time_of_day(time: NaiveTime) -> Duration {
    Duration::seconds(i64::from(time.num_seconds_from_midnight()))
        + Duration::nanoseconds(i64::from(time.nanosecond()))
}

/// `now` minus the tolerance, as time of day
pub fn cutoff(now: DateTime<Utc>, tolerance: Duration) -> Duration {
    time_of_day(now.time()) - tolerance
}

/// The boundary that gates each checkpoint.
///
/// The morning checkpoint stamps `morning_shift_end` but is gated on the
/// schedule's `morning_shift_start`.
fn boundary(schedule: &Schedule, checkpoint: Checkpoint) -> NaiveTime {
    match checkpoint {
        Checkpoint::MorningShiftEnd => schedule.morning_shift_start,
        Checkpoint::AfternoonShiftStart => schedule.afternoon_shift_start,
        Checkpoint::AfternoonShiftEnd => schedule.afternoon_shift_end,
    }
}

/// The first checkpoint that is still empty and whose boundary is later
/// than `cutoff`. `None` means the scan changes nothing.
pub fn next_checkpoint(
    record: &Timekeeping,
    schedule: &Schedule,
    cutoff: Duration,
) -> Option<Checkpoint> {
    Checkpoint::SCAN_ORDER.into_iter().find(|&checkpoint| {
        record.checkpoint(checkpoint).is_none() && cutoff < time_of_day(boundary(schedule, checkpoint))
    })
}

pub fn day_of(year: i32, month: u32, day: u32) -> Result<NaiveDate, TimekeepingError> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| TimekeepingError::InvalidDate(format!("{year:04}-{month:02}-{day:02}")))
}

/// First and last day of a calendar month
pub fn month_bounds(year: i32, month: u32) -> Result<(NaiveDate, NaiveDate), TimekeepingError> {
    let invalid = || TimekeepingError::InvalidDate(format!("{year:04}-{month:02}"));

    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
    let next_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or_else(invalid)?;
    let last = next_first.pred_opt().ok_or_else(invalid)?;

    Ok((first, last))
}
