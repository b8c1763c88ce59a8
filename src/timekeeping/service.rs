use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};
use utoipa::ToSchema;

use super::rules;
use crate::clock::Clock;
use crate::error::TimekeepingError;
use crate::model::timekeeping::{Checkpoint, DayState, Timekeeping};
use crate::store::TimekeepingStore;

/// What a QR scan did to today's record.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[schema(example = json!({
    "checkpoint": "morning_shift_end",
    "scanned_at": "2026-01-05T07:40:00Z",
    "state": "MORNING_DONE"
}))]
pub struct ScanOutcome {
    /// The checkpoint stamped by this scan, `null` if nothing changed
    pub checkpoint: Option<Checkpoint>,

    #[schema(value_type = String, format = "date-time")]
    pub scanned_at: DateTime<Utc>,

    /// State of the day after the scan
    pub state: DayState,
}

/// Reads and advances attendance records.
///
/// Built once at startup with its collaborators and shared across workers.
pub struct TimekeepingService {
    store: Arc<dyn TimekeepingStore>,
    clock: Arc<dyn Clock>,
    tolerance: Duration,
}

impl TimekeepingService {
    pub fn new(store: Arc<dyn TimekeepingStore>, clock: Arc<dyn Clock>, tolerance: Duration) -> Self {
        Self {
            store,
            clock,
            tolerance,
        }
    }

    /// Record for one calendar day, created empty on first read.
    #[instrument(skip(self))]
    pub async fn get_daily_record(
        &self,
        employee_id: u64,
        year: i32,
        month: u32,
        day: u32,
    ) -> Result<Timekeeping, TimekeepingError> {
        let date = rules::day_of(year, month, day)?;

        if let Some(record) = self.store.find_record(employee_id, date).await? {
            return Ok(record);
        }

        debug!(%date, "No timekeeping row yet, creating one");
        let record = self.store.create_record(employee_id, date).await?;
        info!(record_id = record.id, %date, "Timekeeping row created");

        Ok(record)
    }

    /// All records in a calendar month, oldest first. Empty if none exist.
    #[instrument(skip(self))]
    pub async fn get_monthly_records(
        &self,
        employee_id: u64,
        year: i32,
        month: u32,
    ) -> Result<Vec<Timekeeping>, TimekeepingError> {
        let (from, to) = rules::month_bounds(year, month)?;

        let records = self
            .store
            .find_records_between(employee_id, from, to)
            .await?;
        debug!(count = records.len(), "Monthly timekeeping fetched");

        Ok(records)
    }

    /// Today's record, without creating it.
    #[instrument(skip(self))]
    pub async fn get_today_record(&self, employee_id: u64) -> Result<Timekeeping, TimekeepingError> {
        let today = self.clock.now().date_naive();

        self.store
            .find_record(employee_id, today)
            .await?
            .ok_or(TimekeepingError::NoRecord)
    }

    /// Applies a QR scan to today's record, stamping at most one checkpoint.
    ///
    /// Today's record must already exist; the scan never creates it.
    #[instrument(skip(self))]
    pub async fn record_scan(
        &self,
        employee_id: u64,
        qr_code_value: u64,
    ) -> Result<ScanOutcome, TimekeepingError> {
        let employee = self
            .store
            .find_employee(employee_id)
            .await?
            .ok_or(TimekeepingError::NoEmployee)?;
        let schedule_id = employee.schedule_id.ok_or(TimekeepingError::NoSchedule)?;
        let schedule = self
            .store
            .find_schedule(schedule_id)
            .await?
            .ok_or(TimekeepingError::NoSchedule)?;

        let now = self.clock.now();
        let today = now.date_naive();

        let mut record = self
            .store
            .find_record(employee_id, today)
            .await?
            .ok_or(TimekeepingError::NoRecord)?;

        let legit = self
            .store
            .current_qr_code()
            .await?
            .is_some_and(|code| code.matches(qr_code_value));
        if !legit {
            warn!(qr_code_value, "QR code mismatch");
            return Err(TimekeepingError::QrMismatch);
        }

        let cutoff = rules::cutoff(now, self.tolerance);
        debug!(
            schedule_id,
            cutoff_minutes = cutoff.num_minutes(),
            "Evaluating checkpoints"
        );
        let Some(checkpoint) = rules::next_checkpoint(&record, &schedule, cutoff) else {
            debug!(record_id = record.id, "Scan outside every open checkpoint window");
            return Ok(ScanOutcome {
                checkpoint: None,
                scanned_at: now,
                state: record.state(),
            });
        };

        let stamped = self
            .store
            .stamp_checkpoint(record.id, checkpoint, now)
            .await?;

        if stamped {
            record.stamp(checkpoint, now);
            info!(record_id = record.id, %checkpoint, "Checkpoint stamped");
        } else {
            // A concurrent scan stamped it between our read and write
            debug!(record_id = record.id, %checkpoint, "Checkpoint already stamped");
            if let Some(fresh) = self.store.find_record(employee_id, today).await? {
                record = fresh;
            }
        }

        Ok(ScanOutcome {
            checkpoint: stamped.then_some(checkpoint),
            scanned_at: now,
            state: record.state(),
        })
    }
}
