use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};

use crate::model::{
    employee::Employee,
    qr_code::QrCode,
    schedule::Schedule,
    timekeeping::{Checkpoint, Timekeeping},
};

#[cfg(test)]
pub mod memory;
pub mod mysql;

pub use mysql::MySqlStore;

/// Datastore operations the timekeeping rules depend on.
///
/// Nothing here locks: a scan is a plain read followed by a single-column
/// update.
#[async_trait]
pub trait TimekeepingStore: Send + Sync {
    async fn find_employee(&self, employee_id: u64) -> Result<Option<Employee>, sqlx::Error>;

    async fn find_schedule(&self, schedule_id: u64) -> Result<Option<Schedule>, sqlx::Error>;

    async fn find_record(
        &self,
        employee_id: u64,
        date: NaiveDate,
    ) -> Result<Option<Timekeeping>, sqlx::Error>;

    /// Records dated within `[from, to]`, oldest first
    async fn find_records_between(
        &self,
        employee_id: u64,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<Timekeeping>, sqlx::Error>;

    /// Creates an empty record for the day, or returns the existing one if
    /// another request got there first.
    async fn create_record(
        &self,
        employee_id: u64,
        date: NaiveDate,
    ) -> Result<Timekeeping, sqlx::Error>;

    /// Writes `at` into the checkpoint column if it is still empty.
    /// Returns false when the column was already set.
    async fn stamp_checkpoint(
        &self,
        record_id: u64,
        checkpoint: Checkpoint,
        at: DateTime<Utc>,
    ) -> Result<bool, sqlx::Error>;

    /// The currently valid QR code. When several exist the first one wins.
    async fn current_qr_code(&self) -> Result<Option<QrCode>, sqlx::Error>;
}
