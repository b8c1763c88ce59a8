use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};

use super::TimekeepingStore;
use crate::model::{
    employee::Employee,
    qr_code::QrCode,
    schedule::Schedule,
    timekeeping::{Checkpoint, Timekeeping},
};

/// In-process stand-in for the MySQL tables, for tests.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Tables>,
}

#[derive(Default)]
struct Tables {
    employees: HashMap<u64, Employee>,
    schedules: HashMap<u64, Schedule>,
    records: Vec<Timekeeping>,
    qr_codes: Vec<QrCode>,
    next_record_id: u64,
    rival_stamp: Option<DateTime<Utc>>,
}

impl MemoryStore {
    pub fn with_employee(self, employee_id: u64, schedule_id: Option<u64>) -> Self {
        self.inner.lock().unwrap().employees.insert(
            employee_id,
            Employee {
                id: employee_id,
                schedule_id,
            },
        );
        self
    }

    pub fn with_schedule(self, schedule: Schedule) -> Self {
        self.inner
            .lock()
            .unwrap()
            .schedules
            .insert(schedule.id, schedule);
        self
    }

    pub fn with_qr_code(self, id: u64) -> Self {
        self.inner.lock().unwrap().qr_codes.push(QrCode { id });
        self
    }

    pub fn with_record(self, record: Timekeeping) -> Self {
        {
            let mut tables = self.inner.lock().unwrap();
            tables.next_record_id = tables.next_record_id.max(record.id);
            tables.records.push(record);
        }
        self
    }

    /// Every stamp attempt finds that another scan wrote the column at `at`
    /// just before it.
    pub fn with_rival_scan_at(self, at: DateTime<Utc>) -> Self {
        self.inner.lock().unwrap().rival_stamp = Some(at);
        self
    }

    /// Snapshot of every stored record
    pub fn records(&self) -> Vec<Timekeeping> {
        self.inner.lock().unwrap().records.clone()
    }
}

#[async_trait]
impl TimekeepingStore for MemoryStore {
    async fn find_employee(&self, employee_id: u64) -> Result<Option<Employee>, sqlx::Error> {
        Ok(self.inner.lock().unwrap().employees.get(&employee_id).cloned())
    }

    async fn find_schedule(&self, schedule_id: u64) -> Result<Option<Schedule>, sqlx::Error> {
        Ok(self.inner.lock().unwrap().schedules.get(&schedule_id).cloned())
    }

    async fn find_record(
        &self,
        employee_id: u64,
        date: NaiveDate,
    ) -> Result<Option<Timekeeping>, sqlx::Error> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .records
            .iter()
            .find(|r| r.employee_id == employee_id && r.date == date)
            .cloned())
    }

    async fn find_records_between(
        &self,
        employee_id: u64,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<Timekeeping>, sqlx::Error> {
        let mut found: Vec<_> = self
            .inner
            .lock()
            .unwrap()
            .records
            .iter()
            .filter(|r| r.employee_id == employee_id && r.date >= from && r.date <= to)
            .cloned()
            .collect();
        found.sort_by_key(|r| r.date);
        Ok(found)
    }

    async fn create_record(
        &self,
        employee_id: u64,
        date: NaiveDate,
    ) -> Result<Timekeeping, sqlx::Error> {
        let mut tables = self.inner.lock().unwrap();

        if let Some(existing) = tables
            .records
            .iter()
            .find(|r| r.employee_id == employee_id && r.date == date)
        {
            return Ok(existing.clone());
        }

        tables.next_record_id += 1;
        let record = Timekeeping::empty(tables.next_record_id, employee_id, date);
        tables.records.push(record.clone());
        Ok(record)
    }

    async fn stamp_checkpoint(
        &self,
        record_id: u64,
        checkpoint: Checkpoint,
        at: DateTime<Utc>,
    ) -> Result<bool, sqlx::Error> {
        let mut tables = self.inner.lock().unwrap();
        let rival = tables.rival_stamp;

        let record = tables
            .records
            .iter_mut()
            .find(|r| r.id == record_id)
            .ok_or(sqlx::Error::RowNotFound)?;

        if let Some(rival_at) = rival {
            record.stamp(checkpoint, rival_at);
        }

        Ok(record.stamp(checkpoint, at))
    }

    async fn current_qr_code(&self) -> Result<Option<QrCode>, sqlx::Error> {
        Ok(self.inner.lock().unwrap().qr_codes.first().copied())
    }
}

/// A store whose every call fails, for checking error propagation.
pub struct FailingStore;

#[async_trait]
impl TimekeepingStore for FailingStore {
    async fn find_employee(&self, _: u64) -> Result<Option<Employee>, sqlx::Error> {
        Err(sqlx::Error::PoolClosed)
    }

    async fn find_schedule(&self, _: u64) -> Result<Option<Schedule>, sqlx::Error> {
        Err(sqlx::Error::PoolClosed)
    }

    async fn find_record(&self, _: u64, _: NaiveDate) -> Result<Option<Timekeeping>, sqlx::Error> {
        Err(sqlx::Error::PoolClosed)
    }

    async fn find_records_between(
        &self,
        _: u64,
        _: NaiveDate,
        _: NaiveDate,
    ) -> Result<Vec<Timekeeping>, sqlx::Error> {
        Err(sqlx::Error::PoolClosed)
    }

    async fn create_record(&self, _: u64, _: NaiveDate) -> Result<Timekeeping, sqlx::Error> {
        Err(sqlx::Error::PoolClosed)
    }

    async fn stamp_checkpoint(
        &self,
        _: u64,
        _: Checkpoint,
        _: DateTime<Utc>,
    ) -> Result<bool, sqlx::Error> {
        Err(sqlx::Error::PoolClosed)
    }

    async fn current_qr_code(&self) -> Result<Option<QrCode>, sqlx::Error> {
        Err(sqlx::Error::PoolClosed)
    }
}
