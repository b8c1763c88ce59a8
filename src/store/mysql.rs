use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::MySqlPool;

use super::TimekeepingStore;
use crate::model::{
    employee::Employee,
    qr_code::QrCode,
    schedule::Schedule,
    timekeeping::{Checkpoint, Timekeeping},
};

const RECORD_COLUMNS: &str = "id, employee_id, date, morning_shift_start, morning_shift_end, \
     afternoon_shift_start, afternoon_shift_end";

/// MySQL duplicate-key SQLSTATE, raised by the (employee_id, date) unique key
const DUPLICATE_KEY: &str = "23000";

#[derive(Clone)]
pub struct MySqlStore {
    pool: MySqlPool,
}

impl MySqlStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TimekeepingStore for MySqlStore {
    async fn find_employee(&self, employee_id: u64) -> Result<Option<Employee>, sqlx::Error> {
        sqlx::query_as::<_, Employee>(
            r#"
            SELECT id, schedule_id
            FROM employees
            WHERE id = ?
            "#,
        )
        .bind(employee_id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn find_schedule(&self, schedule_id: u64) -> Result<Option<Schedule>, sqlx::Error> {
        sqlx::query_as::<_, Schedule>(
            r#"
            SELECT id, morning_shift_start, morning_shift_end,
                   afternoon_shift_start, afternoon_shift_end
            FROM schedules
            WHERE id = ?
            "#,
        )
        .bind(schedule_id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn find_record(
        &self,
        employee_id: u64,
        date: NaiveDate,
    ) -> Result<Option<Timekeeping>, sqlx::Error> {
        let sql = format!(
            "SELECT {RECORD_COLUMNS} FROM timekeeping WHERE employee_id = ? AND date = ? LIMIT 1"
        );

        sqlx::query_as::<_, Timekeeping>(&sql)
            .bind(employee_id)
            .bind(date)
            .fetch_optional(&self.pool)
            .await
    }

    async fn find_records_between(
        &self,
        employee_id: u64,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<Timekeeping>, sqlx::Error> {
        let sql = format!(
            "SELECT {RECORD_COLUMNS} FROM timekeeping \
             WHERE employee_id = ? AND date BETWEEN ? AND ? \
             ORDER BY date ASC"
        );

        sqlx::query_as::<_, Timekeeping>(&sql)
            .bind(employee_id)
            .bind(from)
            .bind(to)
            .fetch_all(&self.pool)
            .await
    }

    async fn create_record(
        &self,
        employee_id: u64,
        date: NaiveDate,
    ) -> Result<Timekeeping, sqlx::Error> {
        let result = sqlx::query(
            r#"
            INSERT INTO timekeeping (employee_id, date)
            VALUES (?, ?)
            "#,
        )
        .bind(employee_id)
        .bind(date)
        .execute(&self.pool)
        .await;

        match result {
            Ok(done) => Ok(Timekeeping::empty(done.last_insert_id(), employee_id, date)),

            // Lost the race against a concurrent first read of the day
            Err(sqlx::Error::Database(db_err)) if db_err.code().as_deref() == Some(DUPLICATE_KEY) => {
                tracing::debug!(employee_id, %date, "Timekeeping row already created");
                self.find_record(employee_id, date)
                    .await?
                    .ok_or(sqlx::Error::RowNotFound)
            }

            Err(e) => Err(e),
        }
    }

    async fn stamp_checkpoint(
        &self,
        record_id: u64,
        checkpoint: Checkpoint,
        at: DateTime<Utc>,
    ) -> Result<bool, sqlx::Error> {
        let column = checkpoint.column();
        let sql = format!("UPDATE timekeeping SET {column} = ? WHERE id = ? AND {column} IS NULL");

        let result = sqlx::query(&sql)
            .bind(at)
            .bind(record_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() == 1)
    }

    async fn current_qr_code(&self) -> Result<Option<QrCode>, sqlx::Error> {
        sqlx::query_as::<_, QrCode>(
            r#"
            SELECT id
            FROM qr_codes
            ORDER BY id ASC
            LIMIT 1
            "#,
        )
        .fetch_optional(&self.pool)
        .await
    }
}
