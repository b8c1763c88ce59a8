use serde::{Deserialize, Serialize};

/// The slice of an employee row timekeeping needs: who they are and which
/// schedule they work.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Employee {
    pub id: u64,

    /// Unassigned employees cannot scan in
    pub schedule_id: Option<u64>,
}
